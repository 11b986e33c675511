//! Semantic validation.
//!
//! Checks a raw document against a type registry before anything is built:
//! - Name collection (declared): entity shells and enumerations
//! - Field types and validation clauses (fields)
//! - Relationship endpoints (relationships)
//! - Option names, values and targets (options)
//!
//! Every check is a predicate over the raw tree; the first violation aborts
//! the whole document.

mod declared;
mod fields;
mod options;
mod relationships;

#[cfg(test)]
mod declared_tests;
#[cfg(test)]
mod options_tests;
#[cfg(test)]
mod relationships_tests;

use jdl_core::{RawDocument, TypeRegistry};
use tracing::trace;

use crate::Result;

pub use declared::{DeclaredNames, collect_names};
pub use fields::{resolve_type, validate_entity_body, validate_field};
pub use options::validate_option;
pub use relationships::validate_relationship;

/// Validate a whole document.
///
/// Returns the declared names so later phases resolve against the same
/// complete sets the checks used.
pub fn validate<'d>(
    document: &'d RawDocument,
    registry: &TypeRegistry,
) -> Result<DeclaredNames<'d>> {
    let names = collect_names(document)?;

    for entity in &document.entities {
        validate_entity_body(entity, registry, &names)?;
    }
    for relationship in &document.relationships {
        validate_relationship(relationship, &names)?;
    }
    for option in &document.options {
        validate_option(option, &names)?;
    }

    trace!(
        storage = registry.name(),
        entities = names.entities().len(),
        enums = names.enums().len(),
        relationships = document.relationships.len(),
        options = document.options.len(),
        "document validated"
    );
    Ok(names)
}
