//! JDL compiler: semantic validation and object model construction.
//!
//! Turns the structural tree of a JDL document into a validated, immutable
//! domain model:
//! - `analyze` - semantic checks against a storage technology's type registry
//! - `build` - domain model construction and option resolution
//! - `document` - the staged `DocumentBuilder` facade
//! - `model` - the finalized domain model
//! - `reader` - structural trees read from files
//! - `error` - the error taxonomy

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
mod build;
pub mod document;
pub mod error;
mod invariants;
pub mod model;
pub mod reader;

#[cfg(test)]
pub mod test_utils;

pub use document::{DocumentBuilder, DocumentValidated, parse, parse_json};
pub use error::{Error, ErrorKind, Result};
pub use model::{
    BinaryOption, DomainModel, DomainOption, Entity, Enumeration, Field, Relationship,
    RelationshipSide, TypeRef, UnaryOption, Validation,
};
pub use reader::{parse_from_files, read_file, read_files};
