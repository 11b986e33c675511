#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the JDL compiler.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the structural tree emitted by
//!   the JDL grammar parser
//! - **Vocabulary layer**: fixed tables of field types, validations, options
//!   and relationship kinds, one type registry per storage technology
//!
//! Everything in the vocabulary layer is immutable after first use, so the
//! tables can be shared freely between concurrent builds.

mod options;
pub mod registry;
mod types;
pub mod utils;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod utils_tests;

pub use options::{BinaryOptionName, OptionName, UnaryOptionName, WILDCARD};
pub use registry::{StorageTechnology, TypeRegistry};
pub use types::{FieldType, RelationshipKind, ValidationKind, ValidationValue, ValueShape};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Structural tree of one or more JDL documents, as produced by the grammar
/// parser.
///
/// Declarations keep their source order. Nothing here is validated: names may
/// be empty, types unknown and references dangling.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub entities: Vec<RawEntity>,
    #[serde(default)]
    pub enums: Vec<RawEnum>,
    #[serde(default)]
    pub relationships: Vec<RawRelationship>,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// Raw `entity Name (table_name) { ... }` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub body: Vec<RawField>,
    #[serde(default)]
    pub javadoc: Option<String>,
}

/// Raw field line inside an entity body.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub validations: Vec<RawValidation>,
    #[serde(default)]
    pub javadoc: Option<String>,
}

/// Raw validation clause, e.g. `minlength(5)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawValidation {
    pub key: String,
    #[serde(default)]
    pub value: Option<ValidationValue>,
}

/// Raw `enum Name { A, B }` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawEnum {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Raw `relationship OneToMany { A{b} to B{a} }` entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawRelationship {
    pub cardinality: String,
    pub from: RawRelationshipSide,
    pub to: RawRelationshipSide,
}

/// One endpoint of a raw relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationshipSide {
    pub name: String,
    #[serde(default)]
    pub injected_field: Option<String>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Raw option line, e.g. `paginate A, B with pager except C`.
///
/// `list` holds entity names or the wildcard marker; `value` is present only
/// for binary options.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub list: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl RawDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every declaration of `other` after the ones already held.
    pub fn merge(&mut self, other: RawDocument) {
        self.entities.extend(other.entities);
        self.enums.extend(other.enums);
        self.relationships.extend(other.relationships);
        self.options.extend(other.options);
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.enums.is_empty()
            && self.relationships.is_empty()
            && self.options.is_empty()
    }

    /// Entity names in declaration order (duplicates included).
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    /// Enumeration names in declaration order (duplicates included).
    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(|e| e.name.as_str())
    }
}

impl Extend<RawDocument> for RawDocument {
    fn extend<I: IntoIterator<Item = RawDocument>>(&mut self, iter: I) {
        for document in iter {
            self.merge(document);
        }
    }
}

impl FromIterator<RawDocument> for RawDocument {
    fn from_iter<I: IntoIterator<Item = RawDocument>>(iter: I) -> Self {
        let mut merged = Self::new();
        merged.extend(iter);
        merged
    }
}

/// Parse the JSON form of a structural tree.
///
/// A JSON `null` yields `Ok(None)` so callers can tell an absent document
/// from a malformed one.
pub fn parse_document(json: &str) -> Result<Option<RawDocument>, serde_json::Error> {
    serde_json::from_str(json)
}
