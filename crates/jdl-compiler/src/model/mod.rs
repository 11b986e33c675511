//! The finalized domain model.
//!
//! Value objects only: everything here is built once by the pipeline and
//! read by downstream generators. Equality is structural; map and set
//! comparisons ignore insertion order.

mod entity;
mod enumeration;
mod option;
mod relationship;


use indexmap::IndexMap;

pub use entity::{Entity, Field, RESERVED_FIELD, TypeRef, Validation};
pub use enumeration::Enumeration;
pub use option::{BinaryOption, DomainOption, UnaryOption};
pub use relationship::{Relationship, RelationshipSide};

/// Root container of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DomainModel {
    entities: IndexMap<String, Entity>,
    enums: IndexMap<String, Enumeration>,
    relationships: Vec<Relationship>,
    options: Vec<DomainOption>,
}

impl DomainModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities keyed by name, in first-declaration order.
    pub fn entities(&self) -> &IndexMap<String, Entity> {
        &self.entities
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn contains_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Enumerations keyed by name, in first-declaration order.
    pub fn enums(&self) -> &IndexMap<String, Enumeration> {
        &self.enums
    }

    pub fn enumeration(&self, name: &str) -> Option<&Enumeration> {
        self.enums.get(name)
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Finalized options in declaration order.
    pub fn options(&self) -> &[DomainOption] {
        &self.options
    }

    /// Insert an entity, replacing any previous one with the same name.
    ///
    /// Returns the replaced entity.
    pub(crate) fn insert_entity(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.name().to_owned(), entity)
    }

    /// Insert an enumeration, replacing any previous one with the same name.
    pub(crate) fn insert_enum(&mut self, enumeration: Enumeration) -> Option<Enumeration> {
        self.enums.insert(enumeration.name().to_owned(), enumeration)
    }

    pub(crate) fn push_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub(crate) fn push_option(&mut self, option: DomainOption) {
        self.options.push(option);
    }
}
