//! Object model construction.
//!
//! Runs on validated documents only. Two passes:
//! 1. Enumerations, entities and relationships are materialized in
//!    declaration order
//! 2. Options are collected untouched and resolved once every entity is in
//!    the model (see `resolve`)
//!
//! Redeclared entities and enumerations replace earlier ones (last
//! declaration wins) while keeping the position of the first.

mod resolve;


use jdl_core::{RawDocument, RawEntity, RawEnum, RawField, RawRelationship, RawRelationshipSide, TypeRegistry};
use tracing::debug;

use resolve::{PendingOption, resolve_options};

use crate::analyze::{DeclaredNames, resolve_type};
use crate::invariants;
use crate::model::{
    DomainModel, Entity, Enumeration, Field, RESERVED_FIELD, Relationship, RelationshipSide,
    Validation,
};

pub(crate) fn build_model(
    document: &RawDocument,
    registry: &TypeRegistry,
    names: &DeclaredNames,
) -> DomainModel {
    let mut model = DomainModel::new();

    for raw in &document.enums {
        if model.insert_enum(build_enum(raw)).is_some() {
            debug!(name = %raw.name, "enumeration redeclared, keeping the last declaration");
        }
    }
    for raw in &document.entities {
        if model.insert_entity(build_entity(raw, registry, names)).is_some() {
            debug!(name = %raw.name, "entity redeclared, keeping the last declaration");
        }
    }
    for raw in &document.relationships {
        model.push_relationship(build_relationship(raw));
    }

    let pending = document.options.iter().map(PendingOption::collect).collect();
    resolve_options(&mut model, pending);

    debug!(
        entities = model.entities().len(),
        enums = model.enums().len(),
        relationships = model.relationships().len(),
        options = model.options().len(),
        "domain model built"
    );
    model
}

fn build_enum(raw: &RawEnum) -> Enumeration {
    Enumeration::new(&raw.name, &raw.values)
}

fn build_entity(raw: &RawEntity, registry: &TypeRegistry, names: &DeclaredNames) -> Entity {
    let mut entity = Entity::new(&raw.name);
    if let Some(table_name) = raw.table_name.as_deref().filter(|t| !t.is_empty()) {
        entity = entity.with_table_name(table_name);
    }
    if let Some(comment) = &raw.javadoc {
        entity = entity.with_comment(comment);
    }

    for field in &raw.body {
        if field.name == RESERVED_FIELD {
            debug!(entity = %raw.name, "dropping reserved field `{RESERVED_FIELD}`");
            continue;
        }
        entity = entity.with_field(build_field(field, registry, names));
    }
    entity
}

fn build_field(raw: &RawField, registry: &TypeRegistry, names: &DeclaredNames) -> Field {
    let field_type = invariants::ensure_type(
        resolve_type(&raw.type_name, registry, names),
        &raw.type_name,
    );

    let mut field = Field::new(&raw.name, field_type);
    for clause in &raw.validations {
        let kind = invariants::ensure_validation_kind(&clause.key);
        let validation = match &clause.value {
            Some(value) => Validation::with_value(kind, value.clone()),
            None => Validation::new(kind),
        };
        field = field.with_validation(validation);
    }
    if let Some(comment) = &raw.javadoc {
        field = field.with_comment(comment);
    }
    field
}

fn build_relationship(raw: &RawRelationship) -> Relationship {
    Relationship::new(
        invariants::ensure_cardinality(&raw.cardinality),
        build_side(&raw.from),
        build_side(&raw.to),
    )
}

fn build_side(raw: &RawRelationshipSide) -> RelationshipSide {
    let mut side = RelationshipSide::new(&raw.name).with_required(raw.required);
    if let Some(field) = &raw.injected_field {
        side = side.with_injected_field(field);
    }
    if let Some(comment) = &raw.javadoc {
        side = side.with_comment(comment);
    }
    side
}
