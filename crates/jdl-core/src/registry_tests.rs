use crate::registry::{self, cassandra, mongodb, sql};
use crate::{FieldType, StorageTechnology, ValidationKind};

#[test]
fn registry_from_name() {
    assert_eq!(registry::from_name("sql").unwrap().name(), "sql");
    assert_eq!(
        registry::from_name("mongodb").unwrap().technology(),
        StorageTechnology::MongoDb
    );
    assert_eq!(registry::from_name("cassandra").unwrap().name(), "cassandra");
}

#[test]
fn registry_from_name_is_exact() {
    assert!(registry::from_name("SQL").is_none());
    assert!(registry::from_name(" sql").is_none());
    assert!(registry::from_name("WRONG").is_none());
    assert!(registry::from_name("").is_none());
}

#[test]
fn registries_are_shared() {
    assert!(std::ptr::eq(sql(), sql()));
    assert!(std::ptr::eq(StorageTechnology::Cassandra.registry(), cassandra()));
}

#[test]
fn all_returns_every_technology() {
    let all = registry::all();
    assert_eq!(all.len(), StorageTechnology::ALL.len());
    for (reg, tech) in all.iter().zip(StorageTechnology::ALL) {
        assert_eq!(reg.technology(), tech);
    }
}

#[test]
fn sql_types() {
    let reg = sql();
    assert!(reg.is_type("String"));
    assert!(reg.is_type("ZonedDateTime"));
    assert!(reg.is_type("TextBlob"));
    assert!(!reg.is_type("UUID"));
    assert!(!reg.is_type("Date"));
    assert!(!reg.is_type("string"));
    assert_eq!(reg.resolve("Long"), Some(FieldType::Long));
}

#[test]
fn mongodb_matches_sql_types() {
    let sql_types: Vec<_> = sql().types().collect();
    let mongo_types: Vec<_> = mongodb().types().collect();
    assert_eq!(sql_types, mongo_types);
}

#[test]
fn cassandra_types() {
    let reg = cassandra();
    assert!(reg.is_type("UUID"));
    assert!(reg.is_type("Date"));
    assert!(!reg.is_type("LocalDate"));
    assert!(!reg.is_type("Blob"));
    assert_eq!(reg.types().count(), 10);
}

#[test]
fn validations_follow_registry_types() {
    let reg = sql();
    assert!(reg.supports_validation("String", ValidationKind::Pattern));
    assert!(!reg.supports_validation("Long", ValidationKind::Pattern));
    assert!(reg.supports_validation("Blob", ValidationKind::MinBytes));
    // Types the technology lacks support no validation at all.
    assert!(!reg.supports_validation("UUID", ValidationKind::Required));
    assert!(cassandra().supports_validation("UUID", ValidationKind::Required));
}

#[test]
fn enum_validations() {
    let reg = sql();
    assert_eq!(reg.enum_validations(), [ValidationKind::Required]);
    assert!(reg.supports_enum_validation(ValidationKind::Required));
    assert!(!reg.supports_enum_validation(ValidationKind::MaxLength));
}
