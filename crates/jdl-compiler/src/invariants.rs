//! Invariant checks excluded from coverage reports.
//!
//! The builder only runs on validated documents; these helpers turn a
//! lookup that validation already proved successful into its value.

#![cfg_attr(coverage_nightly, coverage(off))]

use indexmap::IndexSet;
use jdl_core::{BinaryOptionName, OptionName, RelationshipKind, ValidationKind};

use crate::model::TypeRef;

pub(crate) fn ensure_type(resolved: Option<TypeRef>, type_name: &str) -> TypeRef {
    resolved.unwrap_or_else(|| {
        panic!("field type `{type_name}` reached the builder unresolved (validation must run first)")
    })
}

pub(crate) fn ensure_validation_kind(key: &str) -> ValidationKind {
    ValidationKind::from_name(key).unwrap_or_else(|| {
        panic!("validation `{key}` reached the builder unchecked (validation must run first)")
    })
}

pub(crate) fn ensure_cardinality(cardinality: &str) -> RelationshipKind {
    RelationshipKind::from_name(cardinality).unwrap_or_else(|| {
        panic!("cardinality `{cardinality}` reached the builder unchecked (validation must run first)")
    })
}

pub(crate) fn ensure_option_name(name: &str) -> OptionName {
    OptionName::from_name(name).unwrap_or_else(|| {
        panic!("option `{name}` reached the builder unchecked (validation must run first)")
    })
}

pub(crate) fn ensure_option_value(value: Option<String>, name: BinaryOptionName) -> String {
    value.unwrap_or_else(|| {
        panic!(
            "binary option `{}` reached the resolver without a value (validation must run first)",
            name.name()
        )
    })
}

pub(crate) fn ensure_declared(declared: &IndexSet<String>, target: &str) {
    assert!(
        declared.contains(target),
        "option target `{target}` is not an entity of the model (validation must run first)"
    );
}
