//! Field types and validation clauses.
//!
//! A field type resolves against the registry first, then against the
//! enumerations declared anywhere in the document. Validation clauses are
//! checked against the resolved type:
//! - the kind must be known and supported by the type
//! - the value must have the kind's shape
//! - `pattern` values must parse as regular expressions

use indexmap::IndexSet;
use jdl_core::{RawEntity, RawField, RawValidation, TypeRegistry, ValidationKind, ValidationValue};
use regex_syntax::ast::{self, parse::ParserBuilder};

use super::DeclaredNames;
use crate::model::{RESERVED_FIELD, TypeRef};
use crate::{Error, ErrorKind, Result};

/// Resolve a field type name.
///
/// Builtin types win over enumerations of the same name.
pub fn resolve_type(name: &str, registry: &TypeRegistry, names: &DeclaredNames) -> Option<TypeRef> {
    if let Some(ty) = registry.resolve(name) {
        return Some(TypeRef::Builtin(ty));
    }
    names.is_enum(name).then(|| TypeRef::enumeration(name))
}

/// Validate every field of an entity.
///
/// Fields named [`RESERVED_FIELD`] are skipped entirely: the builder drops
/// them, so neither their type nor their validations matter.
pub fn validate_entity_body(
    entity: &RawEntity,
    registry: &TypeRegistry,
    names: &DeclaredNames,
) -> Result<()> {
    let mut seen = IndexSet::new();
    for field in &entity.body {
        if field.name == RESERVED_FIELD {
            continue;
        }
        if field.name.is_empty() {
            return Err(Error::new(
                ErrorKind::NullArgument,
                format!("field name in entity `{}`", entity.name),
            ));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!(
                    "field `{}` is declared twice in entity `{}`",
                    field.name, entity.name
                ),
            ));
        }
        validate_field(entity, field, registry, names)?;
    }
    Ok(())
}

pub fn validate_field(
    entity: &RawEntity,
    field: &RawField,
    registry: &TypeRegistry,
    names: &DeclaredNames,
) -> Result<()> {
    let Some(field_type) = resolve_type(&field.type_name, registry, names) else {
        return Err(Error::new(
            ErrorKind::WrongType,
            format!(
                "`{}` is neither a {} type nor a declared enumeration (field `{}` of `{}`)",
                field.type_name,
                registry.name(),
                field.name,
                entity.name
            ),
        ));
    };

    let mut seen = IndexSet::new();
    for validation in &field.validations {
        let kind = validate_clause(&field_type, registry, validation)
            .map_err(|detail| wrong_validation(entity, field, &detail))?;
        if !seen.insert(kind) {
            return Err(wrong_validation(
                entity,
                field,
                &format!("`{kind}` is declared twice"),
            ));
        }
    }
    Ok(())
}

fn wrong_validation(entity: &RawEntity, field: &RawField, detail: &str) -> Error {
    Error::new(
        ErrorKind::WrongValidation,
        format!("{detail} (field `{}` of `{}`)", field.name, entity.name),
    )
}

/// Check one clause, returning its kind or a detail describing the problem.
fn validate_clause(
    field_type: &TypeRef,
    registry: &TypeRegistry,
    validation: &RawValidation,
) -> std::result::Result<ValidationKind, String> {
    let Some(kind) = ValidationKind::from_name(&validation.key) else {
        return Err(format!("`{}` is not a validation", validation.key));
    };

    let supported = match field_type {
        TypeRef::Builtin(ty) => registry.supports_validation(ty.name(), kind),
        TypeRef::Enum(_) => registry.supports_enum_validation(kind),
    };
    if !supported {
        return Err(format!("`{kind}` is not supported for type `{field_type}`"));
    }

    let shape = kind.shape();
    if !shape.accepts(validation.value.as_ref()) {
        let found = match &validation.value {
            Some(value) => format!("got {value}"),
            None => "got nothing".to_string(),
        };
        return Err(format!("`{kind}` expects {}, {found}", shape.describe()));
    }

    if let Some(ValidationValue::Text(pattern)) = &validation.value
        && kind == ValidationKind::Pattern
    {
        check_pattern(pattern)?;
    }

    Ok(kind)
}

/// Reject patterns with syntax errors.
///
/// Back-references and look-around are accepted: generated code evaluates
/// patterns with an engine that supports them. The parser stops at its first
/// error, so each tolerated construct is replaced by a neutral stand-in and
/// the rest of the pattern is parsed again.
fn check_pattern(pattern: &str) -> std::result::Result<(), String> {
    let mut rest = pattern.to_owned();
    loop {
        // Octal disabled so \1-\9 are back-references, not octal escapes
        let parsed = ParserBuilder::new().octal(false).build().parse(&rest);
        let Err(e) = parsed else {
            return Ok(());
        };

        // Every stand-in is shorter than what it replaces, so this ends
        let stand_in = match e.kind() {
            ast::ErrorKind::UnsupportedBackreference => "x",
            ast::ErrorKind::UnsupportedLookAround => "(",
            kind => return Err(format!("pattern '{pattern}' is not a valid regex: {kind}")),
        };
        let span = e.span();
        rest.replace_range(span.start.offset..span.end.offset, stand_in);
    }
}
