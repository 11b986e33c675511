//! Declared names: the first pass over a document.
//!
//! Entity and enumeration names are collected from the whole document
//! before any reference is checked, so references never depend on
//! declaration order.

use indexmap::IndexSet;
use jdl_core::{RawDocument, RawEntity, RawEnum};

use crate::{Error, ErrorKind, Result};

/// Entity and enumeration names declared anywhere in a document.
#[derive(Clone, Debug, Default)]
pub struct DeclaredNames<'d> {
    entities: IndexSet<&'d str>,
    enums: IndexSet<&'d str>,
}

impl<'d> DeclaredNames<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_entity(&self, name: &str) -> bool {
        self.entities.contains(name)
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    /// Entity names in first-declaration order.
    pub fn entities(&self) -> &IndexSet<&'d str> {
        &self.entities
    }

    /// Enumeration names in first-declaration order.
    pub fn enums(&self) -> &IndexSet<&'d str> {
        &self.enums
    }
}

/// Collect declared names, checking entity shells and enumerations on the
/// way.
///
/// A name declared twice is recorded once; the builder lets the later
/// declaration win.
pub fn collect_names(document: &RawDocument) -> Result<DeclaredNames<'_>> {
    let mut names = DeclaredNames::new();

    for entity in &document.entities {
        check_entity_shell(entity)?;
        names.entities.insert(entity.name.as_str());
    }
    for enumeration in &document.enums {
        check_enum(enumeration)?;
        names.enums.insert(enumeration.name.as_str());
    }

    Ok(names)
}

fn check_entity_shell(entity: &RawEntity) -> Result<()> {
    if entity.name.is_empty() {
        return Err(Error::new(ErrorKind::NullArgument, "entity name"));
    }
    Ok(())
}

fn check_enum(enumeration: &RawEnum) -> Result<()> {
    if enumeration.name.is_empty() {
        return Err(Error::new(ErrorKind::NullArgument, "enumeration name"));
    }
    if enumeration.values.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("enumeration `{}` has no values", enumeration.name),
        ));
    }

    let mut seen = IndexSet::new();
    for value in &enumeration.values {
        if value.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("enumeration `{}` has an empty value", enumeration.name),
            ));
        }
        if !seen.insert(value.as_str()) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!(
                    "value `{value}` appears twice in enumeration `{}`",
                    enumeration.name
                ),
            ));
        }
    }
    Ok(())
}
