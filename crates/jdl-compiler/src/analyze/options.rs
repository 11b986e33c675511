//! Option declarations.
//!
//! Wildcard targets are left alone here; the resolver expands them once the
//! model is complete. Explicit targets and exclusions are checked against
//! every entity the document declares.

use jdl_core::{OptionName, RawOption, WILDCARD};

use super::DeclaredNames;
use crate::{Error, ErrorKind, Result};

pub fn validate_option(option: &RawOption, names: &DeclaredNames) -> Result<()> {
    let Some(name) = OptionName::from_name(&option.name) else {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("`{}` is not an option", option.name),
        ));
    };

    match (name, option.value.as_deref()) {
        (OptionName::Unary(_), Some(value)) => {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("option `{name}` takes no value, got `{value}`"),
            ));
        }
        (OptionName::Binary(_), None) => {
            return Err(Error::new(
                ErrorKind::NullArgument,
                format!("value of option `{name}`"),
            ));
        }
        (OptionName::Binary(binary), Some(value)) if !binary.accepts(value) => {
            let expected = match binary.values() {
                Some(values) => values.join(", "),
                None => "a single word".to_string(),
            };
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("`{value}` is not a value of option `{name}` (expected {expected})"),
            ));
        }
        _ => {}
    }

    if option.list.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("option `{name}` has no target entity"),
        ));
    }

    for target in &option.list {
        if target != WILDCARD && !names.is_entity(target) {
            return Err(Error::new(
                ErrorKind::UndeclaredEntity,
                format!("`{target}` is targeted by option `{name}` but not declared"),
            ));
        }
    }
    for excluded in &option.excluded {
        if !names.is_entity(excluded) {
            return Err(Error::new(
                ErrorKind::UndeclaredEntity,
                format!("`{excluded}` is excluded from option `{name}` but not declared"),
            ));
        }
    }
    Ok(())
}
