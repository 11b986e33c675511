use jdl_core::{RawRelationship, RelationshipKind};

use super::DeclaredNames;
use crate::{Error, ErrorKind, Result};

/// Both endpoints must be entities declared somewhere in the document.
pub fn validate_relationship(relationship: &RawRelationship, names: &DeclaredNames) -> Result<()> {
    if RelationshipKind::from_name(&relationship.cardinality).is_none() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!(
                "`{}` is not a relationship cardinality",
                relationship.cardinality
            ),
        ));
    }

    let from = relationship.from.name.as_str();
    let to = relationship.to.name.as_str();
    for endpoint in [from, to] {
        if endpoint.is_empty() {
            return Err(Error::new(ErrorKind::NullArgument, "relationship endpoint"));
        }
        if !names.is_entity(endpoint) {
            return Err(Error::new(
                ErrorKind::UndeclaredEntity,
                format!("in the relationship between `{from}` and `{to}`, `{endpoint}` is not declared"),
            ));
        }
    }
    Ok(())
}
