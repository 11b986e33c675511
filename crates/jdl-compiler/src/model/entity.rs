use std::fmt;

use indexmap::IndexMap;
use jdl_core::{FieldType, ValidationKind, ValidationValue};

/// Field name reserved for generator-assigned primary keys.
///
/// Fields with this exact name never appear in an [`Entity`].
pub const RESERVED_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    name: String,
    table_name: String,
    fields: IndexMap<String, Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Entity {
    /// Create an entity whose table name is its name, verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            table_name: name.clone(),
            name,
            fields: IndexMap::new(),
            comment: None,
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Add a field. A field named [`RESERVED_FIELD`] is ignored.
    pub fn with_field(mut self, field: Field) -> Self {
        if field.name != RESERVED_FIELD {
            self.fields.insert(field.name.clone(), field);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Resolved field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Builtin(FieldType),
    /// Name of a declared enumeration.
    Enum(String),
}

impl TypeRef {
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(ty) => ty.name(),
            Self::Enum(name) => name,
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

impl From<FieldType> for TypeRef {
    fn from(ty: FieldType) -> Self {
        Self::Builtin(ty)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for TypeRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    field_type: TypeRef,
    validations: IndexMap<ValidationKind, Validation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            validations: IndexMap::new(),
            comment: None,
        }
    }

    /// Add a validation, replacing one of the same kind.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validations.insert(validation.kind, validation);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &TypeRef {
        &self.field_type
    }

    pub fn type_name(&self) -> &str {
        self.field_type.name()
    }

    pub fn validations(&self) -> &IndexMap<ValidationKind, Validation> {
        &self.validations
    }

    pub fn validation(&self, kind: ValidationKind) -> Option<&Validation> {
        self.validations.get(&kind)
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Validation {
    #[serde(rename = "name")]
    kind: ValidationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<ValidationValue>,
}

impl Validation {
    pub fn new(kind: ValidationKind) -> Self {
        Self { kind, value: None }
    }

    pub fn with_value(kind: ValidationKind, value: impl Into<ValidationValue>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }

    pub fn value(&self) -> Option<&ValidationValue> {
        self.value.as_ref()
    }
}
