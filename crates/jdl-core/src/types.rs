//! Field types, validation kinds and relationship kinds.
//!
//! Which field types a storage technology accepts lives in the registry;
//! which validations a field type accepts is a property of the type itself
//! and is the same for every technology.

use std::fmt;

use crate::utils::to_pascal_case;

/// Builtin field type names known to at least one storage technology.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Long,
    BigDecimal,
    Float,
    Double,
    Boolean,
    LocalDate,
    ZonedDateTime,
    Instant,
    Date,
    #[serde(rename = "UUID")]
    Uuid,
    Blob,
    AnyBlob,
    ImageBlob,
    TextBlob,
}

impl FieldType {
    pub const ALL: [Self; 16] = [
        Self::String,
        Self::Integer,
        Self::Long,
        Self::BigDecimal,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::LocalDate,
        Self::ZonedDateTime,
        Self::Instant,
        Self::Date,
        Self::Uuid,
        Self::Blob,
        Self::AnyBlob,
        Self::ImageBlob,
        Self::TextBlob,
    ];

    /// Spelling used in JDL sources.
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::BigDecimal => "BigDecimal",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::LocalDate => "LocalDate",
            Self::ZonedDateTime => "ZonedDateTime",
            Self::Instant => "Instant",
            Self::Date => "Date",
            Self::Uuid => "UUID",
            Self::Blob => "Blob",
            Self::AnyBlob => "AnyBlob",
            Self::ImageBlob => "ImageBlob",
            Self::TextBlob => "TextBlob",
        }
    }

    /// Case-sensitive lookup by source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Validation kinds a field of this type may carry.
    pub const fn validations(self) -> &'static [ValidationKind] {
        use ValidationKind::*;
        match self {
            Self::String => &[Required, MinLength, MaxLength, Pattern],
            Self::Integer | Self::Long | Self::BigDecimal | Self::Float | Self::Double => {
                &[Required, Min, Max]
            }
            Self::Blob | Self::AnyBlob | Self::ImageBlob => &[Required, MinBytes, MaxBytes],
            Self::Boolean
            | Self::LocalDate
            | Self::ZonedDateTime
            | Self::Instant
            | Self::Date
            | Self::Uuid
            | Self::TextBlob => &[Required],
        }
    }

    pub fn supports(self, kind: ValidationKind) -> bool {
        self.validations().contains(&kind)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation kinds a field typed by a user enumeration may carry.
pub(crate) const ENUM_VALIDATIONS: &[ValidationKind] = &[ValidationKind::Required];

/// Named field constraints.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Min,
    Max,
    MinBytes,
    MaxBytes,
}

impl ValidationKind {
    pub const ALL: [Self; 8] = [
        Self::Required,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::Min,
        Self::Max,
        Self::MinBytes,
        Self::MaxBytes,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::Pattern => "pattern",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinBytes => "minbytes",
            Self::MaxBytes => "maxbytes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Shape of the value this kind expects.
    pub const fn shape(self) -> ValueShape {
        match self {
            Self::Required => ValueShape::Absent,
            Self::Min | Self::Max => ValueShape::Integer,
            Self::MinLength | Self::MaxLength | Self::MinBytes | Self::MaxBytes => {
                ValueShape::Length
            }
            Self::Pattern => ValueShape::Regex,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value attached to a validation clause.
///
/// Any JSON scalar is kept as written; whether it fits the clause is decided
/// by [`ValueShape::accepts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ValidationValue {
    Integer(i64),
    /// Decimals and integers outside the `i64` range.
    Number(serde_json::Number),
    Boolean(bool),
    Text(String),
}

impl From<i64> for ValidationValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for ValidationValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ValidationValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for ValidationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// Expected shape of a validation value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueShape {
    /// No value allowed.
    Absent,
    /// Any integer that fits `i64`. Decimals are rejected, including on
    /// floating-point fields.
    Integer,
    /// Non-negative integer (lengths and byte counts).
    Length,
    /// Non-empty pattern text. Regex syntax is checked by the compiler.
    Regex,
}

impl ValueShape {
    /// Presence and type check only.
    pub fn accepts(self, value: Option<&ValidationValue>) -> bool {
        match (self, value) {
            (Self::Absent, None) => true,
            (Self::Integer, Some(ValidationValue::Integer(_))) => true,
            (Self::Length, Some(ValidationValue::Integer(n))) => *n >= 0,
            (Self::Regex, Some(ValidationValue::Text(s))) => !s.is_empty(),
            _ => false,
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::Absent => "no value",
            Self::Integer => "an integer",
            Self::Length => "a non-negative integer",
            Self::Regex => "a non-empty pattern",
        }
    }
}

/// Relationship cardinality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationshipKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::OneToOne => "one-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
        }
    }

    /// Accepts the grammar's `one-to-many` spelling as well as the keyword
    /// spelling `OneToMany`.
    pub fn from_name(name: &str) -> Option<Self> {
        match to_pascal_case(name).as_str() {
            "OneToOne" => Some(Self::OneToOne),
            "OneToMany" => Some(Self::OneToMany),
            "ManyToOne" => Some(Self::ManyToOne),
            "ManyToMany" => Some(Self::ManyToMany),
            _ => None,
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
