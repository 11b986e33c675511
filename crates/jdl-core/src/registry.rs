//! Type registries, one per storage technology.
//!
//! A registry answers two questions for a build: is a type name legal for
//! this technology, and may a validation kind be attached to a field of that
//! type. Registries are built lazily from the tables below on first use and
//! never change afterwards.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::types::{ENUM_VALIDATIONS, FieldType, ValidationKind};

/// Storage technologies with a type registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTechnology {
    Sql,
    MongoDb,
    Cassandra,
}

impl StorageTechnology {
    pub const ALL: [Self; 3] = [Self::Sql, Self::MongoDb, Self::Cassandra];

    /// Identifier used to select this technology.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::MongoDb => "mongodb",
            Self::Cassandra => "cassandra",
        }
    }

    /// Exact, case-sensitive identifier match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for StorageTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Legal field types of one storage technology.
#[derive(Debug)]
pub struct TypeRegistry {
    technology: StorageTechnology,
    types: IndexMap<&'static str, FieldType>,
}

impl TypeRegistry {
    fn new(technology: StorageTechnology, types: &[FieldType]) -> Self {
        Self {
            technology,
            types: types.iter().map(|&t| (t.name(), t)).collect(),
        }
    }

    pub fn technology(&self) -> StorageTechnology {
        self.technology
    }

    pub fn name(&self) -> &'static str {
        self.technology.name()
    }

    /// Check if `name` is a builtin type of this technology.
    pub fn is_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Resolve a builtin type name. `None` for unknown names and for types
    /// that exist only in other technologies.
    pub fn resolve(&self, name: &str) -> Option<FieldType> {
        self.types.get(name).copied()
    }

    /// Builtin types in table order.
    pub fn types(&self) -> impl Iterator<Item = FieldType> + '_ {
        self.types.values().copied()
    }

    /// Validation kinds for a builtin type name.
    pub fn validations(&self, type_name: &str) -> Option<&'static [ValidationKind]> {
        self.resolve(type_name).map(FieldType::validations)
    }

    /// Check if a validation kind is legal on a builtin type.
    ///
    /// Unknown type names support nothing.
    pub fn supports_validation(&self, type_name: &str, kind: ValidationKind) -> bool {
        self.validations(type_name)
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// Validation kinds for fields typed by a user enumeration.
    pub fn enum_validations(&self) -> &'static [ValidationKind] {
        ENUM_VALIDATIONS
    }

    pub fn supports_enum_validation(&self, kind: ValidationKind) -> bool {
        ENUM_VALIDATIONS.contains(&kind)
    }
}

macro_rules! define_registries {
    (
        $(
            $fn_name:ident => {
                technology: $tech:ident,
                types: [$($ty:ident),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            pub fn $fn_name() -> &'static TypeRegistry {
                static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
                    TypeRegistry::new(StorageTechnology::$tech, &[$(FieldType::$ty),*])
                });
                &REGISTRY
            }
        )*

        impl StorageTechnology {
            /// The registry governing builds for this technology.
            pub fn registry(self) -> &'static TypeRegistry {
                match self {
                    $(Self::$tech => $fn_name(),)*
                }
            }
        }

        pub fn all() -> Vec<&'static TypeRegistry> {
            vec![$($fn_name()),*]
        }
    };
}

define_registries! {
    sql => {
        technology: Sql,
        types: [
            String, Integer, Long, BigDecimal, Float, Double, Boolean,
            LocalDate, ZonedDateTime, Instant, Blob, AnyBlob, ImageBlob, TextBlob,
        ],
    },
    mongodb => {
        technology: MongoDb,
        types: [
            String, Integer, Long, BigDecimal, Float, Double, Boolean,
            LocalDate, ZonedDateTime, Instant, Blob, AnyBlob, ImageBlob, TextBlob,
        ],
    },
    cassandra => {
        technology: Cassandra,
        types: [String, Integer, Long, BigDecimal, Float, Double, Boolean, Date, Uuid, Instant],
    },
}

/// Select a registry by exact technology identifier.
pub fn from_name(name: &str) -> Option<&'static TypeRegistry> {
    StorageTechnology::from_name(name).map(StorageTechnology::registry)
}
