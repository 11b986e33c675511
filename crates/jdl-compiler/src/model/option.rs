use indexmap::IndexSet;
use jdl_core::{BinaryOptionName, OptionName, UnaryOptionName};

/// A flag applied to a set of entities.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryOption {
    name: UnaryOptionName,
    entity_names: IndexSet<String>,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    excluded_names: IndexSet<String>,
}

impl UnaryOption {
    pub fn new<I, S>(name: UnaryOptionName, entity_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            entity_names: entity_names.into_iter().map(Into::into).collect(),
            excluded_names: IndexSet::new(),
        }
    }

    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names = excluded.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> UnaryOptionName {
        self.name
    }

    pub fn entity_names(&self) -> &IndexSet<String> {
        &self.entity_names
    }

    pub fn excluded_names(&self) -> &IndexSet<String> {
        &self.excluded_names
    }
}

/// A setting with a value, applied to a set of entities.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryOption {
    name: BinaryOptionName,
    value: String,
    entity_names: IndexSet<String>,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    excluded_names: IndexSet<String>,
}

impl BinaryOption {
    pub fn new<I, S>(name: BinaryOptionName, value: impl Into<String>, entity_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            value: value.into(),
            entity_names: entity_names.into_iter().map(Into::into).collect(),
            excluded_names: IndexSet::new(),
        }
    }

    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names = excluded.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> BinaryOptionName {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn entity_names(&self) -> &IndexSet<String> {
        &self.entity_names
    }

    pub fn excluded_names(&self) -> &IndexSet<String> {
        &self.excluded_names
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DomainOption {
    Unary(UnaryOption),
    Binary(BinaryOption),
}

impl DomainOption {
    pub fn name(&self) -> OptionName {
        match self {
            Self::Unary(o) => OptionName::Unary(o.name),
            Self::Binary(o) => OptionName::Binary(o.name),
        }
    }

    /// Resolved target entities.
    pub fn entity_names(&self) -> &IndexSet<String> {
        match self {
            Self::Unary(o) => &o.entity_names,
            Self::Binary(o) => &o.entity_names,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Unary(_) => None,
            Self::Binary(o) => Some(&o.value),
        }
    }

    pub fn applies_to(&self, entity: &str) -> bool {
        self.entity_names().contains(entity)
    }
}

impl From<UnaryOption> for DomainOption {
    fn from(option: UnaryOption) -> Self {
        Self::Unary(option)
    }
}

impl From<BinaryOption> for DomainOption {
    fn from(option: BinaryOption) -> Self {
        Self::Binary(option)
    }
}
