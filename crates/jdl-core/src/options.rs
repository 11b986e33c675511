//! Generator option vocabulary.
//!
//! Unary options are flags applied to a set of entities. Binary options also
//! carry a value, drawn either from a fixed list or, for the grouping and
//! suffix options, any single word.

use std::fmt;

/// Target marker meaning "every entity declared in the document".
pub const WILDCARD: &str = "*";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnaryOptionName {
    SkipClient,
    SkipServer,
    NoFluentMethod,
}

impl UnaryOptionName {
    pub const ALL: [Self; 3] = [Self::SkipClient, Self::SkipServer, Self::NoFluentMethod];

    pub const fn name(self) -> &'static str {
        match self {
            Self::SkipClient => "skipClient",
            Self::SkipServer => "skipServer",
            Self::NoFluentMethod => "noFluentMethod",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.name() == name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryOptionName {
    Dto,
    Service,
    Pagination,
    Microservice,
    SearchEngine,
    AngularSuffix,
}

impl BinaryOptionName {
    pub const ALL: [Self; 6] = [
        Self::Dto,
        Self::Service,
        Self::Pagination,
        Self::Microservice,
        Self::SearchEngine,
        Self::AngularSuffix,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dto => "dto",
            Self::Service => "service",
            Self::Pagination => "pagination",
            Self::Microservice => "microservice",
            Self::SearchEngine => "searchEngine",
            Self::AngularSuffix => "angularSuffix",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.name() == name)
    }

    /// Fixed value list, or `None` when any single word is accepted.
    pub const fn values(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Dto => Some(&["mapstruct"]),
            Self::Service => Some(&["serviceClass", "serviceImpl"]),
            Self::Pagination => Some(&["pager", "pagination", "infinite-scroll"]),
            Self::SearchEngine => Some(&["elasticsearch"]),
            Self::Microservice | Self::AngularSuffix => None,
        }
    }

    pub fn accepts(self, value: &str) -> bool {
        match self.values() {
            Some(values) => values.contains(&value),
            None => is_word(value),
        }
    }
}

fn is_word(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Any recognized option name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OptionName {
    Unary(UnaryOptionName),
    Binary(BinaryOptionName),
}

impl OptionName {
    pub fn from_name(name: &str) -> Option<Self> {
        UnaryOptionName::from_name(name)
            .map(Self::Unary)
            .or_else(|| BinaryOptionName::from_name(name).map(Self::Binary))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unary(o) => o.name(),
            Self::Binary(o) => o.name(),
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Self::Binary(_))
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
