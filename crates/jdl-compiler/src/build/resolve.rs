//! Option resolution.
//!
//! Options are collected during the build without looking at targets. Once
//! the entity map is final, a wildcard becomes every entity of the model
//! minus the exclusions, so where the option sits in the document never
//! matters. Explicit lists are kept as declared. Every declaration yields its
//! own entry; nothing is merged.

use indexmap::IndexSet;
use jdl_core::{OptionName, RawOption, WILDCARD};
use tracing::debug;

use crate::invariants;
use crate::model::{BinaryOption, DomainModel, DomainOption, UnaryOption};

/// Declared targets of an option, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Targets {
    /// The wildcard marker: every declared entity.
    All,
    Named(IndexSet<String>),
}

/// An option as declared, waiting for the entity map to be complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingOption {
    pub(crate) name: OptionName,
    pub(crate) value: Option<String>,
    pub(crate) targets: Targets,
    pub(crate) excluded: IndexSet<String>,
}

impl PendingOption {
    pub(crate) fn collect(raw: &RawOption) -> Self {
        let targets = if raw.list.iter().any(|t| t == WILDCARD) {
            Targets::All
        } else {
            Targets::Named(raw.list.iter().cloned().collect())
        };
        Self {
            name: invariants::ensure_option_name(&raw.name),
            value: raw.value.clone(),
            targets,
            excluded: raw.excluded.iter().cloned().collect(),
        }
    }
}

/// Resolve pending options against the model's final entity set and attach
/// them in declaration order.
pub(crate) fn resolve_options(model: &mut DomainModel, pending: Vec<PendingOption>) {
    let declared: IndexSet<String> = model.entity_names().map(str::to_owned).collect();
    for option in pending {
        model.push_option(resolve(option, &declared));
    }
}

fn resolve(option: PendingOption, declared: &IndexSet<String>) -> DomainOption {
    let PendingOption {
        name,
        value,
        targets,
        excluded,
    } = option;

    let entity_names: IndexSet<String> = match targets {
        Targets::All => {
            let expanded: IndexSet<String> = declared
                .iter()
                .filter(|entity| !excluded.contains(*entity))
                .cloned()
                .collect();
            debug!(
                option = %name,
                entities = expanded.len(),
                excluded = excluded.len(),
                "expanded wildcard target"
            );
            expanded
        }
        Targets::Named(names) => {
            for target in &names {
                invariants::ensure_declared(declared, target);
            }
            names
        }
    };

    match name {
        OptionName::Unary(unary) => UnaryOption::new(unary, entity_names)
            .with_excluded(excluded)
            .into(),
        OptionName::Binary(binary) => {
            let value = invariants::ensure_option_value(value, binary);
            BinaryOption::new(binary, value, entity_names)
                .with_excluded(excluded)
                .into()
        }
    }
}
