//! Document facade: the staged build pipeline.
//!
//! ```text
//! DocumentBuilder ──validate()──▶ DocumentValidated ──build()──▶ DomainModel
//! ```
//!
//! Validation runs in full before any model object exists, so a rejected
//! document never yields a partial model.

use jdl_core::{RawDocument, StorageTechnology, TypeRegistry, registry};
use tracing::debug;

use crate::analyze::{self, DeclaredNames};
use crate::build;
use crate::model::DomainModel;
use crate::{Error, ErrorKind, Result};

/// Entry point: a raw document plus the storage technology to check it
/// against. Defaults to SQL.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<'d> {
    document: &'d RawDocument,
    registry: &'static TypeRegistry,
}

impl<'d> DocumentBuilder<'d> {
    pub fn new(document: &'d RawDocument) -> Self {
        Self {
            document,
            registry: registry::sql(),
        }
    }

    pub fn with_registry(mut self, registry: &'static TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_technology(self, technology: StorageTechnology) -> Self {
        self.with_registry(technology.registry())
    }

    /// Select the registry by identifier (`sql`, `mongodb`, `cassandra`).
    pub fn with_storage(self, storage: &str) -> Result<Self> {
        Ok(self.with_registry(select_registry(storage)?))
    }

    pub fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    /// Run every semantic check. The first violation is returned.
    pub fn validate(self) -> Result<DocumentValidated<'d>> {
        debug!(
            storage = self.registry.name(),
            entities = self.document.entities.len(),
            "validating document"
        );
        let names = analyze::validate(self.document, self.registry)?;
        Ok(DocumentValidated {
            document: self.document,
            registry: self.registry,
            names,
        })
    }
}

/// A document that passed validation. Building it cannot fail.
#[derive(Debug)]
pub struct DocumentValidated<'d> {
    document: &'d RawDocument,
    registry: &'static TypeRegistry,
    names: DeclaredNames<'d>,
}

impl<'d> DocumentValidated<'d> {
    pub fn document(&self) -> &'d RawDocument {
        self.document
    }

    pub fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    pub fn names(&self) -> &DeclaredNames<'d> {
        &self.names
    }

    pub fn build(self) -> DomainModel {
        build::build_model(self.document, self.registry, &self.names)
    }
}

/// Build a domain model from a raw document for the named storage
/// technology.
///
/// Either argument being absent is a [`ErrorKind::NullArgument`] error.
///
/// ```
/// use jdl_compiler::{ErrorKind, parse};
/// use jdl_core::RawDocument;
///
/// let document = RawDocument::new();
/// assert!(parse(Some(&document), Some("sql")).unwrap().entities().is_empty());
/// assert!(parse(Some(&document), Some("WRONG")).unwrap_err().is(ErrorKind::InvalidArgument));
/// ```
pub fn parse(document: Option<&RawDocument>, storage: Option<&str>) -> Result<DomainModel> {
    let Some(document) = document else {
        return Err(Error::new(ErrorKind::NullArgument, "document"));
    };
    let Some(storage) = storage else {
        return Err(Error::new(ErrorKind::NullArgument, "storage technology"));
    };

    let model = DocumentBuilder::new(document)
        .with_storage(storage)?
        .validate()?
        .build();
    Ok(model)
}

/// Like [`parse`], starting from the JSON form of the structural tree.
///
/// JSON `null` counts as an absent document.
pub fn parse_json(json: &str, storage: Option<&str>) -> Result<DomainModel> {
    let document = jdl_core::parse_document(json).map_err(|e| {
        Error::new(
            ErrorKind::InvalidArgument,
            format!("document is not a valid structural tree: {e}"),
        )
    })?;
    parse(document.as_ref(), storage)
}

fn select_registry(storage: &str) -> Result<&'static TypeRegistry> {
    if storage.is_empty() {
        return Err(Error::new(ErrorKind::NullArgument, "storage technology"));
    }
    registry::from_name(storage).ok_or_else(|| {
        let expected: Vec<&str> = StorageTechnology::ALL.iter().map(|t| t.name()).collect();
        Error::new(
            ErrorKind::InvalidArgument,
            format!(
                "`{storage}` is not a storage technology (expected {})",
                expected.join(", ")
            ),
        )
    })
}
