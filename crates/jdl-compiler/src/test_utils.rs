//! Test helpers: documents from inline JSON and fixture files.

use std::path::PathBuf;

use jdl_core::{RawDocument, registry};

use crate::analyze::{self, DeclaredNames};
use crate::{DomainModel, Error, Result, parse};

/// Parse inline JSON into a raw document.
pub fn doc(json: &str) -> RawDocument {
    jdl_core::parse_document(json)
        .expect("test JSON must be well-formed")
        .expect("test JSON must not be null")
}

/// Path of a file under `fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Load a fixture's structural tree.
pub fn fixture_doc(name: &str) -> RawDocument {
    let content = std::fs::read_to_string(fixture(name)).expect("fixture must exist");
    doc(&content)
}

pub fn build(document: &RawDocument, storage: &str) -> Result<DomainModel> {
    parse(Some(document), Some(storage))
}

/// Build for SQL and panic on failure.
pub fn expect_model(json: &str) -> DomainModel {
    build(&doc(json), "sql").expect("document should build")
}

/// Build for SQL and panic on success.
pub fn expect_error(json: &str) -> Error {
    match build(&doc(json), "sql") {
        Ok(model) => panic!("expected an error, built {model:#?}"),
        Err(e) => e,
    }
}

/// Run only the validator against the SQL registry.
pub fn validate_sql(document: &RawDocument) -> Result<DeclaredNames<'_>> {
    analyze::validate(document, registry::sql())
}

/// Render an error as `Kind: message` for snapshots.
pub fn render(error: &Error) -> String {
    format!("{:?}: {}", error.kind(), error.message())
}
