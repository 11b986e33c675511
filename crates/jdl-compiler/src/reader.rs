//! Reading structural trees from disk.
//!
//! Each file holds the JSON form of one document; several files are
//! concatenated in the order given.

use std::fs;
use std::path::Path;

use jdl_core::RawDocument;
use tracing::debug;

use crate::{Error, ErrorKind, Result};

/// Read one file into a string.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::new(ErrorKind::NullArgument, "file path"));
    }
    if !path.is_file() {
        return Err(Error::new(
            ErrorKind::InvalidFile,
            format!(
                "`{}` must exist and must not be a directory",
                path.display()
            ),
        ));
    }
    fs::read_to_string(path).map_err(|e| {
        Error::new(
            ErrorKind::InvalidFile,
            format!("`{}` could not be read: {e}", path.display()),
        )
    })
}

/// Read several files, keeping their order.
pub fn read_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    if paths.is_empty() {
        return Err(Error::new(ErrorKind::NullArgument, "at least one file"));
    }
    paths.iter().map(read_file).collect()
}

/// Read and concatenate the documents held by `paths`.
pub fn parse_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<RawDocument> {
    let contents = read_files(paths)?;

    let mut document = RawDocument::new();
    for (path, content) in paths.iter().zip(&contents) {
        let path = path.as_ref();
        let parsed = jdl_core::parse_document(content).map_err(|e| {
            Error::new(
                ErrorKind::InvalidFile,
                format!("`{}` does not hold a structural tree: {e}", path.display()),
            )
        })?;
        let Some(parsed) = parsed else {
            return Err(Error::new(
                ErrorKind::InvalidFile,
                format!("`{}` holds an empty document", path.display()),
            ));
        };
        debug!(path = %path.display(), entities = parsed.entities.len(), "read document");
        document.merge(parsed);
    }
    Ok(document)
}
