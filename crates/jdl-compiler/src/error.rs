use std::fmt;

/// Error kinds, one per class of rejected input.
///
/// Callers branch on the kind; the message is for humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input (document, storage technology, path) is absent.
    NullArgument,
    /// A well-formed but unrecognized value (unknown technology, option,
    /// cardinality) or an inconsistent declaration.
    InvalidArgument,
    /// A path that does not exist, names a directory, or does not hold a
    /// document.
    InvalidFile,
    /// A field type that is neither builtin for the technology nor a
    /// declared enumeration.
    WrongType,
    /// A validation the field's type does not support, or a malformed
    /// validation value.
    WrongValidation,
    /// A relationship or option naming an entity that is never declared.
    UndeclaredEntity,
}

impl ErrorKind {
    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::NullArgument => "required argument is missing",
            Self::InvalidArgument => "value is not accepted",
            Self::InvalidFile => "file does not hold a document",
            Self::WrongType => "unknown field type",
            Self::WrongValidation => "unsupported validation",
            Self::UndeclaredEntity => "undeclared entity",
        }
    }

    /// Template for detailed messages. Contains a `{}` placeholder for the
    /// caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::NullArgument => "{} must be provided".to_string(),
            Self::InvalidArgument | Self::InvalidFile => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NullArgument => "null argument",
            Self::InvalidArgument => "invalid argument",
            Self::InvalidFile => "invalid file",
            Self::WrongType => "wrong type",
            Self::WrongValidation => "wrong validation",
            Self::UndeclaredEntity => "undeclared entity",
        };
        f.write_str(name)
    }
}

/// A fatal build error. The first one raised aborts the whole build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Create an error whose message is the kind's template filled with
    /// `detail`.
    pub fn new(kind: ErrorKind, detail: impl AsRef<str>) -> Self {
        Self {
            kind,
            message: kind.message(Some(detail.as_ref())),
        }
    }

    /// Create an error carrying only the kind's fallback message.
    pub fn bare(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.message(None),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
