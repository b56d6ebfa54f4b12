//! Error types for wordhunt-core.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A precondition of an analysis call was violated.
///
/// These are detected before any file is opened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The file path was empty.
    #[error("path must not be empty")]
    EmptyPath,

    /// The search word was empty or whitespace only.
    #[error("word must not be empty")]
    EmptyWord,

    /// The file path does not exist.
    #[error("no such file: {path}")]
    MissingFile {
        /// The path that was requested.
        path: Utf8PathBuf,
    },
}

/// Category of an I/O failure while reading or writing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFailureKind {
    /// The file vanished between validation and reading.
    NotFound,
    /// The process lacks permission to open the file.
    AccessDenied,
    /// Any other read failure (directories, bad encoding, device errors).
    ReadError,
}

impl IoFailureKind {
    /// Returns a short human-readable description.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::AccessDenied => "access denied",
            Self::ReadError => "read failure",
        }
    }
}

impl std::fmt::Display for IoFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<io::ErrorKind> for IoFailureKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::AccessDenied,
            _ => Self::ReadError,
        }
    }
}

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A precondition was violated before any I/O took place.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Reading the input (or writing the log) failed.
    #[error("{kind}: {path}")]
    Io {
        /// Category of the failure.
        kind: IoFailureKind,
        /// The file involved.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The input exceeds the configured size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// The file involved.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// A report could not be constructed from the given parts.
    #[error("invalid report: {0}")]
    InvalidReport(String),
}

impl AnalysisError {
    /// Wrap an [`io::Error`] for `path`, classifying it by kind.
    pub fn io(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Io {
            kind: source.kind().into(),
            path: path.into(),
            source,
        }
    }

    /// The I/O failure category, if this is an I/O error.
    pub const fn io_kind(&self) -> Option<IoFailureKind> {
        match self {
            Self::Io { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
