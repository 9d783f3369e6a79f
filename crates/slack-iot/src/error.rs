use std::path::PathBuf;

use thiserror::Error;

use crate::credential::CREDENTIAL_LENGTH;

/// Reasons a credential string is rejected.
///
/// Checks run in declaration order and the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("credentials have incorrect length (expected {}, got {len})", CREDENTIAL_LENGTH)]
    BadLength { len: usize },

    #[error("credentials not properly formed: first / missing or in wrong place")]
    FirstSeparator,

    #[error("credentials not properly formed: second / missing or in wrong place")]
    SecondSeparator,
}

/// Errors raised while building a [`Notifier`](crate::Notifier).
///
/// Delivery failures never show up here; they are folded into the
/// notifier's status code instead.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The credential file does not exist.
    #[error("credentials file missing: {}", .path.display())]
    MissingCredentials { path: PathBuf },

    /// The credential file was read but its first line is malformed.
    #[error("invalid credentials in {}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// The credential file exists but could not be read.
    #[error("error reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file could not be read or parsed.
    #[error("invalid settings file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The HTTP client could not be initialised.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl NotifierError {
    /// The underlying format problem, if this is a format error.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            NotifierError::Format { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn is_format(&self) -> bool {
        self.format_error().is_some()
    }
}
