//! ID-ledger errors.

use std::path::PathBuf;

/// Errors that can occur while mutating or persisting the ID ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Source id must not be empty")]
    EmptySourceId,

    #[error("Target uuid must not be empty")]
    EmptyUuid,

    #[error("Ledger file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Malformed ledger file {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Unsupported ledger version {found} in {path} (expected 1)")]
    UnsupportedVersion { path: PathBuf, found: i64 },

    #[error("I/O error on ledger file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
