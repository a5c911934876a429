//! Warning-detector configuration.

use serde::{Deserialize, Serialize};

/// Thresholds for the pre-flight data-quality checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Document content size that triggers an oversized warning, in bytes.
    /// Default: 1 MiB.
    pub max_document_bytes: Option<u64>,
    /// Empty required fields must exceed this count before an asset is
    /// flagged. Default: 1.
    pub required_empty_threshold: Option<usize>,
}

impl AuditConfig {
    /// Returns the effective document size cap, defaulting to 1 MiB.
    pub fn effective_max_document_bytes(&self) -> u64 {
        self.max_document_bytes.unwrap_or(1_048_576)
    }

    /// Returns the effective empty-field threshold, defaulting to 1.
    pub fn effective_required_empty_threshold(&self) -> usize {
        self.required_empty_threshold.unwrap_or(1)
    }
}
