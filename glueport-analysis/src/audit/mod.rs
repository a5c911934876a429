//! Pre-flight integrity checks over a parsed export.
//!
//! One file per check pass; `WarningDetector::detect_all` concatenates the
//! passes' findings without cross-pass deduplication. Severity `error`
//! findings are migration blockers: callers must consult
//! [`ReportSummary::has_blockers`] before any destructive write.

pub mod duplicates;
pub mod empty_values;
pub mod index;
pub mod quality;
pub mod references;
pub mod summary;

pub use summary::{summarize, ReportSummary, SeverityCounts};

use glueport_core::config::AuditConfig;
use glueport_core::types::{ParsedData, Warning};

use index::ReferenceIndex;

/// Runs every check pass over a parsed export.
pub struct WarningDetector {
    config: AuditConfig,
}

impl WarningDetector {
    pub fn new(config: AuditConfig) -> Self {
        WarningDetector { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(AuditConfig::default())
    }

    /// Run all passes. The passes are independent and order-insensitive;
    /// results are concatenated in a fixed order for stable reports.
    pub fn detect_all(&self, data: &ParsedData) -> Vec<Warning> {
        let index = ReferenceIndex::build(data);

        let mut warnings = Vec::new();
        warnings.extend(references::detect_missing_references(data, &index));
        warnings.extend(references::detect_unknown_types(data, &index));
        warnings.extend(duplicates::detect_duplicate_organizations(data));
        warnings.extend(empty_values::detect_empty_values(data));
        warnings.extend(quality::detect_quality_issues(data, &self.config));
        warnings
    }
}
