//! Aggregate report summary over detected warnings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use glueport_core::types::{Severity, Warning, WarningCategory};

/// Counts per severity tier. Every tier is always present, zero included,
/// so report consumers never probe for missing keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
}

/// The pre-flight report summary.
///
/// `has_blockers` is the canonical gate: when true, the orchestrator must
/// stop at the preview stage and surface the full warning list for review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub by_severity: SeverityCounts,
    /// Only categories actually seen appear here.
    pub by_category: BTreeMap<WarningCategory, usize>,
    pub errors: usize,
    pub has_blockers: bool,
}

/// Tally warnings into a summary.
pub fn summarize(warnings: &[Warning]) -> ReportSummary {
    let mut by_severity = SeverityCounts::default();
    let mut by_category: BTreeMap<WarningCategory, usize> = BTreeMap::new();

    for warning in warnings {
        match warning.severity {
            Severity::Info => by_severity.info += 1,
            Severity::Warning => by_severity.warning += 1,
            Severity::Error => by_severity.error += 1,
        }
        *by_category.entry(warning.category).or_insert(0) += 1;
    }

    let errors = by_severity.error;
    ReportSummary {
        total: warnings.len(),
        by_severity,
        by_category,
        errors,
        has_blockers: errors > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_blockers() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.by_severity, SeverityCounts::default());
        assert!(summary.by_category.is_empty());
        assert!(!summary.has_blockers);
    }

    #[test]
    fn test_severity_keys_always_serialized() {
        let summary = summarize(&[Warning::new(
            WarningCategory::EmptyValue,
            Severity::Info,
            "x",
        )]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["by_severity"]["info"], 1);
        assert_eq!(json["by_severity"]["warning"], 0);
        assert_eq!(json["by_severity"]["error"], 0);
        assert_eq!(json["by_category"]["empty_value"], 1);
        assert!(json["by_category"].get("duplicate").is_none());
    }
}
