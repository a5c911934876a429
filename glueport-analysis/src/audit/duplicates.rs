//! Duplicate-name detection.
//!
//! Only organizations are checked: custom-asset names are allowed to
//! repeat within an organization by product decision.

use std::collections::BTreeMap;

use glueport_core::types::{
    EntityType, Organization, ParsedData, Severity, Warning, WarningCategory,
};

/// One warning per case-insensitive name group with more than one member.
pub fn detect_duplicate_organizations(data: &ParsedData) -> Vec<Warning> {
    // BTreeMap keeps the report order stable across runs.
    let mut groups: BTreeMap<String, Vec<&Organization>> = BTreeMap::new();
    for org in &data.organizations {
        let name = org.name.trim();
        // Empty names are already error-severity empty-value findings.
        if name.is_empty() {
            continue;
        }
        groups.entry(name.to_lowercase()).or_default().push(org);
    }

    let mut warnings = Vec::new();
    for group in groups.values() {
        if group.len() < 2 {
            continue;
        }
        let first = group[0];
        let ids: Vec<&str> = group.iter().map(|org| org.id.as_str()).collect();
        warnings.push(
            Warning::new(
                WarningCategory::Duplicate,
                Severity::Warning,
                format!(
                    "Organization name '{}' is shared by {} organizations: {}",
                    first.name,
                    group.len(),
                    ids.join(", ")
                ),
            )
            .with_entity(EntityType::Organization, first.id.clone())
            .with_details(serde_json::json!({ "name": first.name, "ids": ids })),
        );
    }

    warnings
}
