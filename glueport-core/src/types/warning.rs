//! Pre-flight warning model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::EntityType;

/// Category of a detected issue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    MissingReference,
    Duplicate,
    UnknownType,
    EmptyValue,
    DataQuality,
}

impl WarningCategory {
    pub fn name(&self) -> &'static str {
        match self {
            WarningCategory::MissingReference => "missing_reference",
            WarningCategory::Duplicate => "duplicate",
            WarningCategory::UnknownType => "unknown_type",
            WarningCategory::EmptyValue => "empty_value",
            WarningCategory::DataQuality => "data_quality",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Severity tier. `Error` findings block the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One detected migration issue. Immutable once built; serialization omits
/// unset optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub category: WarningCategory,
    pub severity: Severity,
    /// Human-readable message, already formatted with the relevant ids.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Category-specific structured payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Warning {
    pub fn new(category: WarningCategory, severity: Severity, message: impl Into<String>) -> Self {
        Warning {
            category,
            severity,
            message: message.into(),
            entity_type: None,
            entity_id: None,
            details: None,
        }
    }

    pub fn with_entity(mut self, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type);
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let warning = Warning::new(
            WarningCategory::EmptyValue,
            Severity::Info,
            "Password 'p1' has no password value",
        );
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["category"], "empty_value");
        assert_eq!(json["severity"], "info");
        assert!(json.get("entity_type").is_none());
        assert!(json.get("entity_id").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_provenance_and_details_serialized() {
        let warning = Warning::new(
            WarningCategory::MissingReference,
            Severity::Warning,
            "Password 'p1' references missing Configuration 'c9'",
        )
        .with_entity(EntityType::Password, "p1")
        .with_details(serde_json::json!({"resource_id": "c9"}));

        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["entity_type"], "password");
        assert_eq!(json["entity_id"], "p1");
        assert_eq!(json["details"]["resource_id"], "c9");
    }
}
