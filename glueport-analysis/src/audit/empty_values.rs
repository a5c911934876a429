//! Empty-value checks.
//!
//! The asymmetry is intentional: organizations and configurations without
//! names block the migration; a password without a password value is
//! merely notable.

use glueport_core::types::{EntityType, ParsedData, Severity, Warning, WarningCategory};

pub fn detect_empty_values(data: &ParsedData) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for password in &data.passwords {
        if password.password.is_empty() {
            warnings.push(
                Warning::new(
                    WarningCategory::EmptyValue,
                    Severity::Info,
                    format!("Password '{}' has no password value", password.id),
                )
                .with_entity(EntityType::Password, password.id.clone()),
            );
        }
    }

    for org in &data.organizations {
        if org.name.is_empty() {
            warnings.push(
                Warning::new(
                    WarningCategory::EmptyValue,
                    Severity::Error,
                    format!("Organization '{}' has an empty name", org.id),
                )
                .with_entity(EntityType::Organization, org.id.clone()),
            );
        }
    }

    for configuration in &data.configurations {
        if configuration.name.is_empty() {
            warnings.push(
                Warning::new(
                    WarningCategory::EmptyValue,
                    Severity::Error,
                    format!("Configuration '{}' has an empty name", configuration.id),
                )
                .with_entity(EntityType::Configuration, configuration.id.clone()),
            );
        }
    }

    warnings
}
