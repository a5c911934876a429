//! Dangling-reference and unknown-resource-type checks over passwords.

use glueport_core::types::{EntityType, ParsedData, Severity, Warning, WarningCategory};

use super::index::{slugify, ReferenceIndex};

const STRUCTURED_DATA_PREFIX: &str = "StructuredData::";

/// Resource types with a directly resolvable id set.
const DIRECT_RESOURCE_TYPES: [&str; 4] =
    ["Configuration", "Location", "Organization", "Document"];

/// Flag passwords whose `resource_id` resolves in none of the applicable
/// id sets.
pub fn detect_missing_references(
    data: &ParsedData,
    index: &ReferenceIndex<'_>,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for password in &data.passwords {
        let Some(resource_id) = password.resource_id.as_deref().filter(|id| !id.is_empty())
        else {
            continue;
        };

        // An empty resource type is treated the same as an absent one.
        let resource_type = password.resource_type.as_deref().filter(|t| !t.is_empty());
        let resolved = match resource_type {
            Some("Configuration") => index.configuration_ids.contains(resource_id),
            Some("Location") => index.location_ids.contains(resource_id),
            Some("Organization") => index.organization_ids.contains(resource_id),
            Some("Document") => index.document_ids.contains(resource_id),
            // Cell/row addresses point inside flexible-asset tables and
            // cannot be resolved from a flat export.
            Some("StructuredData::Cell") | Some("StructuredData::Row") => continue,
            Some(resource_type) if resource_type.starts_with(STRUCTURED_DATA_PREFIX) => {
                let slug = slugify(&resource_type[STRUCTURED_DATA_PREFIX.len()..]);
                index.resolves_asset(&slug, resource_id)
            }
            // Unrecognized plain types have no applicable id set; the
            // unknown-type pass reports them instead.
            Some(_) => continue,
            None => index.resolves_anywhere(resource_id),
        };

        if !resolved {
            let described_type = resource_type.unwrap_or("any entity");
            warnings.push(
                Warning::new(
                    WarningCategory::MissingReference,
                    Severity::Warning,
                    format!(
                        "Password '{}' references {} '{}' which does not exist in the export",
                        password.id, described_type, resource_id
                    ),
                )
                .with_entity(EntityType::Password, password.id.clone())
                .with_details(serde_json::json!({
                    "resource_type": password.resource_type,
                    "resource_id": resource_id,
                })),
            );
        }
    }

    warnings
}

/// Flag passwords carrying a resource type outside the known set.
pub fn detect_unknown_types(data: &ParsedData, index: &ReferenceIndex<'_>) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for password in &data.passwords {
        let Some(resource_type) = password.resource_type.as_deref().filter(|t| !t.is_empty())
        else {
            continue;
        };

        if DIRECT_RESOURCE_TYPES.contains(&resource_type) {
            continue;
        }
        if resource_type == "StructuredData::Cell" || resource_type == "StructuredData::Row" {
            continue;
        }
        if let Some(type_name) = resource_type.strip_prefix(STRUCTURED_DATA_PREFIX) {
            if index.knows_type_slug(&slugify(type_name)) {
                continue;
            }
        }

        warnings.push(
            Warning::new(
                WarningCategory::UnknownType,
                Severity::Info,
                format!(
                    "Password '{}' has unrecognized resource type '{}'",
                    password.id, resource_type
                ),
            )
            .with_entity(EntityType::Password, password.id.clone())
            .with_details(serde_json::json!({ "resource_type": resource_type })),
        );
    }

    warnings
}
