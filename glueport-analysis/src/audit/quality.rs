//! Content-quality checks: oversized documents and hollow custom assets.

use glueport_core::config::AuditConfig;
use glueport_core::types::collections::FxHashMap;
use glueport_core::types::{
    CustomAssetType, EntityType, ParsedData, Severity, Warning, WarningCategory,
};

pub fn detect_quality_issues(data: &ParsedData, config: &AuditConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    warnings.extend(detect_oversized_documents(data, config));
    warnings.extend(detect_hollow_assets(data, config));
    warnings
}

/// Documents whose content exceeds the import size cap.
fn detect_oversized_documents(data: &ParsedData, config: &AuditConfig) -> Vec<Warning> {
    let max_bytes = config.effective_max_document_bytes();
    let mut warnings = Vec::new();

    for document in &data.documents {
        let size = document.content.len() as u64;
        if size <= max_bytes {
            continue;
        }
        warnings.push(
            Warning::new(
                WarningCategory::DataQuality,
                Severity::Warning,
                format!(
                    "Document '{}' content is {:.2} MB, exceeding the {:.2} MB import limit",
                    document.id,
                    megabytes(size),
                    megabytes(max_bytes)
                ),
            )
            .with_entity(EntityType::Document, document.id.clone())
            .with_details(serde_json::json!({ "bytes": size })),
        );
    }

    warnings
}

/// Custom assets where most declared required fields are empty.
///
/// An asset is flagged when its empty required fields outnumber half the
/// required set and exceed the configured threshold, so a single missing
/// value never triggers a report.
fn detect_hollow_assets(data: &ParsedData, config: &AuditConfig) -> Vec<Warning> {
    let threshold = config.effective_required_empty_threshold();
    let mut warnings = Vec::new();

    let types_by_name: FxHashMap<&str, &CustomAssetType> = data
        .custom_asset_types
        .iter()
        .map(|asset_type| (asset_type.name.as_str(), asset_type))
        .collect();

    for asset in &data.custom_assets {
        let Some(asset_type) = types_by_name.get(asset.asset_type.as_str()) else {
            continue;
        };
        let required_keys: Vec<&str> = asset_type
            .fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.key.as_str())
            .collect();
        if required_keys.is_empty() {
            continue;
        }

        let empty_keys: Vec<&str> = required_keys
            .iter()
            .copied()
            .filter(|key| {
                asset
                    .values
                    .get(*key)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .collect();

        if empty_keys.len() * 2 > required_keys.len() && empty_keys.len() > threshold {
            warnings.push(
                Warning::new(
                    WarningCategory::DataQuality,
                    Severity::Info,
                    format!(
                        "Custom asset '{}' ({}) has {} of {} required fields empty: {}",
                        asset.id,
                        asset.asset_type,
                        empty_keys.len(),
                        required_keys.len(),
                        empty_keys.join(", ")
                    ),
                )
                .with_entity(EntityType::CustomAsset, asset.id.clone())
                .with_details(serde_json::json!({
                    "asset_type": asset.asset_type,
                    "empty_fields": empty_keys,
                })),
            );
        }
    }

    warnings
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
