//! Parsed-export snapshot consumed by the warning detector.
//!
//! Pure containers; the export parser populates these before any detection
//! or import decision runs. Field names mirror the export's JSON keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::FieldDefinition;

/// One organization row from the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// One configuration (device/endpoint) row from the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub id: String,
    pub name: String,
}

/// One document row from the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
}

/// One location row from the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: String,
    pub name: String,
}

/// One password row from the export. `resource_type`/`resource_id` point at
/// the entity the credential is attached to, when any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordEntry {
    pub id: String,
    pub name: String,
    pub password: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
}

/// A custom-asset type: the field schema instances are validated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAssetType {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

/// A custom-asset instance. `values` maps field keys to raw values; BTreeMap
/// keeps reported field lists deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAsset {
    pub id: String,
    pub asset_type: String,
    pub name: String,
    pub values: BTreeMap<String, String>,
}

/// Aggregate snapshot of one export, grouping every entity collection the
/// detector consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedData {
    pub organizations: Vec<Organization>,
    pub configurations: Vec<Configuration>,
    pub documents: Vec<Document>,
    pub passwords: Vec<PasswordEntry>,
    pub locations: Vec<Location>,
    pub custom_asset_types: Vec<CustomAssetType>,
    pub custom_assets: Vec<CustomAsset>,
}
