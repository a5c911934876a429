//! Entity kinds tracked by the migration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownEntityType;

/// The closed set of IT Glue entity kinds the toolkit migrates.
///
/// The ledger keeps one bucket per kind; adding a kind here is a
/// compile-time-checked change for every exhaustive match in the workspace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Organization,
    Configuration,
    Document,
    Password,
    Location,
    CustomAsset,
    CustomAssetType,
    ConfigurationType,
}

impl EntityType {
    /// All entity kinds, in declaration order.
    pub const ALL: [EntityType; 8] = [
        EntityType::Organization,
        EntityType::Configuration,
        EntityType::Document,
        EntityType::Password,
        EntityType::Location,
        EntityType::CustomAsset,
        EntityType::CustomAssetType,
        EntityType::ConfigurationType,
    ];

    /// Stable snake_case key used in the ledger file and in reports.
    pub fn key(&self) -> &'static str {
        match self {
            EntityType::Organization => "organization",
            EntityType::Configuration => "configuration",
            EntityType::Document => "document",
            EntityType::Password => "password",
            EntityType::Location => "location",
            EntityType::CustomAsset => "custom_asset",
            EntityType::CustomAssetType => "custom_asset_type",
            EntityType::ConfigurationType => "configuration_type",
        }
    }

    /// Parse a snake_case key. Returns `None` for kinds outside the closed
    /// set; ledger loading uses this to skip unknown buckets.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "organization" => Some(EntityType::Organization),
            "configuration" => Some(EntityType::Configuration),
            "document" => Some(EntityType::Document),
            "password" => Some(EntityType::Password),
            "location" => Some(EntityType::Location),
            "custom_asset" => Some(EntityType::CustomAsset),
            "custom_asset_type" => Some(EntityType::CustomAssetType),
            "configuration_type" => Some(EntityType::ConfigurationType),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownEntityType {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for kind in EntityType::ALL {
            assert_eq!(EntityType::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(EntityType::from_key("flexible_asset"), None);
        let err = "flexible_asset".parse::<EntityType>().unwrap_err();
        assert_eq!(err.name, "flexible_asset");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&EntityType::CustomAssetType).unwrap();
        assert_eq!(json, "\"custom_asset_type\"");
    }
}
