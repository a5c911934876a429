//! Namespaced source-id → target-uuid ledger with JSON persistence.
//!
//! Every entity kind owns a bucket for the lifetime of the ledger, even
//! when empty. `load` merges the file into memory key-by-key instead of
//! replacing it; a second partial run must never erase the first run's
//! mappings for entities it did not touch.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use glueport_core::errors::LedgerError;
use glueport_core::types::EntityType;

/// Current on-disk format version.
pub const LEDGER_VERSION: i64 = 1;

/// In-memory ledger of already-migrated entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdLedger {
    mappings: BTreeMap<EntityType, BTreeMap<String, String>>,
}

impl Default for IdLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl IdLedger {
    /// Create an empty ledger with every entity bucket present.
    pub fn new() -> Self {
        let mut mappings = BTreeMap::new();
        for kind in EntityType::ALL {
            mappings.insert(kind, BTreeMap::new());
        }
        IdLedger { mappings }
    }

    /// Record that `source_id` was created in the target system as `uuid`.
    ///
    /// Overwrites silently on collision (last-write-wins; refreshing resume
    /// state is the intended use). Empty ids or uuids are usage errors.
    pub fn add(
        &mut self,
        entity_type: EntityType,
        source_id: &str,
        uuid: &str,
    ) -> Result<(), LedgerError> {
        if source_id.is_empty() {
            return Err(LedgerError::EmptySourceId);
        }
        if uuid.is_empty() {
            return Err(LedgerError::EmptyUuid);
        }
        self.bucket_mut(entity_type)
            .insert(source_id.to_string(), uuid.to_string());
        Ok(())
    }

    /// Look up the target uuid for a source id. Unknown ids are `None`,
    /// never an error.
    pub fn get(&self, entity_type: EntityType, source_id: &str) -> Option<&str> {
        self.bucket(entity_type).get(source_id).map(String::as_str)
    }

    /// Whether a source id has already been migrated.
    pub fn contains(&self, entity_type: EntityType, source_id: &str) -> bool {
        self.bucket(entity_type).contains_key(source_id)
    }

    /// All mappings for one entity kind, as a defensive copy.
    pub fn all_for(&self, entity_type: EntityType) -> BTreeMap<String, String> {
        self.bucket(entity_type).clone()
    }

    /// Empty every bucket, keeping the buckets themselves.
    pub fn clear(&mut self) {
        for bucket in self.mappings.values_mut() {
            bucket.clear();
        }
    }

    /// Per-kind entry counts.
    pub fn stats(&self) -> BTreeMap<EntityType, usize> {
        self.mappings
            .iter()
            .map(|(kind, bucket)| (*kind, bucket.len()))
            .collect()
    }

    /// Total entries across all kinds.
    pub fn total_count(&self) -> usize {
        self.mappings.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Persist the ledger as indented, key-sorted JSON, creating parent
    /// directories as needed.
    ///
    /// Not transactional: a crash mid-write can corrupt the file. The
    /// usage model is one migration process at a time, saving between
    /// batches.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| LedgerError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        // Outer keys sorted by entity key name; inner maps are BTreeMaps
        // and therefore sorted already.
        let sorted: BTreeMap<&'static str, &BTreeMap<String, String>> = self
            .mappings
            .iter()
            .map(|(kind, bucket)| (kind.key(), bucket))
            .collect();
        let document = serde_json::json!({
            "version": LEDGER_VERSION,
            "mappings": sorted,
        });
        let text = serde_json::to_string_pretty(&document).map_err(|e| LedgerError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        std::fs::write(path, text).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), entries = self.total_count(), "ledger saved");
        Ok(())
    }

    /// Merge a previously saved ledger into this one.
    ///
    /// Loaded entries win on key conflict; entries absent from the file are
    /// left untouched. Unknown entity-type keys in the file are skipped for
    /// forward compatibility. The file must be a version-1 ledger document.
    pub fn load(&mut self, path: &Path) -> Result<(), LedgerError> {
        if !path.exists() {
            return Err(LedgerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| LedgerError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let root = value.as_object().ok_or_else(|| LedgerError::Malformed {
            path: path.to_path_buf(),
            message: "root is not an object".to_string(),
        })?;

        match root.get("version").and_then(serde_json::Value::as_i64) {
            Some(LEDGER_VERSION) => {}
            Some(found) => {
                return Err(LedgerError::UnsupportedVersion {
                    path: path.to_path_buf(),
                    found,
                })
            }
            None => {
                return Err(LedgerError::Malformed {
                    path: path.to_path_buf(),
                    message: "missing or non-integer version".to_string(),
                })
            }
        }

        let mappings = root
            .get("mappings")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| LedgerError::Malformed {
                path: path.to_path_buf(),
                message: "mappings is missing or not an object".to_string(),
            })?;

        let mut merged = 0usize;
        for (key, bucket_value) in mappings {
            let Some(kind) = EntityType::from_key(key) else {
                debug!(key, "skipping unknown entity type in ledger file");
                continue;
            };
            let bucket =
                bucket_value
                    .as_object()
                    .ok_or_else(|| LedgerError::Malformed {
                        path: path.to_path_buf(),
                        message: format!("bucket for '{key}' is not an object"),
                    })?;
            for (source_id, uuid_value) in bucket {
                let uuid = uuid_value.as_str().ok_or_else(|| LedgerError::Malformed {
                    path: path.to_path_buf(),
                    message: format!("non-string uuid for '{key}' entry '{source_id}'"),
                })?;
                self.bucket_mut(kind)
                    .insert(source_id.clone(), uuid.to_string());
                merged += 1;
            }
        }
        debug!(path = %path.display(), merged, "ledger loaded");
        Ok(())
    }

    fn bucket(&self, entity_type: EntityType) -> &BTreeMap<String, String> {
        self.mappings
            .get(&entity_type)
            .expect("every entity bucket exists for the lifetime of the ledger")
    }

    fn bucket_mut(&mut self, entity_type: EntityType) -> &mut BTreeMap<String, String> {
        self.mappings
            .get_mut(&entity_type)
            .expect("every entity bucket exists for the lifetime of the ledger")
    }
}
