//! ID-ledger configuration.

use serde::{Deserialize, Serialize};

/// Where the resume ledger lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LedgerConfig {
    /// Ledger file path. Default: `glueport-idmap.json` in the working dir.
    pub path: Option<String>,
}

impl LedgerConfig {
    /// Returns the effective ledger path.
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or("glueport-idmap.json")
    }
}
