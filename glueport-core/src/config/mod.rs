//! Configuration system for Glueport.
//! TOML-based, 3-layer resolution: env > project > user > defaults.

pub mod audit_config;
pub mod glueport_config;
pub mod inference_config;
pub mod ledger_config;

pub use audit_config::AuditConfig;
pub use glueport_config::GlueportConfig;
pub use inference_config::InferenceConfig;
pub use ledger_config::LedgerConfig;
