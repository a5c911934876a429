//! glueport-core: shared foundation for the Glueport migration toolkit.
//!
//! Glueport migrates an IT Glue documentation export into a target
//! documentation system's custom-asset model. This crate provides the
//! pieces every other crate depends on:
//! - Types: entity kinds, field schemas, warnings, match outcomes, and the
//!   parsed-export aggregate
//! - Errors: one error enum per subsystem, `thiserror` only
//! - Config: layered TOML configuration (`glueport.toml`, `GLUEPORT_*` env)
//! - Tracing: logging initialization

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::GlueportConfig;
pub use errors::{ConfigError, LedgerError, UnknownEntityType};
pub use types::{
    EntityType, FieldDefinition, FieldType, MatchResult, MatchStatus, MatchType, ParsedData,
    Severity, Warning, WarningCategory,
};
