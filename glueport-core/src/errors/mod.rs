//! Error handling for Glueport.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod entity_error;
pub mod ledger_error;

pub use config_error::ConfigError;
pub use entity_error::UnknownEntityType;
pub use ledger_error::LedgerError;
