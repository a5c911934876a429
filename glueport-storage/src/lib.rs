//! glueport-storage: the durable ID-mapping ledger.
//!
//! The ledger records, per entity kind, which source-system ids have
//! already been created in the target system and under which uuid. Saving
//! it after each batch and merging it back in on startup is what makes an
//! interrupted migration resumable without duplicating entities.

pub mod ledger;

pub use ledger::{IdLedger, LEDGER_VERSION};
