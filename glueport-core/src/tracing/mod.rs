//! Tracing/logging for Glueport.

pub mod setup;

pub use setup::init_tracing;
