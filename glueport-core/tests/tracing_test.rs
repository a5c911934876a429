//! Tests for tracing initialization.

use glueport_core::tracing::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    // Repeated initialization must not panic or re-register.
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialized for tests");
}
