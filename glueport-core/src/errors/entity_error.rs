//! Entity-kind parse errors.

/// A string named an entity kind outside the closed set.
///
/// Typed call sites cannot construct an invalid kind; this error only
/// surfaces where strings enter the system (`EntityType::from_str`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity type: {name}")]
pub struct UnknownEntityType {
    pub name: String,
}
