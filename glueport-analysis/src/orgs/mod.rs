//! Organization reconciliation against the target system.

pub mod matcher;
pub mod types;

pub use matcher::{MatchStats, OrgMatcher};
pub use types::{OrgAttributes, OrgMetadata, SourceOrganization, TargetOrganization};
