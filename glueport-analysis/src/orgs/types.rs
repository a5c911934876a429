//! Organization record shapes, mirroring the two APIs involved.

use serde::{Deserialize, Serialize};

/// An organization already present in the target system, as returned by
/// its organization list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOrganization {
    pub id: Option<String>,
    pub name: Option<String>,
    pub metadata: Option<OrgMetadata>,
}

/// Target-side metadata; carries the IT Glue id when the organization was
/// itself created by an earlier migration run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgMetadata {
    pub itglue_id: Option<String>,
}

/// A source organization from the IT Glue export (JSON:API resource shape;
/// numeric ids are coerced to strings by the export parser).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOrganization {
    pub id: Option<String>,
    pub attributes: OrgAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgAttributes {
    pub name: Option<String>,
}
