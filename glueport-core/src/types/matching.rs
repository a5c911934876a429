//! Organization match outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a source organization resolved to an existing target org.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Matched,
    Create,
}

impl MatchStatus {
    pub fn name(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "matched",
            MatchStatus::Create => "create",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rule that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    ItglueId,
    Name,
}

impl MatchType {
    pub fn name(&self) -> &'static str {
        match self {
            MatchType::ItglueId => "itglue_id",
            MatchType::Name => "name",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of reconciling one source organization against the target system.
///
/// A matched outcome always carries the target uuid and the rule that
/// produced it; a create outcome carries neither. The shape makes the
/// inconsistent combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    Matched {
        uuid: String,
        #[serde(rename = "match_type")]
        via: MatchType,
    },
    Create,
}

impl MatchResult {
    pub fn matched(uuid: impl Into<String>, via: MatchType) -> Self {
        MatchResult::Matched {
            uuid: uuid.into(),
            via,
        }
    }

    pub fn status(&self) -> MatchStatus {
        match self {
            MatchResult::Matched { .. } => MatchStatus::Matched,
            MatchResult::Create => MatchStatus::Create,
        }
    }

    pub fn uuid(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { uuid, .. } => Some(uuid),
            MatchResult::Create => None,
        }
    }

    pub fn match_type(&self) -> Option<MatchType> {
        match self {
            MatchResult::Matched { via, .. } => Some(*via),
            MatchResult::Create => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }
}
