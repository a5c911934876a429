//! Priority-ordered source/target organization matching.

use serde::Serialize;
use tracing::warn;

use glueport_core::types::collections::{FxHashMap, SmallVec2};
use glueport_core::types::{MatchResult, MatchType};

use super::types::{SourceOrganization, TargetOrganization};

/// Per-rule tallies for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    pub matched_by_itglue_id: usize,
    pub matched_by_name: usize,
    pub needs_creation: usize,
}

/// Reconciles source organizations against the organizations that already
/// exist in the target system.
///
/// Indexed once at construction; `match_org` is then called once per
/// source organization, in any order. An IT Glue id carried in target-side
/// metadata always outranks a name match.
pub struct OrgMatcher {
    itglue_index: FxHashMap<String, String>,
    name_index: FxHashMap<String, SmallVec2<String>>,
    matched: FxHashMap<String, MatchResult>,
    stats: MatchStats,
}

impl OrgMatcher {
    /// Build the match indices from the target system's organization list.
    ///
    /// Entries without an id are skipped with a warning; partial target
    /// data must not abort the whole matcher.
    pub fn new(existing: &[TargetOrganization]) -> Self {
        let mut itglue_index: FxHashMap<String, String> = FxHashMap::default();
        let mut name_index: FxHashMap<String, SmallVec2<String>> = FxHashMap::default();

        for org in existing {
            let Some(uuid) = org.id.as_deref().filter(|id| !id.is_empty()) else {
                warn!(
                    name = org.name.as_deref().unwrap_or(""),
                    "skipping target organization without an id"
                );
                continue;
            };

            if let Some(itglue_id) = org
                .metadata
                .as_ref()
                .and_then(|m| m.itglue_id.as_deref())
                .filter(|id| !id.is_empty())
            {
                if let Some(previous) =
                    itglue_index.insert(itglue_id.to_string(), uuid.to_string())
                {
                    warn!(
                        itglue_id,
                        previous = %previous,
                        kept = %uuid,
                        "duplicate itglue_id across target organizations; keeping the last"
                    );
                }
            }

            if let Some(name) = org.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                name_index
                    .entry(name.to_lowercase())
                    .or_default()
                    .push(uuid.to_string());
            }
        }

        OrgMatcher {
            itglue_index,
            name_index,
            matched: FxHashMap::default(),
            stats: MatchStats::default(),
        }
    }

    /// Match one source organization, recording the outcome.
    pub fn match_org(&mut self, source: &SourceOrganization) -> MatchResult {
        let result = self.resolve(source);

        match result.match_type() {
            Some(MatchType::ItglueId) => self.stats.matched_by_itglue_id += 1,
            Some(MatchType::Name) => self.stats.matched_by_name += 1,
            None => self.stats.needs_creation += 1,
        }

        // Log under the source name; fall back to the source id. Two
        // unnamed orgs sharing a fallback key collide last-write-wins;
        // downstream report rendering depends on that behavior.
        let key = source
            .attributes
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| source.id.clone().filter(|id| !id.is_empty()))
            .unwrap_or_default();
        self.matched.insert(key, result.clone());

        result
    }

    fn resolve(&self, source: &SourceOrganization) -> MatchResult {
        // Rule 1: IT Glue id recorded in target metadata.
        if let Some(itglue_id) = source.id.as_deref().filter(|id| !id.is_empty()) {
            if let Some(uuid) = self.itglue_index.get(itglue_id) {
                return MatchResult::matched(uuid.clone(), MatchType::ItglueId);
            }
        }

        // Rule 2: case-insensitive name.
        let name = source
            .attributes
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        match name {
            Some(name) => {
                if let Some(uuids) = self.name_index.get(&name.to_lowercase()) {
                    if uuids.len() > 1 {
                        warn!(
                            name,
                            candidates = uuids.len(),
                            "ambiguous name match; using the first indexed organization"
                        );
                    }
                    return MatchResult::matched(uuids[0].clone(), MatchType::Name);
                }
            }
            None => {
                warn!(
                    source_id = source.id.as_deref().unwrap_or(""),
                    "source organization has no usable name; it will be created with an empty name"
                );
            }
        }

        MatchResult::Create
    }

    /// Copy of every match outcome seen so far, keyed by source name (or
    /// the source id when no name was present).
    pub fn mapping(&self) -> FxHashMap<String, MatchResult> {
        self.matched.clone()
    }

    /// Per-rule tallies.
    pub fn stats(&self) -> MatchStats {
        self.stats
    }
}
