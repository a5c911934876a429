//! Tests for organization matching and the match log.

use glueport_analysis::orgs::{OrgAttributes, OrgMetadata, SourceOrganization, TargetOrganization};
use glueport_analysis::OrgMatcher;
use glueport_core::types::{MatchResult, MatchStatus, MatchType};

fn target(id: &str, name: &str, itglue_id: Option<&str>) -> TargetOrganization {
    TargetOrganization {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        metadata: itglue_id.map(|ig| OrgMetadata {
            itglue_id: Some(ig.to_string()),
        }),
    }
}

fn source(id: Option<&str>, name: Option<&str>) -> SourceOrganization {
    SourceOrganization {
        id: id.map(str::to_string),
        attributes: OrgAttributes {
            name: name.map(str::to_string),
        },
    }
}

#[test]
fn test_itglue_id_takes_priority_over_simultaneous_name_match() {
    let mut matcher = OrgMatcher::new(&[
        target("uuid-1", "Old", Some("5")),
        target("uuid-2", "New", None),
    ]);

    // The source org carries itglue id 5 AND the name of the second org.
    let result = matcher.match_org(&source(Some("5"), Some("New")));
    assert_eq!(result, MatchResult::matched("uuid-1", MatchType::ItglueId));
}

#[test]
fn test_name_fallback_when_itglue_id_unknown() {
    let mut matcher = OrgMatcher::new(&[target("uuid-2", "New", None)]);
    let result = matcher.match_org(&source(Some("404"), Some("new")));
    assert_eq!(result, MatchResult::matched("uuid-2", MatchType::Name));
}

#[test]
fn test_ambiguous_name_uses_first_indexed() {
    let mut matcher = OrgMatcher::new(&[
        target("uuid-1", "Acme", None),
        target("uuid-2", "ACME", None),
    ]);
    let result = matcher.match_org(&source(None, Some("acme")));
    // Ambiguity is logged, not raised; the first indexed org wins.
    assert_eq!(result, MatchResult::matched("uuid-1", MatchType::Name));
}

#[test]
fn test_duplicate_itglue_id_keeps_last() {
    let mut matcher = OrgMatcher::new(&[
        target("uuid-1", "First", Some("9")),
        target("uuid-2", "Second", Some("9")),
    ]);
    let result = matcher.match_org(&source(Some("9"), None));
    assert_eq!(result, MatchResult::matched("uuid-2", MatchType::ItglueId));
}

#[test]
fn test_unmatched_source_needs_creation() {
    let mut matcher = OrgMatcher::new(&[target("uuid-1", "Acme", None)]);
    let result = matcher.match_org(&source(Some("1"), Some("Globex")));
    assert_eq!(result, MatchResult::Create);
}

#[test]
fn test_source_without_name_or_match_needs_creation() {
    let mut matcher = OrgMatcher::new(&[target("uuid-1", "Acme", None)]);
    let result = matcher.match_org(&source(Some("12"), None));
    assert_eq!(result.status(), MatchStatus::Create);
}

#[test]
fn test_mapping_is_keyed_by_name_with_id_fallback() {
    let mut matcher = OrgMatcher::new(&[target("uuid-1", "Acme", None)]);
    matcher.match_org(&source(Some("1"), Some("Acme")));
    matcher.match_org(&source(Some("2"), None));

    let mapping = matcher.mapping();
    assert_eq!(
        mapping.get("Acme"),
        Some(&MatchResult::matched("uuid-1", MatchType::Name))
    );
    assert_eq!(mapping.get("2"), Some(&MatchResult::Create));
}

#[test]
fn test_mapping_returns_a_copy() {
    let mut matcher = OrgMatcher::new(&[]);
    matcher.match_org(&source(Some("1"), Some("Acme")));

    let mut mapping = matcher.mapping();
    mapping.clear();
    assert_eq!(matcher.mapping().len(), 1);
}

#[test]
fn test_fallback_key_collision_is_last_write_wins() {
    // Two unnamed sources sharing an id collide on the fallback key; the
    // second overwrites the first. Downstream rendering relies on this.
    let mut matcher = OrgMatcher::new(&[target("uuid-1", "Acme", Some("7"))]);
    matcher.match_org(&source(Some("7"), None));
    matcher.match_org(&source(Some("7"), None));

    let mapping = matcher.mapping();
    assert_eq!(mapping.len(), 1);
    assert_eq!(
        mapping.get("7"),
        Some(&MatchResult::matched("uuid-1", MatchType::ItglueId))
    );
}

#[test]
fn test_stats_tally_every_outcome() {
    let mut matcher = OrgMatcher::new(&[
        target("uuid-1", "Old", Some("5")),
        target("uuid-2", "New", None),
    ]);
    matcher.match_org(&source(Some("5"), None));
    matcher.match_org(&source(None, Some("new")));
    matcher.match_org(&source(None, Some("Globex")));
    matcher.match_org(&source(None, None));

    let stats = matcher.stats();
    assert_eq!(stats.matched_by_itglue_id, 1);
    assert_eq!(stats.matched_by_name, 1);
    assert_eq!(stats.needs_creation, 2);
}

#[test]
fn test_targets_without_ids_never_abort_construction() {
    let orgs = vec![
        TargetOrganization {
            id: None,
            name: Some("No Id".to_string()),
            metadata: Some(OrgMetadata {
                itglue_id: Some("3".to_string()),
            }),
        },
        target("uuid-1", "Valid", None),
    ];
    let mut matcher = OrgMatcher::new(&orgs);

    // The id-less org is absent from both indices.
    assert_eq!(
        matcher.match_org(&source(Some("3"), Some("No Id"))),
        MatchResult::Create
    );
    assert_eq!(
        matcher.match_org(&source(None, Some("Valid"))),
        MatchResult::matched("uuid-1", MatchType::Name)
    );
}
