// lib/src/engine/matching.rs

use models::{MatchMode, NodeElement, SearchFilter};

/// Field keys a filter value is matched against: the business
/// identifier and the two localized labels.
const CANDIDATE_KEYS: [&str; 3] = ["ID", "EN", "AR"];

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Whether a node satisfies one search filter.
///
/// The entity-type code is a category, compared case-sensitively on
/// the raw code. Candidate fields and filter values are trimmed and
/// lowercased before text comparison; blanks on either side are
/// discarded.
pub fn node_matches(node: &NodeElement, filter: &SearchFilter) -> bool {
    if node.entity_type_code != filter.entity_type {
        return false;
    }

    let values: Vec<String> = filter
        .values
        .iter()
        .map(|v| normalize(v))
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        return false;
    }

    let mut candidates = CANDIDATE_KEYS
        .iter()
        .filter_map(|key| node.field(key))
        .map(normalize)
        .filter(|c| !c.is_empty());

    match filter.match_mode {
        MatchMode::Exact => candidates.any(|c| values.iter().any(|v| c == *v)),
        MatchMode::Contains => {
            candidates.any(|c| values.iter().any(|v| c.contains(v.as_str())))
        }
    }
}
