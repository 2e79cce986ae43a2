// models/src/filters.rs

use serde::{Deserialize, Serialize};

/// Which way a search may cross an edge, relative to the node the
/// traversal is standing on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Only edges where the current node is the source.
    Out,
    /// Only edges where the current node is the target.
    In,
    #[default]
    Both,
}

impl Direction {
    /// May traversal leave a node along an edge where it is the source?
    pub fn allows_outbound(self) -> bool {
        matches!(self, Direction::Both | Direction::Out)
    }

    /// May traversal leave a node along an edge where it is the target?
    pub fn allows_inbound(self) -> bool {
        matches!(self, Direction::Both | Direction::In)
    }
}

/// How filter values are compared against node candidate fields.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Exact,
    Contains,
}

/// One search constraint: entity type, value list, traversal direction
/// and match mode. Constructed per request, never persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Entity-type code the node must carry, compared case-sensitively.
    #[serde(rename = "entityType", default)]
    pub entity_type: String,

    /// Values matched against the node's identifier and labels.
    #[serde(default)]
    pub values: Vec<String>,

    #[serde(default)]
    pub direction: Direction,

    #[serde(rename = "match", alias = "matchMode", default)]
    pub match_mode: MatchMode,
}

impl SearchFilter {
    pub fn new(entity_type: impl Into<String>, values: Vec<String>) -> Self {
        SearchFilter {
            entity_type: entity_type.into(),
            values,
            direction: Direction::default(),
            match_mode: MatchMode::default(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// A filter missing an entity type or carrying only blank values is
    /// a no-op: it seeds nothing and authorizes no traversal.
    pub fn is_actionable(&self) -> bool {
        !self.entity_type.is_empty() && self.values.iter().any(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_both_and_exact() {
        let f: SearchFilter =
            serde_json::from_str(r#"{"entityType":"PER","values":["alice"]}"#).unwrap();
        assert_eq!(f.direction, Direction::Both);
        assert_eq!(f.match_mode, MatchMode::Exact);
        assert!(f.is_actionable());
    }

    #[test]
    fn wire_accepts_match_and_match_mode_spellings() {
        let a: SearchFilter =
            serde_json::from_str(r#"{"entityType":"PER","values":["x"],"match":"contains"}"#)
                .unwrap();
        let b: SearchFilter =
            serde_json::from_str(r#"{"entityType":"PER","values":["x"],"matchMode":"contains"}"#)
                .unwrap();
        assert_eq!(a.match_mode, MatchMode::Contains);
        assert_eq!(b.match_mode, MatchMode::Contains);
    }

    #[test]
    fn blank_filters_are_not_actionable() {
        assert!(!SearchFilter::new("", vec!["x".into()]).is_actionable());
        assert!(!SearchFilter::new("PER", vec![]).is_actionable());
        assert!(!SearchFilter::new("PER", vec!["  ".into(), "".into()]).is_actionable());
    }

    #[test]
    fn direction_gates() {
        assert!(Direction::Both.allows_outbound());
        assert!(Direction::Both.allows_inbound());
        assert!(Direction::Out.allows_outbound());
        assert!(!Direction::Out.allows_inbound());
        assert!(Direction::In.allows_inbound());
        assert!(!Direction::In.allows_outbound());
    }
}
