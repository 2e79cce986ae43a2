// models/src/elements.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in the property graph (e.g., a person, an organization, a
/// document).
///
/// `fields` holds arbitrary display attributes keyed by short codes:
/// the business identifier under `ID`, the English label under `EN`,
/// the Arabic label under `AR`, and whatever else the upstream mapping
/// produced. Kept ordered for deterministic serialization.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    /// The id of the node. Empty when the upstream row was malformed;
    /// such nodes are skipped at index construction.
    #[serde(default)]
    pub id: String,

    /// Discrete entity-type code (e.g., "PER", "ORG").
    #[serde(rename = "entityTypeCode", default)]
    pub entity_type_code: String,

    /// Display attributes of the node.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl NodeElement {
    /// Creates a new node.
    pub fn new(id: impl Into<String>, entity_type_code: impl Into<String>) -> Self {
        NodeElement {
            id: id.into(),
            entity_type_code: entity_type_code.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add or update a field using a builder pattern.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Gets a field value by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// A directed edge connecting two nodes by id.
///
/// Direction matters only when a search filter restricts it; otherwise
/// edges are traversed as undirected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EdgeElement {
    #[serde(default)]
    pub id: String,

    /// Source node id.
    #[serde(default)]
    pub source: String,

    /// Target node id.
    #[serde(default)]
    pub target: String,

    /// Display attributes of the edge (relation labels, codes).
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl EdgeElement {
    /// Creates a new edge between two node ids.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        EdgeElement {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add or update a field using a builder pattern.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// True when the edge references a node id on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// The endpoint opposite to `node_id`. For a self-loop this is the
    /// node itself.
    pub fn other_endpoint(&self, node_id: &str) -> &str {
        if node_id == self.source {
            &self.target
        } else {
            &self.source
        }
    }
}

/// A graph element as it travels over the wire: a tagged union of
/// nodes and edges, flat in a single array.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Node(NodeElement),
    Edge(EdgeElement),
}

impl Element {
    /// Returns the element's id regardless of kind.
    pub fn id(&self) -> &str {
        match self {
            Element::Node(n) => &n.id,
            Element::Edge(e) => &e.id,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Element::Edge(_))
    }

    pub fn as_node(&self) -> Option<&NodeElement> {
        match self {
            Element::Node(n) => Some(n),
            Element::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeElement> {
        match self {
            Element::Node(_) => None,
            Element::Edge(e) => Some(e),
        }
    }
}

impl From<NodeElement> for Element {
    fn from(n: NodeElement) -> Self {
        Element::Node(n)
    }
}

impl From<EdgeElement> for Element {
    fn from(e: EdgeElement) -> Self {
        Element::Edge(e)
    }
}
