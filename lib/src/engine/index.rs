// lib/src/engine/index.rs

use models::{EdgeElement, Element, NodeElement};
use std::collections::HashMap;

/// Read-only lookup structures over one element snapshot. Holds
/// references into the slice it was built from and is owned by the
/// operation that built it. One pass, O(nodes + edges).
pub struct GraphIndex<'a> {
    node_by_id: HashMap<&'a str, &'a NodeElement>,
    // Nodes and edges in input order; the deterministic iteration
    // order of every operation derives from these.
    nodes: Vec<&'a NodeElement>,
    edges: Vec<&'a EdgeElement>,
    // Node id -> incident edges in input order. A self-loop is listed
    // once for its node.
    adjacency: HashMap<&'a str, Vec<&'a EdgeElement>>,
}

impl<'a> GraphIndex<'a> {
    /// Builds the index, skipping malformed elements (empty `id`, or
    /// edges with an empty endpoint). Duplicate ids resolve
    /// last-seen-wins in the lookup map.
    pub fn build(elements: &'a [Element]) -> Self {
        let mut node_by_id = HashMap::new();
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut adjacency: HashMap<&str, Vec<&EdgeElement>> = HashMap::new();

        for element in elements {
            match element {
                Element::Node(node) => {
                    if node.id.is_empty() {
                        continue;
                    }
                    node_by_id.insert(node.id.as_str(), node);
                    nodes.push(node);
                }
                Element::Edge(edge) => {
                    if edge.id.is_empty() || edge.source.is_empty() || edge.target.is_empty() {
                        continue;
                    }
                    edges.push(edge);
                    adjacency.entry(edge.source.as_str()).or_default().push(edge);
                    if edge.target != edge.source {
                        adjacency.entry(edge.target.as_str()).or_default().push(edge);
                    }
                }
            }
        }

        GraphIndex {
            node_by_id,
            nodes,
            edges,
            adjacency,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a NodeElement> {
        self.node_by_id.get(id).copied()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_by_id.contains_key(id)
    }

    /// All well-formed nodes in input order.
    pub fn nodes(&self) -> &[&'a NodeElement] {
        &self.nodes
    }

    /// All well-formed edges in input order (used by the closure pass).
    pub fn edges(&self) -> &[&'a EdgeElement] {
        &self.edges
    }

    /// Edges incident to a node id, in input order. Empty for unknown
    /// or isolated ids.
    pub fn incident_edges(&self, id: &str) -> &[&'a EdgeElement] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{EdgeElement, NodeElement};

    fn snapshot() -> Vec<Element> {
        vec![
            NodeElement::new("a", "T1").into(),
            NodeElement::new("b", "T2").into(),
            EdgeElement::new("e1", "a", "b").into(),
            EdgeElement::new("loop", "b", "b").into(),
            // Dangling target: indexed, but never resolves to a node.
            EdgeElement::new("e2", "b", "ghost").into(),
        ]
    }

    #[test]
    fn builds_adjacency_for_both_endpoints() {
        let elements = snapshot();
        let index = GraphIndex::build(&elements);

        assert_eq!(index.node_count(), 2);
        assert_eq!(index.edge_count(), 3);
        let a_edges: Vec<&str> = index.incident_edges("a").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(a_edges, vec!["e1"]);
        let b_edges: Vec<&str> = index.incident_edges("b").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(b_edges, vec!["e1", "loop", "e2"]);
    }

    #[test]
    fn self_loop_listed_once() {
        let elements = snapshot();
        let index = GraphIndex::build(&elements);
        let loops = index
            .incident_edges("b")
            .iter()
            .filter(|e| e.id == "loop")
            .count();
        assert_eq!(loops, 1);
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let elements: Vec<Element> = vec![
            NodeElement::new("", "T1").into(),
            EdgeElement::new("e1", "", "b").into(),
            EdgeElement::new("", "a", "b").into(),
            NodeElement::new("a", "T1").into(),
        ];
        let index = GraphIndex::build(&elements);
        assert_eq!(index.node_count(), 1);
        assert_eq!(index.edge_count(), 0);
        assert!(index.contains_node("a"));
    }

    #[test]
    fn duplicate_node_id_last_seen_wins() {
        let elements: Vec<Element> = vec![
            NodeElement::new("a", "T1").into(),
            NodeElement::new("a", "T2").into(),
        ];
        let index = GraphIndex::build(&elements);
        assert_eq!(index.node("a").unwrap().entity_type_code, "T2");
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let elements: Vec<Element> = Vec::new();
        let index = GraphIndex::build(&elements);
        assert_eq!(index.node_count(), 0);
        assert_eq!(index.edge_count(), 0);
        assert!(index.incident_edges("anything").is_empty());
    }
}
