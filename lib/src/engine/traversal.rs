// lib/src/engine/traversal.rs

use crate::engine::index::GraphIndex;
use models::{EdgeElement, NodeElement};
use std::collections::HashSet;

/// Nodes and edges gathered by a traversal, deduplicated by id and
/// kept in insertion order.
pub struct Collected<'a> {
    nodes: Vec<&'a NodeElement>,
    edges: Vec<&'a EdgeElement>,
    node_ids: HashSet<&'a str>,
    edge_ids: HashSet<&'a str>,
}

impl<'a> Collected<'a> {
    pub fn new() -> Self {
        Collected {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_ids: HashSet::new(),
            edge_ids: HashSet::new(),
        }
    }

    /// Inserts a node, ignoring ids already present.
    pub fn insert_node(&mut self, node: &'a NodeElement) {
        if self.node_ids.insert(node.id.as_str()) {
            self.nodes.push(node);
        }
    }

    /// Inserts an edge, ignoring ids already present.
    pub fn insert_edge(&mut self, edge: &'a EdgeElement) {
        if self.edge_ids.insert(edge.id.as_str()) {
            self.edges.push(edge);
        }
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn nodes(&self) -> &[&'a NodeElement] {
        &self.nodes
    }

    pub fn edges(&self) -> &[&'a EdgeElement] {
        &self.edges
    }

    /// Combined node + edge count (what the cap is checked against).
    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

impl<'a> Default for Collected<'a> {
    fn default() -> Self {
        Collected::new()
    }
}

/// The set of node ids to expand from in the current round, in
/// insertion order.
pub struct Frontier<'a> {
    ids: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> Frontier<'a> {
    pub fn new() -> Self {
        Frontier {
            ids: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds an id unless already present.
    pub fn push(&mut self, id: &'a str) {
        if self.seen.insert(id) {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> Default for Frontier<'a> {
    fn default() -> Self {
        Frontier::new()
    }
}

/// Breadth-first expansion of a pre-seeded frontier, up to `depth`
/// rounds.
///
/// Search and expansion both run through here; they differ only in
/// seeding and in the `admit` rule. `arrived_from_source` is true when
/// the frontier node is the edge's source.
///
/// `cap` bounds the combined node + edge count (`0` = unbounded) and
/// is checked after every insertion. Hitting it stops the whole
/// traversal immediately, not at the round boundary.
pub fn traverse<'a, F>(
    index: &GraphIndex<'a>,
    collected: &mut Collected<'a>,
    mut frontier: Frontier<'a>,
    depth: usize,
    cap: usize,
    mut admit: F,
) where
    F: FnMut(&EdgeElement, bool) -> bool,
{
    let capped = |collected: &Collected<'a>| cap > 0 && collected.len() >= cap;

    for _ in 0..depth {
        if frontier.is_empty() {
            break;
        }
        let mut next = Frontier::new();
        for &id in &frontier.ids {
            for &edge in index.incident_edges(id) {
                let arrived_from_source = id == edge.source;
                if !arrived_from_source && id != edge.target {
                    // Defensive: adjacency should only hand us incident
                    // edges.
                    continue;
                }
                if !admit(edge, arrived_from_source) {
                    continue;
                }
                collected.insert_edge(edge);
                if capped(collected) {
                    return;
                }
                let other = edge.other_endpoint(id);
                if let Some(node) = index.node(other) {
                    collected.insert_node(node);
                    if !frontier.contains(other) {
                        next.push(node.id.as_str());
                    }
                    if capped(collected) {
                        return;
                    }
                }
            }
        }
        frontier = next;
    }
}
