// lib/src/engine/query.rs

use crate::engine::index::GraphIndex;
use crate::engine::matching::node_matches;
use crate::engine::traversal::{traverse, Collected, Frontier};
use models::{Element, SearchFilter};
use tracing::debug;

/// Multi-filter seeded search with bounded BFS expansion.
///
/// Every node matching any actionable filter becomes a seed. An edge
/// may be crossed when at least one actionable filter's direction
/// permits the crossing side (a union across filters, not per seed).
/// `cap` bounds the collected node + edge count; `0` means unbounded.
pub fn search(
    elements: &[Element],
    filters: &[SearchFilter],
    depth: usize,
    cap: usize,
) -> Vec<Element> {
    let index = GraphIndex::build(elements);
    let active: Vec<&SearchFilter> = filters.iter().filter(|f| f.is_actionable()).collect();

    let mut collected = Collected::new();
    let mut frontier = Frontier::new();
    for filter in &active {
        for &node in index.nodes() {
            if node_matches(node, filter) {
                collected.insert_node(node);
                frontier.push(node.id.as_str());
            }
        }
    }
    debug!(
        seeds = collected.len(),
        filters = active.len(),
        depth,
        cap,
        "seeded search traversal"
    );

    traverse(&index, &mut collected, frontier, depth, cap, |_, from_source| {
        active.iter().any(|f| {
            if from_source {
                f.direction.allows_outbound()
            } else {
                f.direction.allows_inbound()
            }
        })
    });

    assemble(&index, collected)
}

/// Single-node neighborhood expansion. Seeds exactly `node_id` and
/// crosses every incident edge regardless of direction or type. An
/// unknown id yields an empty result, not an error.
pub fn expand(elements: &[Element], node_id: &str, depth: usize, cap: usize) -> Vec<Element> {
    let index = GraphIndex::build(elements);
    let Some(seed) = index.node(node_id) else {
        debug!(node_id, "expand called with unknown node id");
        return Vec::new();
    };

    let mut collected = Collected::new();
    let mut frontier = Frontier::new();
    collected.insert_node(seed);
    frontier.push(seed.id.as_str());

    traverse(&index, &mut collected, frontier, depth, cap, |_, _| true);

    assemble(&index, collected)
}

/// Closure pass plus final ordering. Every edge with both endpoints
/// visible joins the result, even when the admission rule rejected it
/// during traversal: direction controls reachability, not which edges
/// render between nodes already on screen. Runs after the cap, so
/// closure edges may exceed it.
fn assemble<'a>(index: &GraphIndex<'a>, mut collected: Collected<'a>) -> Vec<Element> {
    for &edge in index.edges() {
        if collected.contains_node(&edge.source) && collected.contains_node(&edge.target) {
            collected.insert_edge(edge);
        }
    }

    let mut out = Vec::with_capacity(collected.len());
    out.extend(collected.nodes().iter().map(|&n| Element::Node(n.clone())));
    out.extend(collected.edges().iter().map(|&e| Element::Edge(e.clone())));
    out
}
