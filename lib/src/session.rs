// lib/src/session.rs

use models::Element;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Per-node FIFO queues of elements held back by an earlier capped
/// expansion.
#[derive(Debug, Default)]
struct PendingBatch {
    nodes: VecDeque<Element>,
    edges: VecDeque<Element>,
}

impl PendingBatch {
    fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Overflow cache for capped expansions, owned by a single logical
/// session.
///
/// When an expansion produces more elements than the delivery batch
/// allows, the remainder is queued under the expanded node's id and
/// handed out in later batches on request. Not designed for concurrent
/// mutation; the hosting layer wraps it in a lock.
#[derive(Debug, Default)]
pub struct PendingExpansions {
    queues: HashMap<String, PendingBatch>,
}

impl PendingExpansions {
    pub fn new() -> Self {
        PendingExpansions::default()
    }

    /// Splits `elements` at `cap`: the first `cap` elements are
    /// returned for immediate delivery, the remainder is queued under
    /// `node_id` partitioned by kind.
    pub fn split_batch(
        &mut self,
        node_id: &str,
        elements: Vec<Element>,
        cap: usize,
    ) -> Vec<Element> {
        if elements.len() <= cap {
            return elements;
        }
        let mut elements = elements;
        let rest = elements.split_off(cap);
        let pending = self.queues.entry(node_id.to_string()).or_default();
        for element in rest {
            if element.is_node() {
                pending.nodes.push_back(element);
            } else {
                pending.edges.push_back(element);
            }
        }
        debug!(
            node_id,
            queued_nodes = pending.nodes.len(),
            queued_edges = pending.edges.len(),
            "queued overflow elements"
        );
        elements
    }

    /// Drains up to `batch` queued elements for `node_id`, alternating
    /// node/edge while both queues have entries. The entry is removed
    /// once fully drained.
    pub fn take_more(&mut self, node_id: &str, batch: usize) -> Vec<Element> {
        let Some(pending) = self.queues.get_mut(node_id) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        while out.len() < batch && !pending.is_empty() {
            if let Some(node) = pending.nodes.pop_front() {
                out.push(node);
            }
            if out.len() >= batch {
                break;
            }
            if let Some(edge) = pending.edges.pop_front() {
                out.push(edge);
            }
        }
        if pending.is_empty() {
            self.queues.remove(node_id);
        }
        out
    }

    pub fn has_pending(&self, node_id: &str) -> bool {
        self.queues.contains_key(node_id)
    }

    pub fn clear(&mut self) {
        self.queues.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{EdgeElement, NodeElement};

    fn node(id: &str) -> Element {
        NodeElement::new(id, "T1").into()
    }

    fn edge(id: &str) -> Element {
        EdgeElement::new(id, "x", "y").into()
    }

    #[test]
    fn small_results_pass_through_untouched() {
        let mut cache = PendingExpansions::new();
        let batch = cache.split_batch("hub", vec![node("a"), edge("e1")], 5);
        assert_eq!(batch.len(), 2);
        assert!(!cache.has_pending("hub"));
    }

    #[test]
    fn overflow_is_queued_and_drained_interleaved() {
        let mut cache = PendingExpansions::new();
        let elements = vec![
            node("a"),
            node("b"),
            node("c"),
            edge("e1"),
            edge("e2"),
        ];
        let first = cache.split_batch("hub", elements, 2);
        assert_eq!(first.len(), 2);
        assert!(cache.has_pending("hub"));

        // Remainder was [c, e1, e2]; draining alternates node/edge.
        let more = cache.take_more("hub", 2);
        let more_ids: Vec<&str> = more.iter().map(Element::id).collect();
        assert_eq!(more_ids, vec!["c", "e1"]);
        assert!(cache.has_pending("hub"));

        let last = cache.take_more("hub", 10);
        let last_ids: Vec<&str> = last.iter().map(Element::id).collect();
        assert_eq!(last_ids, vec!["e2"]);
        assert!(!cache.has_pending("hub"));
    }

    #[test]
    fn draining_unknown_node_yields_nothing() {
        let mut cache = PendingExpansions::new();
        assert!(cache.take_more("missing", 10).is_empty());
    }

    #[test]
    fn clear_empties_every_queue() {
        let mut cache = PendingExpansions::new();
        cache.split_batch("hub", vec![node("a"), node("b")], 1);
        assert!(cache.has_pending("hub"));
        cache.clear();
        assert!(!cache.has_pending("hub"));
    }
}
