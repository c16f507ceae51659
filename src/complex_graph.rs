//! A [`ComplexGraph`] is a SimpleGraph materialized into an arena of nodes
//! with explicit back/forward adjacency (spec §9's "indexable arena"
//! re-architecture of the reference tool's raw owning `Node*` pointers).
//! Built on demand from a [`SimpleGraph`] for one analysis, then dropped.

use hashbrown::HashMap;

use crate::ink::InkKind;
use crate::pixel::PixelIndex;
use crate::simple_graph::SimpleGraph;

/// Index into [`ComplexGraph::nodes`]. Never an owner — the arena owns the
/// nodes; indices only express "relation + lookup" (spec §9).
pub type NodeIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Other,
    Input,
    Output,
}

#[derive(Debug, Clone)]
pub struct Node {
    /// The canonical pixel root this node was built from; doubles as its
    /// position on the blueprint (`id % width`, `id / width`).
    pub id: PixelIndex,
    pub kind: InkKind,
    pub from: Vec<NodeIndex>,
    pub to: Vec<NodeIndex>,
    pub purpose: Purpose,
    pub min_timing: i64,
    pub max_timing: i64,
    pub on_crit_path: bool,
    pub visiting: bool,
    pub is_on_loop: bool,
}

impl Node {
    fn new(id: PixelIndex, kind: InkKind) -> Self {
        Node {
            id,
            kind,
            from: Vec::new(),
            to: Vec::new(),
            purpose: Purpose::Other,
            min_timing: -1,
            max_timing: -1,
            on_crit_path: false,
            visiting: false,
            is_on_loop: false,
        }
    }
}

pub struct ComplexGraph {
    nodes: Vec<Option<Node>>,
    index_of: HashMap<PixelIndex, NodeIndex>,
}

impl ComplexGraph {
    pub fn build(sgraph: &SimpleGraph) -> Self {
        let mut nodes = Vec::with_capacity(sgraph.entities.len());
        let mut index_of = HashMap::with_capacity(sgraph.entities.len());
        for (&id, &kind) in &sgraph.entities {
            index_of.insert(id, nodes.len());
            nodes.push(Some(Node::new(id, kind)));
        }

        let mut graph = ComplexGraph { nodes, index_of };
        for &(from_id, to_id) in &sgraph.connections {
            let from = graph.index_of[&from_id];
            let to = graph.index_of[&to_id];
            graph.connect(from, to);
        }
        graph.classify_purposes();
        graph
    }

    fn connect(&mut self, from: NodeIndex, to: NodeIndex) {
        self.node_mut(from).to.push(to);
        self.node_mut(to).from.push(from);
    }

    fn disconnect(&mut self, from: NodeIndex, to: NodeIndex) {
        self.node_mut(from).to.retain(|&x| x != to);
        self.node_mut(to).from.retain(|&x| x != from);
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        self.nodes[idx].as_ref().expect("use of removed node")
    }

    fn node_mut(&mut self, idx: NodeIndex) -> &mut Node {
        self.nodes[idx].as_mut().expect("use of removed node")
    }

    /// Targeted per-node mutation for timing propagation, which needs to
    /// update one node's fields without going through a whole-graph pass.
    pub(crate) fn node_mut_for_timing(&mut self, idx: NodeIndex) -> &mut Node {
        self.node_mut(idx)
    }

    /// Look up the arena index for the entity rooted at pixel `id`.
    pub fn index_of(&self, id: PixelIndex) -> Option<NodeIndex> {
        self.index_of.get(&id).copied()
    }

    /// Live node indices, in arena order (insertion order from `build`).
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|_| i))
    }

    pub fn len(&self) -> usize {
        self.node_indices().count()
    }

    fn classify_purposes(&mut self) {
        for idx in self.node_indices().collect::<Vec<_>>() {
            let node = self.node(idx);
            let eligible = node.kind.is_trace() || node.kind.is_latch() || node.kind.is_led();
            let purpose = if eligible && node.from.is_empty() && !node.to.is_empty() {
                Purpose::Input
            } else if eligible && node.to.is_empty() && !node.from.is_empty() {
                Purpose::Output
            } else {
                Purpose::Other
            };
            self.node_mut(idx).purpose = purpose;
        }
    }

    /// Remove pass-through trace nodes: single-input, trace-kind, with at
    /// least one output. For every such node, wire its one predecessor
    /// directly to each of its successors, then detach it. A single pass
    /// over a snapshot of the node list — newly created edges from one
    /// removal are not reconsidered in the same pass (reference behavior).
    pub fn compress(&mut self) {
        let snapshot: Vec<NodeIndex> = self.node_indices().collect();
        for idx in snapshot {
            let node = self.node(idx);
            if !node.kind.is_trace() || node.from.len() != 1 || node.to.is_empty() {
                continue;
            }
            let froms = node.from.clone();
            let tos = node.to.clone();
            for &f in &froms {
                for &t in &tos {
                    self.connect(f, t);
                }
            }
            for &f in &froms {
                self.disconnect(f, idx);
            }
            for &t in &tos {
                self.disconnect(idx, t);
            }
            self.nodes[idx] = None;
        }
    }

    /// Flatten back down to a [`SimpleGraph`] over whatever nodes remain.
    pub fn to_simple_graph(&self) -> SimpleGraph {
        let mut sgraph = SimpleGraph::default();
        for idx in self.node_indices() {
            let node = self.node(idx);
            sgraph.entities.insert(node.id, node.kind);
            for &to in &node.to {
                sgraph.connections.insert((node.id, self.node(to).id));
            }
        }
        sgraph
    }

    pub fn reset_timing_state(&mut self) {
        for idx in self.node_indices().collect::<Vec<_>>() {
            let node = self.node_mut(idx);
            node.min_timing = -1;
            node.max_timing = -1;
            node.visiting = false;
            node.is_on_loop = false;
            node.on_crit_path = false;
        }
    }
}

/// Build a compressed [`SimpleGraph`]: pass-through traces removed.
/// Compressing twice is idempotent — the second pass finds nothing eligible
/// because every remaining trace either has 0 or ≥2 inputs.
pub fn compressed_connections(sgraph: &SimpleGraph) -> SimpleGraph {
    let mut graph = ComplexGraph::build(sgraph);
    graph.compress();
    graph.to_simple_graph()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_chain() -> SimpleGraph {
        // And(0) -> Trace(1) -> Or(2), trace is a pure pass-through.
        let mut g = SimpleGraph::default();
        g.entities.insert(0, InkKind::And);
        g.entities.insert(1, InkKind::Trace1);
        g.entities.insert(2, InkKind::Or);
        g.connections.insert((0, 1));
        g.connections.insert((1, 2));
        g
    }

    #[test]
    fn compression_removes_passthrough_trace() {
        let g = graph_with_chain();
        let compressed = compressed_connections(&g);
        assert!(!compressed.entities.contains_key(&1));
        assert!(compressed.connections.contains(&(0, 2)));
    }

    #[test]
    fn compressing_twice_is_idempotent() {
        let g = graph_with_chain();
        let once = compressed_connections(&g);
        let twice = compressed_connections(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn multi_input_trace_is_not_compressed() {
        let mut g = SimpleGraph::default();
        g.entities.insert(0, InkKind::And);
        g.entities.insert(1, InkKind::Or);
        g.entities.insert(2, InkKind::Trace1);
        g.connections.insert((0, 2));
        g.connections.insert((1, 2));
        let compressed = compressed_connections(&g);
        assert!(compressed.entities.contains_key(&2));
    }

    #[test]
    fn purpose_classification_matches_connectivity() {
        let g = graph_with_chain();
        let graph = ComplexGraph::build(&g);
        let and_idx = graph.index_of[&0];
        let trace_idx = graph.index_of[&1];
        let or_idx = graph.index_of[&2];
        assert_eq!(graph.node(and_idx).purpose, Purpose::Input);
        assert_eq!(graph.node(trace_idx).purpose, Purpose::Other);
        assert_eq!(graph.node(or_idx).purpose, Purpose::Other);
    }
}
