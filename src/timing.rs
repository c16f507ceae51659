//! Timing propagation (spec §4.6): earliest/latest arrival tick per node,
//! aggregate statistics, and critical-path backtrace.
//!
//! The propagation rule is specified recursively in the reference tool; this
//! implementation walks an explicit stack instead so a blueprint with a long
//! acyclic chain can't overflow the native call stack (spec §9/§10.6).

use hashbrown::HashSet;

use crate::complex_graph::{ComplexGraph, NodeIndex, Purpose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingStats {
    pub min_max_time: i64,
    pub max_min_time: i64,
    pub max_max_time: i64,
    pub crit_path_len: i64,
}

/// One open call in the simulated recursion: the node being visited, the
/// timing it was entered with, its successor list, and how far through that
/// list this call has gotten. Popped (and `visiting` cleared) only once every
/// successor has been pushed and processed — the explicit-stack analogue of
/// a recursive call returning.
struct Frame {
    node: NodeIndex,
    delta: i64,
    t_min: i64,
    t_max: i64,
    children: Vec<NodeIndex>,
    next_child: usize,
}

/// Run timing propagation over `graph`, mutating each node's `min_timing`,
/// `max_timing`, `is_on_loop` in place. Call [`ComplexGraph::reset_timing_state`]
/// first if reusing a graph across runs.
pub fn compute_timings(graph: &mut ComplexGraph) {
    let inputs: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&idx| graph.node(idx).purpose == Purpose::Input)
        .collect();

    for start in inputs {
        propagate_from(graph, start);
    }
}

/// Apply entry semantics for visiting `node` with `(t_min, t_max)`: cycle
/// check, timing update, `visiting = true`. Returns `None` (and marks the
/// loop) if `node` is already on the current call chain — the reference
/// tool's cycle cut, which does not refine timing further along that edge.
fn enter(graph: &mut ComplexGraph, node: NodeIndex, t_min: i64, t_max: i64) -> Option<Frame> {
    if graph.node(node).visiting {
        graph_mark_loop(graph, node);
        return None;
    }

    let n = graph_node_mut(graph, node);
    n.min_timing = if n.min_timing < 0 { t_min } else { n.min_timing.min(t_min) };
    n.max_timing = if n.max_timing < 0 { t_max } else { n.max_timing.max(t_max) };
    n.visiting = true;

    let n = graph.node(node);
    let delta = if n.kind.is_trace() { 0 } else { 1 };
    let children = n.to.clone();

    Some(Frame {
        node,
        delta,
        t_min,
        t_max,
        children,
        next_child: 0,
    })
}

/// Depth-first propagation from a single input, using an explicit stack of
/// [`Frame`]s in place of the reference tool's native recursion (spec §9,
/// §10.6) — same visit order, same `visiting`-flag cycle semantics, no risk
/// of overflowing the call stack on a large blueprint.
fn propagate_from(graph: &mut ComplexGraph, start: NodeIndex) {
    let mut stack: Vec<Frame> = Vec::new();
    if let Some(frame) = enter(graph, start, 0, 0) {
        stack.push(frame);
    }

    while let Some(top) = stack.last_mut() {
        if top.next_child < top.children.len() {
            let child = top.children[top.next_child];
            top.next_child += 1;
            let (t_min, t_max) = (top.t_min + top.delta, top.t_max + top.delta);
            if let Some(frame) = enter(graph, child, t_min, t_max) {
                stack.push(frame);
            }
        } else {
            let node = top.node;
            stack.pop();
            graph_node_mut(graph, node).visiting = false;
        }
    }
}

fn graph_mark_loop(graph: &mut ComplexGraph, idx: NodeIndex) {
    graph_node_mut(graph, idx).is_on_loop = true;
    log::warn!("cycle detected passing through node {idx}");
}

fn graph_node_mut(graph: &mut ComplexGraph, idx: NodeIndex) -> &mut crate::complex_graph::Node {
    // `ComplexGraph` only exposes read access to `Node` plus whole-graph
    // mutators; timing needs targeted per-node mutation during the walk.
    graph.node_mut_for_timing(idx)
}

/// Aggregate stats across Output nodes. Empty graph (no outputs) yields all
/// fields at their sentinel `-1`.
pub fn timing_stats(graph: &ComplexGraph) -> TimingStats {
    let outputs: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&idx| graph.node(idx).purpose == Purpose::Output)
        .collect();

    if outputs.is_empty() {
        return TimingStats {
            min_max_time: -1,
            max_min_time: -1,
            max_max_time: -1,
            crit_path_len: -1,
        };
    }

    let max_min_time = outputs.iter().map(|&i| graph.node(i).min_timing).max().unwrap();
    let min_max_time = outputs.iter().map(|&i| graph.node(i).max_timing).min().unwrap();
    let max_max_time = outputs.iter().map(|&i| graph.node(i).max_timing).max().unwrap();

    TimingStats {
        min_max_time,
        max_min_time,
        max_max_time,
        crit_path_len: max_max_time,
    }
}

/// Mark `on_crit_path` on every node reachable backward from the
/// max-`max_timing` Output nodes via predecessors within one tick.
pub fn mark_critical_path(graph: &mut ComplexGraph, stats: TimingStats) {
    if stats.max_max_time < 0 {
        return;
    }

    let mut frontier: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&idx| {
            let n = graph.node(idx);
            n.purpose == Purpose::Output && n.max_timing == stats.max_max_time
        })
        .collect();

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    while let Some(idx) = frontier.pop() {
        if !visited.insert(idx) {
            continue;
        }
        graph_node_mut(graph, idx).on_crit_path = true;
        let node = graph.node(idx);
        let threshold = node.max_timing - 1;
        let preds: Vec<NodeIndex> = node
            .from
            .iter()
            .copied()
            .filter(|&p| graph.node(p).max_timing >= threshold)
            .collect();
        frontier.extend(preds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ink::InkKind;
    use crate::simple_graph::SimpleGraph;

    fn wire_inverter_output() -> SimpleGraph {
        // Read(0) -> Not(1) -> Trace1(2)
        let mut g = SimpleGraph::default();
        g.entities.insert(0, InkKind::Read);
        g.entities.insert(1, InkKind::Not);
        g.entities.insert(2, InkKind::Trace1);
        g.connections.insert((0, 1));
        g.connections.insert((1, 2));
        g
    }

    #[test]
    fn timing_matches_wire_inverter_scenario() {
        let sg = wire_inverter_output();
        let mut graph = ComplexGraph::build(&sg);
        compute_timings(&mut graph);
        let stats = timing_stats(&graph);
        assert_eq!(stats.crit_path_len, 1);
        assert_eq!(stats.max_max_time, 1);
    }

    #[test]
    fn empty_graph_has_sentinel_stats() {
        let sg = SimpleGraph::default();
        let graph = ComplexGraph::build(&sg);
        let stats = timing_stats(&graph);
        assert_eq!(stats.crit_path_len, -1);
    }

    #[test]
    fn feedback_cycle_is_detected_and_bounded() {
        // Read(0,input) -> And(1) -> Not(2) -> And(1) feedback
        let mut g = SimpleGraph::default();
        g.entities.insert(0, InkKind::Read);
        g.entities.insert(1, InkKind::And);
        g.entities.insert(2, InkKind::Not);
        g.connections.insert((0, 1));
        g.connections.insert((1, 2));
        g.connections.insert((2, 1));
        let mut graph = ComplexGraph::build(&g);
        compute_timings(&mut graph);
        let and_idx = graph.index_of(1).unwrap();
        assert!(graph.node(and_idx).min_timing >= 0);
    }

    #[test]
    fn critical_path_marks_farthest_output() {
        let sg = wire_inverter_output();
        let mut graph = ComplexGraph::build(&sg);
        compute_timings(&mut graph);
        let stats = timing_stats(&graph);
        mark_critical_path(&mut graph, stats);
        let trace_idx = graph.index_of(2).unwrap();
        assert!(graph.node(trace_idx).on_crit_path);
    }
}
