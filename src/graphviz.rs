//! GraphViz `digraph` emission (spec §4.8, §10.8).

use serde::Deserialize;

use crate::complex_graph::{ComplexGraph, Purpose};
use crate::pixel::pixel_xy;
use crate::timing::{TimingStats, compute_timings, mark_critical_path, timing_stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Positions {
    None,
    Absolute,
    Suggested,
}

impl Default for Positions {
    fn default() -> Self {
        Positions::None
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Run graph compression before emitting (spec §4.4).
    pub compressed: bool,
    /// Wrap Input/Output nodes in `cluster_input`/`cluster_output`.
    pub ioclusters: bool,
    /// Run timing analysis and cluster nodes by `max_timing`; overrides
    /// `ioclusters` when both are set.
    pub timings: bool,
    /// Suffix node labels with their `(min-max)` timing window.
    pub timinglabels: bool,
    pub positions: Positions,
    pub scale: f64,
    /// Force Input/Output node shape to `square`.
    pub squareio: bool,
    /// Color `is_on_loop` nodes `orange`, distinct from critical-path `red`.
    pub highlight_loops: bool,
    /// Use IEC 60617 gate-symbol labels instead of plain kind names.
    pub iec_symbols: bool,
}

impl Default for GraphSettings {
    fn default() -> Self {
        GraphSettings {
            compressed: false,
            ioclusters: false,
            timings: false,
            timinglabels: false,
            positions: Positions::None,
            scale: 1.0,
            squareio: false,
            highlight_loops: false,
            iec_symbols: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphResults {
    pub graphviz: Vec<String>,
    pub stats: TimingStats,
}

fn node_label(graph: &ComplexGraph, idx: usize, settings: &GraphSettings) -> String {
    let node = graph.node(idx);
    let base = if settings.iec_symbols {
        node.kind.iec_label()
    } else {
        node.kind.desc()
    };
    if settings.timinglabels {
        format!("{base} ({}-{})", node.min_timing, node.max_timing)
    } else {
        base.to_string()
    }
}

fn node_attrs(
    graph: &ComplexGraph,
    idx: usize,
    width: usize,
    height: usize,
    settings: &GraphSettings,
) -> String {
    let node = graph.node(idx);
    let mut attrs = vec![format!("label=\"{}\"", node_label(graph, idx, settings))];

    match settings.positions {
        Positions::None => {}
        Positions::Absolute | Positions::Suggested => {
            let (x, y) = pixel_xy(node.id, width);
            let py = (height as f64) - y as f64;
            let suffix = if settings.positions == Positions::Absolute {
                "!"
            } else {
                ""
            };
            attrs.push(format!(
                "pos=\"{},{}{suffix}\"",
                x as f64 * settings.scale,
                py * settings.scale
            ));
        }
    }

    if settings.highlight_loops && node.is_on_loop {
        attrs.push("color=orange".to_string());
    } else if node.on_crit_path {
        attrs.push("color=red".to_string());
    }

    if settings.squareio && node.purpose != Purpose::Other {
        attrs.push("shape=square".to_string());
    }

    attrs.join(", ")
}

fn node_name(idx: usize) -> String {
    format!("n{idx}")
}

fn cluster_nodes(lines: &mut Vec<String>, name: &str, members: &[usize]) {
    lines.push(format!("  subgraph cluster_{name} {{"));
    for &idx in members {
        lines.push(format!("    {};", node_name(idx)));
    }
    lines.push("  }".to_string());
}

/// Build the GraphViz text for `sgraph`, running (optional) compression and
/// timing analysis as `settings` directs.
pub fn build_graphviz(
    sgraph: &crate::simple_graph::SimpleGraph,
    width: usize,
    height: usize,
    settings: &GraphSettings,
) -> GraphResults {
    let working;
    let sgraph = if settings.compressed {
        working = crate::complex_graph::compressed_connections(sgraph);
        &working
    } else {
        sgraph
    };

    let mut graph = ComplexGraph::build(sgraph);
    let stats = if settings.timings || settings.timinglabels {
        compute_timings(&mut graph);
        let stats = timing_stats(&graph);
        mark_critical_path(&mut graph, stats);
        stats
    } else {
        TimingStats::default()
    };

    let mut lines = vec!["digraph {".to_string()];

    if settings.timings {
        let mut by_tick: hashbrown::HashMap<i64, Vec<usize>> = hashbrown::HashMap::new();
        for idx in graph.node_indices() {
            let tick = graph.node(idx).max_timing;
            if tick < 0 {
                continue;
            }
            by_tick.entry(tick).or_default().push(idx);
        }
        let mut ticks: Vec<i64> = by_tick.keys().copied().collect();
        ticks.sort_unstable();
        for tick in ticks {
            cluster_nodes(&mut lines, &tick.to_string(), &by_tick[&tick]);
        }
    } else if settings.ioclusters {
        let inputs: Vec<usize> = graph
            .node_indices()
            .filter(|&i| graph.node(i).purpose == Purpose::Input)
            .collect();
        let outputs: Vec<usize> = graph
            .node_indices()
            .filter(|&i| graph.node(i).purpose == Purpose::Output)
            .collect();
        if !inputs.is_empty() {
            cluster_nodes(&mut lines, "input", &inputs);
        }
        if !outputs.is_empty() {
            cluster_nodes(&mut lines, "output", &outputs);
        }
    }

    for idx in graph.node_indices() {
        lines.push(format!(
            "  {} [{}];",
            node_name(idx),
            node_attrs(&graph, idx, width, height, settings)
        ));
    }

    for idx in graph.node_indices() {
        let node = graph.node(idx);
        for &to in &node.to {
            let other = graph.node(to);
            let critical = node.on_crit_path
                && other.on_crit_path
                && node.max_timing >= other.max_timing - 1;
            let attrs = if critical { " [color=red]" } else { "" };
            lines.push(format!(
                "  {} -> {}{attrs};",
                node_name(idx),
                node_name(to)
            ));
        }
    }

    lines.push("}".to_string());

    GraphResults {
        graphviz: lines,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ink::InkKind;
    use crate::simple_graph::SimpleGraph;

    fn wire_inverter_output() -> SimpleGraph {
        let mut g = SimpleGraph::default();
        g.entities.insert(0, InkKind::Read);
        g.entities.insert(1, InkKind::Not);
        g.entities.insert(2, InkKind::Trace1);
        g.connections.insert((0, 1));
        g.connections.insert((1, 2));
        g
    }

    #[test]
    fn emits_valid_digraph_wrapper() {
        let g = wire_inverter_output();
        let results = build_graphviz(&g, 3, 1, &GraphSettings::default());
        assert_eq!(results.graphviz.first().unwrap(), "digraph {");
        assert_eq!(results.graphviz.last().unwrap(), "}");
    }

    #[test]
    fn timings_setting_populates_stats_and_clusters() {
        let g = wire_inverter_output();
        let settings = GraphSettings {
            timings: true,
            ..GraphSettings::default()
        };
        let results = build_graphviz(&g, 3, 1, &settings);
        assert_eq!(results.stats.crit_path_len, 1);
        assert!(results.graphviz.iter().any(|l| l.contains("cluster_")));
    }

    #[test]
    fn unreachable_node_is_not_clustered_at_sentinel_tick() {
        let mut g = wire_inverter_output();
        // An LED with no driving input never gets touched by timing
        // propagation and stays at the -1 sentinel.
        g.entities.insert(3, InkKind::LED);
        let settings = GraphSettings {
            timings: true,
            ..GraphSettings::default()
        };
        let results = build_graphviz(&g, 3, 1, &settings);
        assert!(!results.graphviz.iter().any(|l| l.contains("cluster_-1")));
    }

    #[test]
    fn iec_symbols_change_gate_labels() {
        let g = wire_inverter_output();
        let settings = GraphSettings {
            iec_symbols: true,
            ..GraphSettings::default()
        };
        let results = build_graphviz(&g, 3, 1, &settings);
        assert!(results.graphviz.iter().any(|l| l.contains("1 \u{25E6}")));
    }
}
