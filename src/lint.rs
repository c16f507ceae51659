//! Structural lint (spec §4.7, §10.8): minimum fan-in/fan-out per kind, plus
//! optional trace-connectivity and rogue-cross warnings.

use serde::Deserialize;

use crate::complex_graph::ComplexGraph;
use crate::ink::{InkKind, same_family};
use crate::pixel::{PixelLattice, pixel_xy};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Require ≥2 inputs on multi-input gates instead of ≥1.
    pub check_gates: bool,
    /// Warn about trace nodes with no reader or no writer.
    pub check_traces: bool,
    /// Warn about Cross tiles with fewer than both axes wired.
    pub check_crosses: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            check_gates: true,
            check_traces: true,
            check_crosses: false,
        }
    }
}

/// One finding per line, formatted `"<x>, <y>: <message>"` (spec §4.7, §6).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub findings: Vec<String>,
}

fn min_fan_in_out(kind: InkKind, settings: &AnalysisSettings) -> Option<(usize, usize)> {
    use InkKind::*;
    match kind {
        Buffer | Not => Some((1, 1)),
        And | Or | Nor | Nand | Xor | Xnor => {
            Some((if settings.check_gates { 2 } else { 1 }, 1))
        }
        LatchOn | LatchOff | Clock | Timer | Random => Some((0, 1)),
        LED | Break => Some((1, 0)),
        Wifi0 | Wifi1 | Wifi2 | Wifi3 => Some((1, 1)),
        _ => None,
    }
}

/// Run the configured lint checks over a (non-compressed) complex graph.
pub fn analyze(graph: &ComplexGraph, width: usize, settings: &AnalysisSettings) -> AnalysisReport {
    let mut findings = Vec::new();

    for idx in graph.node_indices() {
        let node = graph.node(idx);
        let (x, y) = pixel_xy(node.id, width);

        if let Some((min_in, min_out)) = min_fan_in_out(node.kind, settings) {
            if node.from.len() < min_in {
                findings.push(format!(
                    "{x}, {y}: {} has {} input(s), needs at least {min_in}",
                    node.kind.desc(),
                    node.from.len()
                ));
            }
            if node.to.len() < min_out {
                findings.push(format!(
                    "{x}, {y}: {} has {} output(s), needs at least {min_out}",
                    node.kind.desc(),
                    node.to.len()
                ));
            }
        }

        if settings.check_traces && node.kind.is_trace() {
            if node.to.is_empty() {
                findings.push(format!("{x}, {y}: nothing reads from this trace"));
            }
            if node.from.is_empty() {
                findings.push(format!("{x}, {y}: nothing writes to this trace"));
            }
        }
    }

    AnalysisReport { findings }
}

/// A Cross tile whose two axes both wire *something* (i.e. its union-find
/// merging actually did useful work) has a same-family pair on each axis.
/// One lacking that on one axis is a "rogue cross" — redundant ink sitting
/// on a single trace run, bridging nothing (spec §10.8).
fn axis_is_wired(lattice: &PixelLattice, ax: i64, ay: i64, bx: i64, by: i64) -> bool {
    if !lattice.in_bounds(ax, ay) || !lattice.in_bounds(bx, by) {
        return false;
    }
    let a = lattice.kind_at(ax as usize, ay as usize);
    let b = lattice.kind_at(bx as usize, by as usize);
    !a.is_empty() && !b.is_empty() && same_family(a, b)
}

/// Scan for rogue Cross tiles when `settings.check_crosses` is set, appending
/// findings in raster order.
pub fn check_crosses(lattice: &PixelLattice, settings: &AnalysisSettings, report: &mut AnalysisReport) {
    if !settings.check_crosses {
        return;
    }
    for y in 0..lattice.height {
        for x in 0..lattice.width {
            if !lattice.kind_at(x, y).is_cross() {
                continue;
            }
            let (x64, y64) = (x as i64, y as i64);
            let horizontal = axis_is_wired(lattice, x64 - 1, y64, x64 + 1, y64);
            let vertical = axis_is_wired(lattice, x64, y64 - 1, x64, y64 + 1);
            if !(horizontal && vertical) {
                report
                    .findings
                    .push(format!("{x}, {y}: rogue cross (only one axis wired)"));
            }
        }
    }
}
