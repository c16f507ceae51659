//! Top-level entry point: wires pixel lattice construction, the two
//! union-find passes, and simple-graph extraction into one `compile` call
//! (spec §2, §4.3, §7).

use crate::blueprint::Blueprint;
use crate::bridging::{resolve_bus, resolve_mesh, resolve_tunnels};
use crate::connect::{ConnRecords, first_pass};
use crate::disjoint_set::DisjointSet;
use crate::error::{CompileError, Diagnostics};
use crate::pixel::{PixelLattice, pixel_index};
use crate::simple_graph::SimpleGraph;

/// The result of compiling one blueprint: its signal-flow graph plus any
/// non-fatal diagnostics accumulated along the way. Owns the pixel
/// dimensions so downstream analyses (lint, GraphViz) can recover (x, y)
/// from a canonical pixel root without re-deriving the lattice.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub width: usize,
    pub height: usize,
    pub graph: SimpleGraph,
    pub diagnostics: Diagnostics,
}

fn extract_simple_graph(lattice: &PixelLattice, ds: &DisjointSet, records: &ConnRecords) -> SimpleGraph {
    let mut sgraph = SimpleGraph::default();

    for i in 0..lattice.len() {
        if ds.root_of(i) != i {
            continue;
        }
        let kind = lattice.kind_of(i);
        if kind.is_active() || kind.is_trace() {
            sgraph.entities.insert(i, kind);
        }
    }

    for conn in &records.read {
        let touching_kind = lattice.kind_of(conn.touching);
        if touching_kind.is_active() {
            sgraph
                .connections
                .insert((ds.root_of(conn.bridge), ds.root_of(conn.touching)));
        }
    }

    for conn in &records.write {
        let touching_kind = lattice.kind_of(conn.touching);
        if touching_kind.is_active() {
            sgraph
                .connections
                .insert((ds.root_of(conn.touching), ds.root_of(conn.bridge)));
        }
    }

    sgraph
}

/// Compile a blueprint into a [`Compilation`]. The only fatal failure mode
/// is [`CompileError::InvalidGeometry`]; everything else the compiler can
/// discover (unmatched tunnels) is reported through `diagnostics` and the
/// `log` facade, never as an `Err`.
pub fn compile(bp: &dyn Blueprint) -> Result<Compilation, CompileError> {
    let width = bp.width();
    let height = bp.height();
    if width == 0 || height == 0 {
        return Err(CompileError::InvalidGeometry { width, height });
    }

    let lattice = PixelLattice::from_blueprint(bp);
    let (mut ds, records) = first_pass(&lattice);
    ds.flatten();

    let mut diagnostics = Diagnostics::new();
    resolve_tunnels(&lattice, &mut ds, &records, &mut diagnostics);
    resolve_mesh(&lattice, &mut ds, &records);
    resolve_bus(&lattice, &mut ds, &records);
    ds.flatten();

    let graph = extract_simple_graph(&lattice, &ds, &records);

    log::debug!(
        "compiled {width}x{height} blueprint: {} pixels, {} entities, {} connections",
        lattice.len(),
        graph.entities.len(),
        graph.connections.len()
    );

    Ok(Compilation {
        width,
        height,
        graph,
        diagnostics,
    })
}

/// Convenience re-export so callers keying connections by raw coordinates
/// don't need to import `pixel_index` themselves.
pub fn index_at(x: usize, y: usize, width: usize) -> usize {
    pixel_index(x, y, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::RasterBlueprint;
    use crate::ink_palette;

    fn code(c: char) -> crate::color::Color {
        match c {
            'r' => ink_palette::READ,
            'n' => ink_palette::NOT,
            'w' => ink_palette::WRITE,
            '1' => ink_palette::TRACE1,
            _ => ink_palette::EMPTY,
        }
    }

    #[test]
    fn wire_inverter_output_scenario() {
        let bp = RasterBlueprint::from_rows(&["rnw11"], code);
        let compilation = compile(&bp).unwrap();
        assert_eq!(compilation.graph.entities.len(), 3);
        assert!(compilation.diagnostics.is_empty());
    }

    #[test]
    fn zero_height_is_invalid_geometry() {
        let bp = RasterBlueprint::new(3, 0);
        let err = compile(&bp).unwrap_err();
        assert_eq!(err, CompileError::InvalidGeometry { width: 3, height: 0 });
    }

    #[test]
    fn empty_blueprint_yields_empty_graph() {
        let bp = RasterBlueprint::new(2, 2);
        let compilation = compile(&bp).unwrap();
        assert!(compilation.graph.is_empty());
    }

    #[test]
    fn recompiling_is_deterministic() {
        let bp = RasterBlueprint::from_rows(&["rnw11"], code);
        let a = compile(&bp).unwrap();
        let b = compile(&bp).unwrap();
        assert_eq!(a.graph, b.graph);
    }

    #[test]
    fn swapping_deco_layers_does_not_change_graph() {
        let mut bp = RasterBlueprint::from_rows(&["rnw11"], code);
        let before = compile(&bp).unwrap();
        bp.swap_deco_layers();
        let after = compile(&bp).unwrap();
        assert_eq!(before.graph, after.graph);
    }
}
