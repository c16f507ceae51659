//! Pass 1 of the compiler (spec §4.2): local same-family merging, the Cross
//! through-rule, global Wifi/Mesh class roots, and the bridge/touching
//! connection records that later passes (tunnel/mesh/bus resolution) key on.

use crate::disjoint_set::DisjointSet;
use crate::ink::{InkKind, same_family};
use crate::pixel::{PixelIndex, PixelLattice, pixel_index};

/// `(bridge_pixel, touching_pixel)`, recorded once per directed adjacency
/// between a bridging kind and a plain neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conn {
    pub bridge: PixelIndex,
    pub touching: PixelIndex,
}

/// The five families of cross-kind adjacency recorded during pass 1, fed
/// into tunnel/mesh/bus resolution and simple-graph extraction respectively.
#[derive(Debug, Clone, Default)]
pub struct ConnRecords {
    pub bus: Vec<Conn>,
    pub tunnel: Vec<Conn>,
    pub mesh: Vec<Conn>,
    pub read: Vec<Conn>,
    pub write: Vec<Conn>,
}

/// If exactly one side is a plain neighbor of a bridge-kind side (per `f`),
/// record `(bridge, touching)`. Both-or-neither satisfying `f` records
/// nothing — a bus only bridges *across* its own run, not to another bus.
fn add_conn(
    p: InkKind,
    n: InkKind,
    pi: PixelIndex,
    ni: PixelIndex,
    conns: &mut Vec<Conn>,
    f: impl Fn(InkKind) -> bool,
) {
    if !n.is_empty() && !f(n) && !n.is_cross() && f(p) {
        conns.push(Conn {
            bridge: pi,
            touching: ni,
        });
    }
    if !p.is_empty() && !f(p) && !p.is_cross() && f(n) {
        conns.push(Conn {
            bridge: ni,
            touching: pi,
        });
    }
}

fn check_adjacent(
    lattice: &PixelLattice,
    ds: &mut DisjointSet,
    records: &mut ConnRecords,
    px: usize,
    py: usize,
    nx: usize,
    ny: usize,
) {
    let p = lattice.kind_at(px, py);
    let n = lattice.kind_at(nx, ny);
    let pi = pixel_index(px, py, lattice.width);
    let ni = pixel_index(nx, ny, lattice.width);
    if same_family(p, n) {
        ds.unite(pi, ni);
    }
    add_conn(p, n, pi, ni, &mut records.bus, InkKind::is_bus);
    add_conn(p, n, pi, ni, &mut records.tunnel, InkKind::is_tunnel);
    add_conn(p, n, pi, ni, &mut records.mesh, InkKind::is_mesh);
    add_conn(p, n, pi, ni, &mut records.read, InkKind::is_read);
    add_conn(p, n, pi, ni, &mut records.write, InkKind::is_write);
}

/// Unite `(ax,ay)` and `(bx,by)` iff both are in-bounds and same-family. Used
/// for the Cross through-rule, where one axis' endpoints may legitimately
/// sit off the edge of the blueprint.
fn unite_cross_axis(lattice: &PixelLattice, ds: &mut DisjointSet, ax: i64, ay: i64, bx: i64, by: i64) {
    if !lattice.in_bounds(ax, ay) || !lattice.in_bounds(bx, by) {
        return;
    }
    let (ax, ay, bx, by) = (ax as usize, ay as usize, bx as usize, by as usize);
    let a = lattice.kind_at(ax, ay);
    let b = lattice.kind_at(bx, by);
    if same_family(a, b) {
        let ai = pixel_index(ax, ay, lattice.width);
        let bi = pixel_index(bx, by, lattice.width);
        ds.unite(ai, bi);
    }
}

/// Run pass 1 over the whole lattice: local merges, the Cross rule, and
/// global Wifi/Mesh root unification. Returns the disjoint set (not yet
/// flattened) and the recorded bridge connections.
pub fn first_pass(lattice: &PixelLattice) -> (DisjointSet, ConnRecords) {
    let mut ds = DisjointSet::new(lattice.len());
    let mut records = ConnRecords::default();

    let mut wireless_root: [Option<PixelIndex>; 4] = [None; 4];
    let mut mesh_root: Option<PixelIndex> = None;

    for y in 0..lattice.height {
        for x in 0..lattice.width {
            if x + 1 < lattice.width {
                check_adjacent(lattice, &mut ds, &mut records, x, y, x + 1, y);
            }
            if y + 1 < lattice.height {
                check_adjacent(lattice, &mut ds, &mut records, x, y, x, y + 1);
            }

            let kind = lattice.kind_at(x, y);
            if kind.is_cross() {
                let (x, y) = (x as i64, y as i64);
                unite_cross_axis(lattice, &mut ds, x - 1, y, x + 1, y);
                unite_cross_axis(lattice, &mut ds, x, y - 1, x, y + 1);
            }

            let idx = pixel_index(x, y, lattice.width);
            if let Some(channel) = kind.wireless_channel() {
                match wireless_root[channel as usize] {
                    None => wireless_root[channel as usize] = Some(idx),
                    Some(root) => ds.unite(idx, root),
                }
            } else if kind.is_mesh() {
                match mesh_root {
                    None => mesh_root = Some(idx),
                    Some(root) => ds.unite(idx, root),
                }
            }
        }
    }

    (ds, records)
}
