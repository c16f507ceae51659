//! Pass 2 of the compiler (spec §4.2): tunnel, mesh, and bus resolution.
//! Must run, in this order, after pass 1's disjoint set has been flattened —
//! these passes address classes by canonical root, not by calling `find`.

use hashbrown::HashMap;

use crate::connect::{Conn, ConnRecords};
use crate::disjoint_set::DisjointSet;
use crate::error::Diagnostics;
use crate::ink::InkKind;
use crate::pixel::{PixelIndex, PixelLattice, pixel_index, pixel_xy};

/// Walk from a tunnel endpoint outward along `(dx, dy)` looking for a
/// matching far-side companion, and unite `touching` with it if found.
/// Meshes never propagate through tunnels.
fn resolve_one_tunnel(
    lattice: &PixelLattice,
    ds: &mut DisjointSet,
    conn: Conn,
    diagnostics: &mut Diagnostics,
) {
    let (tx, ty) = pixel_xy(conn.bridge, lattice.width);
    let (px, py) = pixel_xy(conn.touching, lattice.width);
    let start_kind = lattice.kind_at(px, py);
    if start_kind.is_mesh() {
        return;
    }

    let dx = tx as i64 - px as i64;
    let dy = ty as i64 - py as i64;
    debug_assert!((dx == 0) != (dy == 0), "tunnel direction must be axis-aligned");
    debug_assert!(dx.abs() <= 1 && dy.abs() <= 1);

    let mut x = tx as i64;
    let mut y = ty as i64;
    loop {
        x += dx;
        y += dy;
        if dx != 0 && (x <= 0 || x as usize >= lattice.width - 1) {
            break;
        }
        if dy != 0 && (y <= 0 || y as usize >= lattice.height - 1) {
            break;
        }
        let end_t = lattice.kind_at(x as usize, y as usize);
        let end_p = lattice.kind_at((x + dx) as usize, (y + dy) as usize);
        if end_t.is_tunnel() && end_p == start_kind {
            let far = pixel_index((x + dx) as usize, (y + dy) as usize, lattice.width);
            ds.unite(conn.touching, far);
            return;
        }
    }

    log::warn!("unmatched tunnel at ({tx}, {ty}) from ({px}, {py})");
    diagnostics.push(format!("unmatched tunnel at ({tx}, {ty})"));
}

pub fn resolve_tunnels(
    lattice: &PixelLattice,
    ds: &mut DisjointSet,
    records: &ConnRecords,
    diagnostics: &mut Diagnostics,
) {
    // Each tunnel endpoint is recorded twice (once per side); reprocessing
    // is harmless since `unite` is idempotent.
    for &conn in &records.tunnel {
        resolve_one_tunnel(lattice, ds, conn, diagnostics);
    }
}

/// Unite every member of `group` into one class, preserving the
/// leftmost-wins tie-break (members are united onto `group[0]`).
fn unite_group(ds: &mut DisjointSet, group: &[PixelIndex]) {
    for &member in &group[1..] {
        ds.unite(group[0], member);
    }
}

/// Partition `group` by exact kind, then unite within each same-kind
/// subgroup. Only same-kind runs bridge at distance — "same family" is a
/// local-adjacency concept only (spec §4.2).
fn unite_group_by_kind(lattice: &PixelLattice, ds: &mut DisjointSet, group: &[PixelIndex]) {
    let mut by_kind: HashMap<InkKind, Vec<PixelIndex>> = HashMap::new();
    for &id in group {
        let (x, y) = pixel_xy(id, lattice.width);
        by_kind.entry(lattice.kind_at(x, y)).or_default().push(id);
    }
    for subgroup in by_kind.values() {
        unite_group(ds, subgroup);
    }
}

/// Group touching-pixels by kind and unite each group: a single Mesh tile
/// interconnects every trace-run of identical kind that touches it.
pub fn resolve_mesh(lattice: &PixelLattice, ds: &mut DisjointSet, records: &ConnRecords) {
    let mut touching: Vec<PixelIndex> = Vec::new();
    let mut seen = hashbrown::HashSet::new();
    for conn in &records.mesh {
        if seen.insert(conn.touching) {
            touching.push(conn.touching);
        }
    }
    unite_group_by_kind(lattice, ds, &touching);
}

/// Group touching-pixels by the (already-resolved) bus class they touch,
/// then by kind within each bus group, then unite. Different bus runs —
/// even of the same color — stay independent because they key on the
/// canonical root of the bus class, not the bus's color.
pub fn resolve_bus(lattice: &PixelLattice, ds: &mut DisjointSet, records: &ConnRecords) {
    let mut by_bus: HashMap<PixelIndex, Vec<PixelIndex>> = HashMap::new();
    for conn in &records.bus {
        let bus_root = ds.find(conn.bridge);
        let group = by_bus.entry(bus_root).or_default();
        if !group.contains(&conn.touching) {
            group.push(conn.touching);
        }
    }
    for group in by_bus.values() {
        unite_group_by_kind(lattice, ds, group);
    }
}
