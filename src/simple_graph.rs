//! The compiler's primary output: entities (components) and the directed
//! read/write connections between them, keyed by canonical pixel root.

use hashbrown::{HashMap, HashSet};

use crate::ink::InkKind;
use crate::pixel::PixelIndex;

/// Class-id (canonical root `PixelIndex`) → kind, for classes whose kind is
/// *active* or *trace*. Classes of any other kind (Empty, Cross, Tunnel,
/// Mesh, Bus) never become entities — they exist only to mediate
/// connectivity.
pub type Entities = HashMap<PixelIndex, InkKind>;

/// Directed `(from_class, to_class)` edges between entities. A set: parallel
/// edges collapse.
pub type Connections = HashSet<(PixelIndex, PixelIndex)>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    pub entities: Entities,
    pub connections: Connections,
}

impl SimpleGraph {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
