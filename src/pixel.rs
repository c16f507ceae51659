//! Pixel indexing and the lattice of [`InkKind`] derived from a blueprint's
//! Logic layer.

use crate::blueprint::Blueprint;
use crate::ink::{InkKind, ink_from_color};

/// `y * width + x`, in `[0, width * height)`.
pub type PixelIndex = usize;

pub const fn pixel_index(x: usize, y: usize, width: usize) -> PixelIndex {
    y * width + x
}

pub const fn pixel_xy(index: PixelIndex, width: usize) -> (usize, usize) {
    (index % width, index / width)
}

/// A width×height array of [`InkKind`], built once from a blueprint's Logic
/// layer (DecoOn/DecoOff are never consulted).
pub struct PixelLattice {
    pub width: usize,
    pub height: usize,
    kinds: Vec<InkKind>,
}

impl PixelLattice {
    pub fn from_blueprint(bp: &dyn Blueprint) -> Self {
        let width = bp.width();
        let height = bp.height();
        let mut kinds = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                kinds.push(ink_from_color(bp.logic_pixel(x, y)));
            }
        }
        PixelLattice {
            width,
            height,
            kinds,
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kind_at(&self, x: usize, y: usize) -> InkKind {
        self.kinds[pixel_index(x, y, self.width)]
    }

    pub fn kind_of(&self, index: PixelIndex) -> InkKind {
        self.kinds[index]
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::RasterBlueprint;
    use crate::color::Color;

    #[test]
    fn index_roundtrips_xy() {
        let width = 7;
        for y in 0..3usize {
            for x in 0..width {
                let idx = pixel_index(x, y, width);
                assert_eq!(pixel_xy(idx, width), (x, y));
            }
        }
    }

    #[test]
    fn lattice_maps_logic_layer_only() {
        let mut bp = RasterBlueprint::new(2, 1);
        bp.set_logic(0, 0, Color::rgba(255, 255, 255, 255)); // LED
        bp.set_deco_on(1, 0, Color::rgba(255, 255, 255, 255)); // ignored
        let lattice = PixelLattice::from_blueprint(&bp);
        assert_eq!(lattice.kind_at(0, 0), InkKind::LED);
        assert_eq!(lattice.kind_at(1, 0), InkKind::Empty);
    }
}
