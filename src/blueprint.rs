//! The compiler's only input seam: a three-layer raster with width, height,
//! and per-pixel color lookup. Blueprint string decoding, image-file I/O and
//! the ROM/text generators are external collaborators (see spec §1, §6) —
//! they are expected to produce something implementing [`Blueprint`], not to
//! live in this crate.

use crate::color::Color;

/// The three co-sized raster layers a blueprint carries. Only `Logic` is
/// ever read by the compiler; `DecoOn`/`DecoOff` exist purely so a full
/// blueprint round-trips through callers that care about appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Logic,
    DecoOn,
    DecoOff,
}

/// A blueprint: width, height, and per-layer pixel lookup. Implement this
/// over whatever backing store a caller already has (decoded PNG, decoded
/// blueprint string, procedurally generated ROM/text array, ...); the
/// compiler only ever calls [`Blueprint::logic_pixel`].
pub trait Blueprint {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, layer: Layer, x: usize, y: usize) -> Color;

    fn logic_pixel(&self, x: usize, y: usize) -> Color {
        self.get(Layer::Logic, x, y)
    }
}

/// A simple in-memory [`Blueprint`] backed by three flat `Vec<Color>`
/// layers. The reference implementation for tests, the demo CLI, and
/// anything that doesn't already have its own backing store.
#[derive(Debug, Clone)]
pub struct RasterBlueprint {
    width: usize,
    height: usize,
    logic: Vec<Color>,
    deco_on: Vec<Color>,
    deco_off: Vec<Color>,
}

impl RasterBlueprint {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        RasterBlueprint {
            width,
            height,
            logic: vec![Color::TRANSPARENT; len],
            deco_on: vec![Color::TRANSPARENT; len],
            deco_off: vec![Color::TRANSPARENT; len],
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Color> {
        match layer {
            Layer::Logic => &mut self.logic,
            Layer::DecoOn => &mut self.deco_on,
            Layer::DecoOff => &mut self.deco_off,
        }
    }

    pub fn set(&mut self, layer: Layer, x: usize, y: usize, color: Color) {
        let width = self.width;
        self.layer_mut(layer)[y * width + x] = color;
    }

    pub fn set_logic(&mut self, x: usize, y: usize, color: Color) {
        self.set(Layer::Logic, x, y, color);
    }

    pub fn set_deco_on(&mut self, x: usize, y: usize, color: Color) {
        self.set(Layer::DecoOn, x, y, color);
    }

    pub fn set_deco_off(&mut self, x: usize, y: usize, color: Color) {
        self.set(Layer::DecoOff, x, y, color);
    }

    /// Swap the DecoOn and DecoOff layers in place. Used to exercise the
    /// invariant that deco layers never affect compilation (spec §8).
    pub fn swap_deco_layers(&mut self) {
        std::mem::swap(&mut self.deco_on, &mut self.deco_off);
    }

    /// Parse a tiny row-per-line textual fixture: one ASCII letter per
    /// pixel, mapped through `code`. Used by tests and the demo CLI — not a
    /// blueprint string codec, just a development convenience (see
    /// SPEC_FULL §10.3).
    pub fn from_rows(rows: &[&str], code: impl Fn(char) -> Color) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut bp = RasterBlueprint::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                bp.set_logic(x, y, code(ch));
            }
        }
        bp
    }
}

impl Blueprint for RasterBlueprint {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, layer: Layer, x: usize, y: usize) -> Color {
        let idx = y * self.width + x;
        match layer {
            Layer::Logic => self.logic[idx],
            Layer::DecoOn => self.deco_on[idx],
            Layer::DecoOff => self.deco_off[idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapping_deco_layers_leaves_logic_untouched() {
        let mut bp = RasterBlueprint::new(2, 1);
        bp.set_logic(0, 0, Color::rgba(1, 2, 3, 255));
        bp.set_deco_on(0, 0, Color::rgba(9, 9, 9, 255));
        bp.set_deco_off(0, 0, Color::rgba(8, 8, 8, 255));
        bp.swap_deco_layers();
        assert_eq!(bp.get(Layer::Logic, 0, 0), Color::rgba(1, 2, 3, 255));
        assert_eq!(bp.get(Layer::DecoOn, 0, 0), Color::rgba(8, 8, 8, 255));
        assert_eq!(bp.get(Layer::DecoOff, 0, 0), Color::rgba(9, 9, 9, 255));
    }
}
