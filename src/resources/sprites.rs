//! Sprite atlas geometry, palettes and the sprite lookup contract.
//!
//! The atlas is a 20 x 12 grid of 16 x 16 cells. A shape index picks a cell,
//! a [`Palette`] picks the recoloring. [`SpriteLookup`] turns the pair into
//! an opaque [`SpriteHandle`] that the render backend knows how to draw.

use serde::Serialize;

use crate::sequence::ShapeIndex;

/// Cells per atlas row.
pub const ATLAS_COLUMNS: usize = 20;
/// Rows of cells in the atlas.
pub const ATLAS_ROWS: usize = 12;
/// Width and height of one cell in pixels.
pub const CELL_SIZE: u32 = 16;
/// Number of shapes in the atlas.
pub const SHAPE_COUNT: usize = ATLAS_COLUMNS * ATLAS_ROWS;

/// Selectable recoloring of the shared atlas.
///
/// The enemy palettes only differ from the default in the enemy color range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Palette {
    #[default]
    Default,
    RedEnemies,
    BlueEnemies,
    DimEnemies,
}

impl Palette {
    pub const ALL: [Palette; 4] = [
        Palette::Default,
        Palette::RedEnemies,
        Palette::BlueEnemies,
        Palette::DimEnemies,
    ];

    /// Suffix used for the atlas image of this palette (`sprites_<stem>.png`).
    pub fn file_stem(self) -> &'static str {
        match self {
            Palette::Default => "default",
            Palette::RedEnemies => "red",
            Palette::BlueEnemies => "blue",
            Palette::DimEnemies => "dim",
        }
    }

    fn from_index(index: u32) -> Palette {
        match index {
            1 => Palette::RedEnemies,
            2 => Palette::BlueEnemies,
            3 => Palette::DimEnemies,
            _ => Palette::Default,
        }
    }
}

/// Opaque reference to one drawable sprite (shape in a palette).
///
/// Handles are plain values: they stay valid for the whole session and can
/// be copied freely into [`Sprite`](crate::components::sprite::Sprite)
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(u32);

impl SpriteHandle {
    pub fn new(shape: ShapeIndex, palette: Palette) -> Self {
        Self(palette as u32 * SHAPE_COUNT as u32 + shape as u32)
    }

    pub fn shape(self) -> ShapeIndex {
        (self.0 % SHAPE_COUNT as u32) as ShapeIndex
    }

    pub fn palette(self) -> Palette {
        Palette::from_index(self.0 / SHAPE_COUNT as u32)
    }
}

/// Top-left pixel of a shape's cell inside the atlas image.
pub fn cell_origin(shape: ShapeIndex) -> (u32, u32) {
    let shape = shape as usize;
    let x = (shape % ATLAS_COLUMNS) as u32 * CELL_SIZE;
    let y = (shape / ATLAS_COLUMNS) as u32 * CELL_SIZE;
    (x, y)
}

/// Source of sprite handles for the animation pass.
pub trait SpriteLookup {
    /// Handle for `shape` drawn with `palette`.
    ///
    /// Shape indices come from the sequence catalog and are in range by
    /// construction.
    fn sprite(&self, shape: ShapeIndex, palette: Palette) -> SpriteHandle;
}

/// Lookup that only encodes the (shape, palette) pair.
///
/// Useful wherever no textures are loaded (tests, headless tools).
#[derive(Debug, Clone, Copy, Default)]
pub struct AtlasLayout;

impl SpriteLookup for AtlasLayout {
    fn sprite(&self, shape: ShapeIndex, palette: Palette) -> SpriteHandle {
        debug_assert!((shape as usize) < SHAPE_COUNT, "shape {shape} outside the atlas");
        SpriteHandle::new(shape, palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_decodes_for_backend() {
        let handle = SpriteHandle::new(239, Palette::DimEnemies);
        assert_eq!(handle.shape(), 239);
        assert_eq!(handle.palette(), Palette::DimEnemies);
    }

    #[test]
    fn test_handles_differ_per_palette() {
        let a = AtlasLayout.sprite(41, Palette::Default);
        let b = AtlasLayout.sprite(41, Palette::RedEnemies);
        assert_ne!(a, b);
    }

    #[test]
    fn test_cell_origin() {
        assert_eq!(cell_origin(0), (0, 0));
        assert_eq!(cell_origin(19), (304, 0));
        assert_eq!(cell_origin(20), (0, 16));
        assert_eq!(cell_origin(239), (304, 176));
    }
}
