//! Render pass.
//!
//! [`render`] walks the sprite table in entity order and hands every sprite
//! with a bitmap to a [`Renderer`]. Sprites with non-zero flags also get a
//! debug outline around their cell. [`RaylibRenderer`] is the backend used by
//! the game: it blits atlas cells into whatever raylib draw scope it wraps
//! (normally the fixed-resolution render target).

use raylib::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::spriteatlas::SpriteAtlas;
use crate::resources::sprites::{CELL_SIZE, SpriteHandle, cell_origin};
use crate::store::World;

/// Display backend for the render pass.
pub trait Renderer {
    /// Draw `bitmap` with its top-left corner at (`x`, `y`).
    fn draw(&mut self, bitmap: SpriteHandle, x: f32, y: f32);
    /// Draw a one-pixel rectangle outline.
    fn draw_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
}

/// Draw every visible sprite.
///
/// Sprites without a bitmap are skipped, outline included.
pub fn render(world: &World, renderer: &mut dyn Renderer) {
    for (_, sprite) in world.table::<Sprite>().iter() {
        let Some(bitmap) = sprite.bitmap else {
            continue;
        };
        renderer.draw(bitmap, sprite.x, sprite.y);
        if let Some((r, g, b)) = sprite.outline_rgb() {
            let size = CELL_SIZE as i32;
            renderer.draw_outline(
                sprite.x.floor() as i32,
                sprite.y.floor() as i32,
                size,
                size,
                Color::new(r, g, b, 255),
            );
        }
    }
}

/// [`Renderer`] drawing atlas cells through a raylib draw handle.
pub struct RaylibRenderer<'a, D: RaylibDraw> {
    pub d: &'a mut D,
    pub atlas: &'a SpriteAtlas,
}

impl<'a, D: RaylibDraw> RaylibRenderer<'a, D> {
    pub fn new(d: &'a mut D, atlas: &'a SpriteAtlas) -> Self {
        Self { d, atlas }
    }
}

impl<D: RaylibDraw> Renderer for RaylibRenderer<'_, D> {
    fn draw(&mut self, bitmap: SpriteHandle, x: f32, y: f32) {
        let Some((texture, tint)) = self.atlas.texture_for(bitmap.palette()) else {
            return;
        };
        let (sx, sy) = cell_origin(bitmap.shape());
        let src = Rectangle {
            x: sx as f32,
            y: sy as f32,
            width: CELL_SIZE as f32,
            height: CELL_SIZE as f32,
        };
        // Whole pixels only, the target is point filtered.
        let pos = Vector2 {
            x: x.floor(),
            y: y.floor(),
        };
        self.d.draw_texture_rec(texture, src, pos, tint);
    }

    fn draw_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.d.draw_rectangle_lines(x, y, w, h, color);
    }
}

/// Debug overlay text, drawn at window resolution.
pub fn draw_debug_overlay<D: RaylibDraw>(d: &mut D, tick: u64, world: &World, fps: u32) {
    let lines = [
        format!("tick {tick}"),
        format!(
            "entities {} components {}",
            world.entity_count(),
            world.component_count()
        ),
        format!("fps {fps}"),
    ];
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 8, 8 + 14 * i as i32, 12, Color::YELLOW);
    }
}
