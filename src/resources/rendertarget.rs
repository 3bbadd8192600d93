//! Fixed-resolution render target.
//!
//! The game draws into a texture at its internal resolution (320x200 by
//! default). Presenting scales that texture to the window, preserving the
//! aspect ratio with black bars where the shapes differ.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    /// Create the target with nearest-neighbor filtering for crisp pixels.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }
        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle covering the whole texture.
    ///
    /// The height is negative to undo OpenGL's flipped render textures.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Destination rectangle inside a `window_w` x `window_h` window.
    pub fn letterbox(&self, window_w: i32, window_h: i32) -> Rectangle {
        letterbox(self.game_width, self.game_height, window_w, window_h)
    }
}

/// Largest centered rectangle with the game's aspect ratio that fits the window.
pub fn letterbox(game_width: u32, game_height: u32, window_w: i32, window_h: i32) -> Rectangle {
    let game_w = game_width as f32;
    let game_h = game_height as f32;
    let window_w = window_w as f32;
    let window_h = window_h as f32;

    let scale = (window_w / game_w).min(window_h / game_h);
    let width = game_w * scale;
    let height = game_h * scale;
    Rectangle {
        x: (window_w - width) / 2.0,
        y: (window_h - height) / 2.0,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple_fills_window() {
        let r = letterbox(320, 200, 960, 600);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 960.0, 600.0));
    }

    #[test]
    fn test_wide_window_pillarboxes() {
        let r = letterbox(320, 200, 1280, 600);
        assert_eq!((r.width, r.height), (960.0, 600.0));
        assert_eq!((r.x, r.y), (160.0, 0.0));
    }

    #[test]
    fn test_tall_window_letterboxes() {
        let r = letterbox(320, 200, 640, 800);
        assert_eq!((r.width, r.height), (640.0, 400.0));
        assert_eq!((r.x, r.y), (0.0, 200.0));
    }
}
