//! Raylib-backed sprite atlas.
//!
//! Loads one atlas image per [`Palette`] from the assets directory
//! (`sprites_default.png`, `sprites_red.png`, ...). Only the default image is
//! required; a palette without its own image is drawn from the default one
//! with a tint that approximates the recoloring.

use std::path::{Path, PathBuf};

use log::{info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::sprites::{
    ATLAS_COLUMNS, ATLAS_ROWS, AtlasLayout, CELL_SIZE, Palette, SpriteHandle, SpriteLookup,
};
use crate::sequence::ShapeIndex;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("default sprite atlas not found at {}", .0.display())]
    MissingDefault(PathBuf),
    #[error("failed to load {}: {reason}", .path.display())]
    Texture { path: PathBuf, reason: String },
    #[error(
        "sprite atlas {} is {width}x{height}, expected at least {min_width}x{min_height}",
        .path.display()
    )]
    TooSmall {
        path: PathBuf,
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
}

/// Tint used when a palette has no image of its own.
pub fn fallback_tint(palette: Palette) -> Color {
    match palette {
        Palette::Default => Color::WHITE,
        Palette::RedEnemies => Color::new(255, 120, 120, 255),
        Palette::BlueEnemies => Color::new(130, 160, 255, 255),
        Palette::DimEnemies => Color::new(140, 140, 140, 255),
    }
}

pub fn atlas_path(dir: &Path, palette: Palette) -> PathBuf {
    dir.join(format!("sprites_{}.png", palette.file_stem()))
}

/// Textures for every palette that has an atlas image.
pub struct SpriteAtlas {
    textures: FxHashMap<Palette, Texture2D>,
}

impl SpriteAtlas {
    pub fn load(rl: &mut RaylibHandle, th: &RaylibThread, dir: &Path) -> Result<Self, AssetError> {
        let default_path = atlas_path(dir, Palette::Default);
        if !default_path.is_file() {
            return Err(AssetError::MissingDefault(default_path));
        }

        let mut textures = FxHashMap::default();
        for palette in Palette::ALL {
            let path = atlas_path(dir, palette);
            if !path.is_file() {
                warn!(
                    "No atlas for {:?} palette at {}, tinting the default atlas",
                    palette,
                    path.display()
                );
                continue;
            }
            let texture = load_checked(rl, th, &path)?;
            info!("Loaded {:?} palette atlas from {}", palette, path.display());
            textures.insert(palette, texture);
        }
        Ok(Self { textures })
    }

    /// Texture and tint to draw `palette` with.
    pub fn texture_for(&self, palette: Palette) -> Option<(&Texture2D, Color)> {
        match self.textures.get(&palette) {
            Some(texture) => Some((texture, Color::WHITE)),
            None => self
                .textures
                .get(&Palette::Default)
                .map(|texture| (texture, fallback_tint(palette))),
        }
    }

    pub fn loaded_palettes(&self) -> usize {
        self.textures.len()
    }
}

impl SpriteLookup for SpriteAtlas {
    fn sprite(&self, shape: ShapeIndex, palette: Palette) -> SpriteHandle {
        AtlasLayout.sprite(shape, palette)
    }
}

fn load_checked(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, AssetError> {
    let path_str = path.to_string_lossy();
    let texture = rl
        .load_texture(th, &path_str)
        .map_err(|e| AssetError::Texture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let min_width = (ATLAS_COLUMNS as u32 * CELL_SIZE) as i32;
    let min_height = (ATLAS_ROWS as u32 * CELL_SIZE) as i32;
    if texture.width < min_width || texture.height < min_height {
        return Err(AssetError::TooSmall {
            path: path.to_path_buf(),
            width: texture.width,
            height: texture.height,
            min_width,
            min_height,
        });
    }
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atlas_paths() {
        let dir = Path::new("assets/sprites");
        assert_eq!(
            atlas_path(dir, Palette::BlueEnemies),
            PathBuf::from("assets/sprites/sprites_blue.png")
        );
    }

    #[test]
    fn test_default_palette_is_untinted() {
        let rgba = |c: Color| (c.r, c.g, c.b, c.a);
        assert_eq!(rgba(fallback_tint(Palette::Default)), (255, 255, 255, 255));
        assert_ne!(rgba(fallback_tint(Palette::RedEnemies)), (255, 255, 255, 255));
    }

    #[test]
    fn test_missing_default_error_names_path() {
        let err = AssetError::MissingDefault(PathBuf::from("x/sprites_default.png"));
        assert_eq!(
            err.to_string(),
            "default sprite atlas not found at x/sprites_default.png"
        );
    }
}
