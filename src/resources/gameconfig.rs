//! Game configuration.
//!
//! Settings are read from an INI file. Every value has a safe default, so a
//! missing file or key simply keeps the default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 320
//! height = 200
//!
//! [window]
//! width = 960
//! height = 600
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [game]
//! move_speed = 1
//! animation_rate = 8
//! debug_outlines = false
//!
//! [assets]
//! sprites = ./assets/sprites
//! ```

use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::gridmover::is_grid_speed;

const DEFAULT_RENDER_WIDTH: u32 = 320;
const DEFAULT_RENDER_HEIGHT: u32 = 200;
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_MOVE_SPEED: u32 = 1;
const DEFAULT_ANIMATION_RATE: u32 = 8;
const DEFAULT_DEBUG_OUTLINES: bool = false;
const DEFAULT_SPRITES_DIR: &str = "./assets/sprites";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    /// Frames (and therefore ticks) per second.
    pub target_fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    /// Grid mover speed in pixels per tick. Always divides the grid cell.
    pub move_speed: u32,
    /// Ticks per animation frame, at least 1.
    pub animation_rate: u32,
    /// Start with debug outlines drawn around every sprite.
    pub debug_outlines: bool,
    /// Directory holding the `sprites_<palette>.png` atlas images.
    pub sprites_dir: PathBuf,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            move_speed: DEFAULT_MOVE_SPEED,
            animation_rate: DEFAULT_ANIMATION_RATE,
            debug_outlines: DEFAULT_DEBUG_OUTLINES,
            sprites_dir: PathBuf::from(DEFAULT_SPRITES_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Out-of-range values are
    /// rejected with a warning. Returns an error if the file cannot be read
    /// or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, speed={}, rate={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.move_speed,
            self.animation_rate
        );
        Ok(())
    }

    /// Same as [`load_from_file`](Self::load_from_file) but from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let boolean = |section: &str, key: &str| config.getbool(section, key).ok().flatten();

        // Positive values that fit in a u32; anything else keeps the current value.
        let positive = |section: &str, key: &str, current: u32| -> u32 {
            let Some(value) = uint(section, key) else {
                return current;
            };
            match u32::try_from(value) {
                Ok(v) if v > 0 => v,
                _ => {
                    warn!("Ignoring [{section}] {key} = {value}, keeping {current}");
                    current
                }
            }
        };

        // [render]
        self.render_width = positive("render", "width", self.render_width);
        self.render_height = positive("render", "height", self.render_height);

        // [window]
        self.window_width = positive("window", "width", self.window_width);
        self.window_height = positive("window", "height", self.window_height);
        self.target_fps = positive("window", "target_fps", self.target_fps);
        if let Some(vsync) = boolean("window", "vsync") {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = boolean("window", "fullscreen") {
            self.fullscreen = fullscreen;
        }

        // [game]
        if let Some(speed) = uint("game", "move_speed") {
            let speed = u32::try_from(speed).unwrap_or(0);
            if is_grid_speed(speed) {
                self.move_speed = speed;
            } else {
                warn!(
                    "move_speed = {} does not divide the 16 pixel grid, keeping {}",
                    speed, self.move_speed
                );
            }
        }
        self.animation_rate = positive("game", "animation_rate", self.animation_rate);
        if let Some(outlines) = boolean("game", "debug_outlines") {
            self.debug_outlines = outlines;
        }

        // [assets]
        if let Some(dir) = config.get("assets", "sprites") {
            self.sprites_dir = PathBuf::from(dir);
        }
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config.set("game", "move_speed", Some(self.move_speed.to_string()));
        config.set("game", "animation_rate", Some(self.animation_rate.to_string()));
        config.set("game", "debug_outlines", Some(self.debug_outlines.to_string()));

        config.set(
            "assets",
            "sprites",
            Some(self.sprites_dir.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!((config.render_width, config.render_height), (320, 200));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.move_speed, 1);
        assert_eq!(config.animation_rate, 8);
        assert!(!config.debug_outlines);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut config = GameConfig::with_path("/nonexistent/dir/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.move_speed, DEFAULT_MOVE_SPEED);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[game]\nmove_speed = 4\n")
            .expect("parse");
        assert_eq!(config.move_speed, 4);
        assert_eq!(config.animation_rate, DEFAULT_ANIMATION_RATE);
        assert_eq!(config.render_width, DEFAULT_RENDER_WIDTH);
    }

    #[test]
    fn test_off_grid_speed_rejected() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[game]\nmove_speed = 3\nanimation_rate = 0\n")
            .expect("parse");
        assert_eq!(config.move_speed, DEFAULT_MOVE_SPEED);
        assert_eq!(config.animation_rate, DEFAULT_ANIMATION_RATE);
    }

    #[test]
    fn test_out_of_range_numbers_keep_current_values() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[render]\nwidth = 0\nheight = 4294967296\n\
                 [window]\ntarget_fps = 0\nwidth = 1280\n\
                 [game]\nanimation_rate = 4294967296\n",
            )
            .expect("parse");
        assert_eq!(config.render_width, DEFAULT_RENDER_WIDTH);
        assert_eq!(config.render_height, DEFAULT_RENDER_HEIGHT);
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
        assert_eq!(config.animation_rate, DEFAULT_ANIMATION_RATE);
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("wetspot-config-{}.ini", std::process::id()));
        let mut saved = GameConfig::with_path(&path);
        saved.move_speed = 2;
        saved.debug_outlines = true;
        saved.sprites_dir = PathBuf::from("/tmp/atlas");
        saved.save_to_file().expect("save");

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, saved);
    }
}
