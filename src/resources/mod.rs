//! Long-lived state shared with systems.
//!
//! Overview
//! - `clock` – global tick counter
//! - `debugmode` – debug overlay toggle
//! - `gameconfig` – INI-backed settings
//! - `input` – input source traits and per-frame keyboard state
//! - `rendertarget` – fixed-resolution render texture and letterboxing
//! - `spriteatlas` – raylib textures for every palette
//! - `sprites` – atlas layout, palettes, sprite handles
pub mod clock;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod rendertarget;
pub mod spriteatlas;
pub mod sprites;
