//! Engine systems.
//!
//! Each system is a plain function over the [`World`](crate::store::World)
//! that performs a single linear pass. [`pipeline`] fixes their order.
//!
//! Submodules overview
//! - [`animation`] – actor pose selection and frame resolution
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`intent`] – turn controller state into grid mover requests
//! - [`movement`] – advance grid movers and wrap them around the playfield
//! - [`pipeline`] – the fixed per-tick system order
//! - [`render`] – draw sprites and debug overlays

pub mod animation;
pub mod input;
pub mod intent;
pub mod movement;
pub mod pipeline;
pub mod render;
