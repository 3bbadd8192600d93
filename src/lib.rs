//! Wetspot library.
//!
//! Exposes the component store, components, resources, systems, and the
//! sequence catalog for use in integration tests and tools.

pub mod components;
pub mod game;
pub mod resources;
pub mod sequence;
pub mod store;
pub mod systems;
