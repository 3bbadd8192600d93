//! Components attached to entities.
//!
//! Every component is plain data stored in its own sorted table inside the
//! [`World`](crate::store::World). Systems select entities by component mask.
//!
//! Submodules overview:
//! - [`actor`] – directional actor whose pose picks its animation
//! - [`animation`] – playback state mapping the global tick onto a sequence
//! - [`gridmover`] – grid-locked movement state machine
//! - [`inputhook`] – controller link and behavior toggles
//! - [`sprite`] – drawable bitmap at a screen position

pub mod actor;
pub mod animation;
pub mod gridmover;
pub mod inputhook;
pub mod sprite;
