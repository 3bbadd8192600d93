//! Grid movement integration.
//!
//! Advances every [`GridMover`] one tick along its locked-in direction and
//! stops it when both coordinates land on a grid boundary. A mover at rest
//! with a pending request starts its next step (and takes its first stride)
//! in the same tick, so a full cell takes exactly `16 / speed` ticks.
//! Requests made while moving wait until the mover is at rest again.

use crate::components::gridmover::{GRID_CELL, GridMover, on_grid};
use crate::components::sprite::Sprite;
use crate::store::{ComponentMask, World};

/// Area that wrapping movers are kept inside.
///
/// Both sides are whole grid cells, so wrapping a grid-aligned position
/// keeps it grid-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Playfield covering a `width` x `height` screen, rounded up to whole cells.
    pub fn covering(width: u32, height: u32) -> Self {
        let cell = GRID_CELL as u32;
        let round_up = |v: u32| v.div_ceil(cell).max(1) * cell;
        Self {
            width: round_up(width) as f32,
            height: round_up(height) as f32,
        }
    }

    /// Wrap a resting position back inside the playfield.
    pub fn wrap(&self, x: f32, y: f32) -> (f32, f32) {
        (x.rem_euclid(self.width), y.rem_euclid(self.height))
    }
}

/// Advance one mover and its sprite by one tick.
///
/// Returns true when the mover came to rest this tick.
pub fn step_mover(mover: &mut GridMover, sprite: &mut Sprite) -> bool {
    if !mover.moving && mover.should_move {
        debug_assert!(
            on_grid(sprite.x) && on_grid(sprite.y),
            "mover starting off grid at ({}, {})",
            sprite.x,
            sprite.y
        );
        mover.start();
        log::trace!("mover starts {:?} from ({}, {})", mover.heading, sprite.x, sprite.y);
    }
    if !mover.moving {
        return false;
    }
    sprite.x += mover.dx;
    sprite.y += mover.dy;
    if on_grid(sprite.x) && on_grid(sprite.y) {
        mover.stop();
        log::trace!("mover rests at ({}, {})", sprite.x, sprite.y);
        return true;
    }
    false
}

pub fn integrate_movement(world: &mut World, playfield: Playfield) {
    world.for_each_with(ComponentMask::SPRITE | ComponentMask::GRID_MOVER, |_, row| {
        let (Some(sprite), Some(mover)) = (row.sprite, row.mover) else {
            return;
        };
        let arrived = step_mover(mover, sprite);
        let wraps = row.hook.is_some_and(|hook| hook.wrap);
        if arrived && wraps {
            (sprite.x, sprite.y) = playfield.wrap(sprite.x, sprite.y);
        }
    });
}
