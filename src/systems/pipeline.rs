//! Fixed per-tick system pipeline.
//!
//! A tick always runs the same ordered list of passes:
//!
//! 1. advance the [`GameClock`]
//! 2. [`capture_intent`](super::intent::capture_intent)
//! 3. [`integrate_movement`](super::movement::integrate_movement)
//! 4. [`update_actor_poses`](super::animation::update_actor_poses) then
//!    [`resolve_animation`](super::animation::resolve_animation)
//! 5. [`render`](super::render::render)
//!
//! The update passes live in [`UPDATE_SYSTEMS`] so the order is data, not
//! control flow. Rendering is kept apart because it only needs shared access
//! to the world and a mutable backend.

use crate::components::sprite::{OUTLINE_GREEN, Sprite};
use crate::resources::clock::GameClock;
use crate::resources::input::InputSources;
use crate::resources::sprites::SpriteLookup;
use crate::store::{ComponentMask, World};

use super::animation::{resolve_animation, update_actor_poses};
use super::intent::capture_intent;
use super::movement::{Playfield, integrate_movement};
use super::render::{Renderer, render};

/// Collaborators visible to the update passes during one tick.
pub struct Frame<'a> {
    pub tick: u64,
    pub inputs: &'a dyn InputSources,
    pub sprites: &'a dyn SpriteLookup,
    pub playfield: Playfield,
}

pub type System = fn(&mut World, &Frame<'_>);

fn intent_stage(world: &mut World, frame: &Frame<'_>) {
    capture_intent(world, frame.inputs);
}

fn movement_stage(world: &mut World, frame: &Frame<'_>) {
    integrate_movement(world, frame.playfield);
}

fn animation_stage(world: &mut World, frame: &Frame<'_>) {
    update_actor_poses(world, frame.tick);
    resolve_animation(world, frame.tick, frame.sprites);
}

/// Update passes in execution order.
pub const UPDATE_SYSTEMS: &[(&str, System)] = &[
    ("intent", intent_stage),
    ("movement", movement_stage),
    ("animation", animation_stage),
];

/// Run the update passes for an already-advanced tick.
pub fn update(world: &mut World, frame: &Frame<'_>) {
    for (name, system) in UPDATE_SYSTEMS {
        log::trace!("tick {} running {name}", frame.tick);
        system(world, frame);
    }
}

/// Advance the clock and run one full tick, rendering included.
///
/// Returns the tick that was run.
pub fn run_tick(
    world: &mut World,
    clock: &mut GameClock,
    inputs: &dyn InputSources,
    sprites: &dyn SpriteLookup,
    playfield: Playfield,
    renderer: &mut dyn Renderer,
) -> u64 {
    let tick = clock.advance();
    let frame = Frame {
        tick,
        inputs,
        sprites,
        playfield,
    };
    update(world, &frame);
    render(world, renderer);
    tick
}

/// Set or clear the debug outline on every sprite.
pub fn set_debug_outlines(world: &mut World, enabled: bool) {
    let flags = if enabled { OUTLINE_GREEN } else { 0 };
    world.for_each_with(ComponentMask::SPRITE, |_, row| {
        if let Some(sprite) = row.sprite {
            sprite.flags = flags;
        }
    });
    log::debug!(
        "Debug outlines {} on {} sprites",
        if enabled { "set" } else { "cleared" },
        world.table::<Sprite>().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_order() {
        let names: Vec<&str> = UPDATE_SYSTEMS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["intent", "movement", "animation"]);
    }

    #[test]
    fn test_outline_toggle() {
        let mut world = World::new();
        let e = world.create_entity();
        world.attach(e, Sprite::new(0.0, 0.0)).expect("sprite");
        set_debug_outlines(&mut world, true);
        assert_eq!(world.get::<Sprite>(e).expect("sprite").flags, OUTLINE_GREEN);
        set_debug_outlines(&mut world, false);
        assert_eq!(world.get::<Sprite>(e).expect("sprite").flags, 0);
    }
}
