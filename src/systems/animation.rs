//! Animation systems.
//!
//! - [`update_actor_poses`] picks each actor's (direction, action) pose from
//!   its movement and fire state and switches its animation to the matching
//!   catalog sequence.
//! - [`resolve_animation`] maps the global tick through every animation's
//!   frame sequence and writes the resulting bitmap into the sprite.
//!
//! # Animation Flow
//!
//! 1. Sequences are defined in the static catalog ([`crate::sequence::table`])
//! 2. Entities have an [`Animation`] pointing at a catalog entry
//! 3. Actors have their entry rewritten from their pose each tick
//! 4. The resolved shape index and palette become the [`Sprite`] bitmap
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity playback state
//! - [`crate::components::actor::Actor`] – pose grid selection
//! - [`crate::resources::sprites::SpriteLookup`] – shape to bitmap mapping

use crate::components::actor::Actor;
use crate::components::animation::Animation;
use crate::components::gridmover::GridMover;
use crate::components::inputhook::InputHook;
use crate::components::sprite::Sprite;
use crate::resources::sprites::SpriteLookup;
use crate::sequence::table::{Action, Direction};
use crate::store::{ComponentMask, World};

/// Pose an actor should show given its movement and fire state.
///
/// Actors without a mover keep their current pose.
pub fn select_pose(
    actor: &Actor,
    mover: Option<&GridMover>,
    hook: Option<&InputHook>,
) -> (Direction, Action) {
    let Some(mover) = mover else {
        return (actor.direction, actor.action);
    };
    if mover.moving {
        return (mover.heading, Action::Move);
    }
    if mover.should_move {
        return (mover.move_dir, Action::Move);
    }
    let firing = hook.is_some_and(|hook| hook.firing);
    let action = if firing { Action::Fire } else { Action::Idle };
    (mover.heading, action)
}

/// Update actor poses and switch their animations.
///
/// Contract
/// - Visits every entity with [`Actor`] and [`Animation`].
/// - Reads the optional [`GridMover`] and [`InputHook`].
/// - A changed sequence restarts from its first frame at `tick`.
pub fn update_actor_poses(world: &mut World, tick: u64) {
    world.for_each_with(ComponentMask::ACTOR | ComponentMask::ANIMATION, |entity, row| {
        let (Some(actor), Some(animation)) = (row.actor, row.animation) else {
            return;
        };
        let (direction, action) = select_pose(actor, row.mover.as_deref(), row.hook.as_deref());
        if (direction, action) != (actor.direction, actor.action) {
            log::trace!("{entity} pose {direction:?}/{action:?}");
        }
        actor.direction = direction;
        actor.action = action;
        animation.play(actor.sequence_id(), tick);
    });
}

/// Resolve the visible frame of every animated sprite.
///
/// Contract
/// - Visits every entity with [`Sprite`] and [`Animation`].
/// - Never fails: every catalog sequence resolves for any tick.
pub fn resolve_animation(world: &mut World, tick: u64, sprites: &dyn SpriteLookup) {
    world.for_each_with(ComponentMask::SPRITE | ComponentMask::ANIMATION, |_, row| {
        let (Some(sprite), Some(animation)) = (row.sprite, row.animation) else {
            return;
        };
        let shape = animation.shape_at(tick);
        sprite.bitmap = Some(sprites.sprite(shape, animation.palette));
    });
}
