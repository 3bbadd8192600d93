//! Intent capture.
//!
//! Reads each controlled entity's input source and turns it into a movement
//! request on its [`GridMover`](crate::components::gridmover::GridMover).
//! Directions are checked in a fixed priority order (left, right, up, down)
//! and the first held one wins. Entities without a controller, or whose
//! controller slot is empty, are left alone.

use crate::resources::input::{InputSource, InputSources};
use crate::sequence::table::Direction;
use crate::store::{ComponentMask, World};

/// First held direction in priority order, if any.
pub fn requested_direction(source: &dyn InputSource) -> Option<Direction> {
    if source.left() {
        Some(Direction::Left)
    } else if source.right() {
        Some(Direction::Right)
    } else if source.up() {
        Some(Direction::Up)
    } else if source.down() {
        Some(Direction::Down)
    } else {
        None
    }
}

pub fn capture_intent(world: &mut World, inputs: &dyn InputSources) {
    world.for_each_with(
        ComponentMask::GRID_MOVER | ComponentMask::INPUT_HOOK,
        |_, row| {
            let (Some(mover), Some(hook)) = (row.mover, row.hook) else {
                return;
            };
            let Some(source) = hook.controller.and_then(|slot| inputs.controller(slot)) else {
                return;
            };
            mover.request(requested_direction(source));
            hook.firing = source.fire();
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::gridmover::GridMover;
    use crate::components::inputhook::InputHook;
    use crate::resources::input::HeldButtons;

    #[test]
    fn test_priority_order() {
        let all = HeldButtons {
            left: true,
            right: true,
            up: true,
            down: true,
            fire: false,
        };
        assert_eq!(requested_direction(&all), Some(Direction::Left));
        let right_down = HeldButtons {
            right: true,
            down: true,
            ..HeldButtons::default()
        };
        assert_eq!(requested_direction(&right_down), Some(Direction::Right));
        let up_down = HeldButtons {
            up: true,
            down: true,
            ..HeldButtons::default()
        };
        assert_eq!(requested_direction(&up_down), Some(Direction::Up));
        assert_eq!(requested_direction(&HeldButtons::default()), None);
    }

    #[test]
    fn test_capture_sets_and_clears_request() {
        let mut world = World::new();
        let e = world.create_entity();
        world.attach(e, GridMover::new(1.0)).expect("mover");
        world.attach(e, InputHook::controlled_by(0)).expect("hook");

        let mut pads = vec![HeldButtons {
            down: true,
            fire: true,
            ..HeldButtons::default()
        }];
        capture_intent(&mut world, &pads);
        let mover = world.get::<GridMover>(e).expect("mover");
        assert!(mover.should_move);
        assert_eq!(mover.move_dir, Direction::Down);
        assert!(world.get::<InputHook>(e).expect("hook").firing);

        pads[0] = HeldButtons::default();
        capture_intent(&mut world, &pads);
        assert!(!world.get::<GridMover>(e).expect("mover").should_move);
        assert!(!world.get::<InputHook>(e).expect("hook").firing);
    }

    #[test]
    fn test_disconnected_controllers_skipped() {
        let mut world = World::new();
        let unhooked = world.create_entity();
        world.attach(unhooked, GridMover::new(1.0)).expect("mover");
        world.attach(unhooked, InputHook::default()).expect("hook");
        let dangling = world.create_entity();
        world.attach(dangling, GridMover::new(1.0)).expect("mover");
        world.attach(dangling, InputHook::controlled_by(5)).expect("hook");

        let pads = vec![HeldButtons {
            left: true,
            ..HeldButtons::default()
        }];
        capture_intent(&mut world, &pads);
        assert!(!world.get::<GridMover>(unhooked).expect("mover").should_move);
        assert!(!world.get::<GridMover>(dangling).expect("mover").should_move);
    }
}
