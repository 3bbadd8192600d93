//! Grid-locked movement state.
//!
//! A [`GridMover`] alternates between two states:
//! - **AtRest**: the position is on a 16-pixel grid boundary on both axes and
//!   the mover may start a new step in any direction.
//! - **Moving**: the mover travels one cell in its locked-in direction and
//!   ignores new requests until it lands on the next boundary.
//!
//! The intent fields (`should_move`, `move_dir`) are written by the intent
//! capture pass; [`crate::systems::movement::integrate_movement`] owns the
//! rest.

use crate::sequence::table::Direction;

/// Width and height of one grid cell in pixels.
pub const GRID_CELL: i64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverState {
    AtRest,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMover {
    pub moving: bool,
    pub dx: f32,
    pub dy: f32,
    /// Requested direction for the next step.
    pub move_dir: Direction,
    /// Whether a step should start as soon as the mover is at rest.
    pub should_move: bool,
    /// Direction of the current (or last) step.
    pub heading: Direction,
    /// Pixels travelled per tick. Must divide [`GRID_CELL`].
    pub speed: f32,
}

impl GridMover {
    pub fn new(speed: f32) -> Self {
        Self {
            moving: false,
            dx: 0.0,
            dy: 0.0,
            move_dir: Direction::Down,
            should_move: false,
            heading: Direction::Down,
            speed,
        }
    }

    pub fn state(&self) -> MoverState {
        if self.moving {
            MoverState::Moving
        } else {
            MoverState::AtRest
        }
    }

    /// Ask for a step in `direction` (or clear the request with `None`).
    pub fn request(&mut self, direction: Option<Direction>) {
        match direction {
            Some(dir) => {
                self.should_move = true;
                self.move_dir = dir;
            }
            None => self.should_move = false,
        }
    }

    /// Lock in a step in `move_dir`.
    pub(crate) fn start(&mut self) {
        let (ux, uy) = self.move_dir.unit();
        self.dx = ux * self.speed;
        self.dy = uy * self.speed;
        self.heading = self.move_dir;
        self.moving = true;
    }

    pub(crate) fn stop(&mut self) {
        self.dx = 0.0;
        self.dy = 0.0;
        self.moving = false;
    }
}

/// Whether `coord` lies exactly on a grid boundary.
///
/// Uses Euclidean remainder so coordinates left of or above the origin
/// behave the same as positive ones.
pub fn on_grid(coord: f32) -> bool {
    coord.fract() == 0.0 && (coord as i64).rem_euclid(GRID_CELL) == 0
}

/// Speeds that land exactly on every cell boundary.
pub fn is_grid_speed(speed: u32) -> bool {
    speed > 0 && GRID_CELL % i64::from(speed) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_grid() {
        assert!(on_grid(0.0));
        assert!(on_grid(32.0));
        assert!(on_grid(-16.0));
        assert!(!on_grid(-1.0));
        assert!(!on_grid(17.0));
        assert!(!on_grid(16.5));
    }

    #[test]
    fn test_grid_speeds() {
        for speed in [1, 2, 4, 8, 16] {
            assert!(is_grid_speed(speed));
        }
        assert!(!is_grid_speed(0));
        assert!(!is_grid_speed(3));
        assert!(!is_grid_speed(32));
    }

    #[test]
    fn test_start_uses_direction_delta() {
        let mut mover = GridMover::new(2.0);
        mover.request(Some(Direction::Left));
        mover.start();
        assert_eq!((mover.dx, mover.dy), (-2.0, 0.0));
        assert_eq!(mover.heading, Direction::Left);
        assert_eq!(mover.state(), MoverState::Moving);
        mover.stop();
        assert_eq!(mover.state(), MoverState::AtRest);
    }

    #[test]
    fn test_request_none_clears_intent() {
        let mut mover = GridMover::new(1.0);
        mover.request(Some(Direction::Up));
        mover.request(None);
        assert!(!mover.should_move);
        assert_eq!(mover.move_dir, Direction::Up);
    }
}
