//! Global tick counter.
//!
//! Advanced exactly once per rendered frame, before any system runs. It only
//! ever counts up; wrap-around at `u64::MAX` is not a concern in practice.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    tick: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick. Zero before the first frame.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Move to the next tick and return it.
    pub fn advance(&mut self) -> u64 {
        self.tick = self.tick.wrapping_add(1);
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_counts_frames() {
        let mut clock = GameClock::new();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.advance(), 2);
        assert_eq!(clock.tick(), 2);
    }
}
