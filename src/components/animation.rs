//! Per-entity animation playback state.
//!
//! An [`Animation`] points at a catalog sequence and says how to map the
//! global tick onto it: advance one frame every `rate` ticks, counting from
//! `time_base`. Two entities playing the same sequence with different time
//! bases are out of phase with each other. The shape the sequence resolves to
//! is drawn with `palette`.

use crate::resources::sprites::Palette;
use crate::sequence::table::AnimationId;
use crate::sequence::{FrameSequence, ShapeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub sequence: AnimationId,
    /// Ticks per frame, at least 1.
    pub rate: u32,
    /// Tick at which frame 0 of the sequence was (or will be) shown.
    pub time_base: u64,
    pub palette: Palette,
}

impl Animation {
    /// New animation starting at tick 0. A `rate` of 0 is treated as 1.
    pub fn new(sequence: AnimationId, rate: u32) -> Self {
        Self {
            sequence,
            rate: rate.max(1),
            time_base: 0,
            palette: Palette::Default,
        }
    }

    pub fn with_time_base(mut self, time_base: u64) -> Self {
        self.time_base = time_base;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn frame_sequence(&self) -> &'static FrameSequence {
        self.sequence.sequence()
    }

    /// Sequence-local clock at global tick `tick`.
    ///
    /// A time base in the future reads as 0, so the first frame is held
    /// until playback starts.
    pub fn clock(&self, tick: u64) -> u64 {
        tick.saturating_sub(self.time_base) / u64::from(self.rate.max(1))
    }

    /// Shape index active at global tick `tick`.
    pub fn shape_at(&self, tick: u64) -> ShapeIndex {
        self.frame_sequence().resolve(self.clock(tick))
    }

    /// Switch to `sequence`, starting it from its first frame at `tick`.
    ///
    /// Does nothing when `sequence` is already playing, so repeated calls
    /// keep the current phase.
    pub fn play(&mut self, sequence: AnimationId, tick: u64) {
        if self.sequence != sequence {
            self.sequence = sequence;
            self.time_base = tick;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_clamped() {
        assert_eq!(Animation::new(AnimationId::FlameSpin, 0).rate, 1);
    }

    #[test]
    fn test_clock_uses_rate_and_time_base() {
        let anim = Animation::new(AnimationId::FlameSpin, 4).with_time_base(10);
        assert_eq!(anim.clock(10), 0);
        assert_eq!(anim.clock(13), 0);
        assert_eq!(anim.clock(14), 1);
        assert_eq!(anim.clock(30), 5);
    }

    #[test]
    fn test_future_time_base_holds_first_frame() {
        let anim = Animation::new(AnimationId::FlameSpin, 1).with_time_base(100);
        assert_eq!(anim.shape_at(0), 226);
        assert_eq!(anim.shape_at(101), 227);
    }

    #[test]
    fn test_play_restarts_only_on_change() {
        let mut anim = Animation::new(AnimationId::CubyDownIdle, 2);
        anim.play(AnimationId::CubyDownMove, 40);
        assert_eq!(anim.time_base, 40);
        anim.play(AnimationId::CubyDownMove, 60);
        assert_eq!(anim.time_base, 40);
        assert_eq!(anim.shape_at(40), 1);
        assert_eq!(anim.shape_at(42), 2);
    }
}
