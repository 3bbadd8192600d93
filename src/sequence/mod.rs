//! Frame sequences and the sequence catalog.
//!
//! A [`FrameSequence`] is an ordered list of sprite shape indices plus a
//! *loop span*: the number of trailing frames that repeat forever once the
//! sequence has played through once. A loop span equal to the length loops
//! the whole sequence; a loop span of 1 holds the last frame ("play once").
//!
//! - [`FrameSequence::resolve`] maps a tick count to the active shape index.
//! - [`table`] holds the immutable catalog keyed by actor kind, direction and
//!   action.

pub mod table;

use serde::Serialize;

/// Index of one 16x16 cell in the sprite atlas, independent of palette.
pub type ShapeIndex = u16;

/// Immutable list of shape indices with its end-of-sequence behavior.
///
/// Constructors are `const fn` so every catalog entry is checked when the
/// crate is compiled: empty sequences and loop spans outside `1..=len` are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSequence {
    frames: &'static [ShapeIndex],
    loop_span: usize,
}

impl FrameSequence {
    /// Sequence that loops over all of its frames.
    pub const fn looped(frames: &'static [ShapeIndex]) -> Self {
        Self::with_loop_span(frames, frames.len())
    }

    /// Sequence that plays once and holds its last frame.
    pub const fn once(frames: &'static [ShapeIndex]) -> Self {
        Self::with_loop_span(frames, 1)
    }

    /// Sequence that plays through once, then loops over its last `loop_span` frames.
    pub const fn with_loop_span(frames: &'static [ShapeIndex], loop_span: usize) -> Self {
        assert!(!frames.is_empty(), "frame sequence must have at least one frame");
        assert!(
            loop_span >= 1 && loop_span <= frames.len(),
            "loop span must be within 1..=frame count"
        );
        Self { frames, loop_span }
    }

    pub fn frames(&self) -> &'static [ShapeIndex] {
        self.frames
    }

    pub fn loop_span(&self) -> usize {
        self.loop_span
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the sequence freezes on its last frame once played through.
    pub fn holds_last_frame(&self) -> bool {
        self.loop_span == 1
    }

    /// Shape index active at `tick` (ticks counted from the sequence start).
    ///
    /// Ticks before the end of the first pass play linearly. Past that point
    /// the last `loop_span` frames repeat.
    pub fn resolve(&self, tick: u64) -> ShapeIndex {
        let len = self.frames.len() as u64;
        if tick < len {
            return self.frames[tick as usize];
        }
        let span = self.loop_span as u64;
        let offset = len - span;
        self.frames[(offset + (tick - offset) % span) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALK: FrameSequence = FrameSequence::looped(&[1, 2, 1, 0]);
    const SINGLE: FrameSequence = FrameSequence::once(&[3]);
    const FIRE: FrameSequence = FrameSequence::once(&[80, 81, 82]);
    const SHOOT: FrameSequence =
        FrameSequence::with_loop_span(&[164, 164, 165, 166, 167, 168, 169, 170, 169], 4);

    #[test]
    fn test_full_loop_wraps() {
        let got: Vec<_> = (0..5).map(|t| WALK.resolve(t)).collect();
        assert_eq!(got, vec![1, 2, 1, 0, 1]);
    }

    #[test]
    fn test_full_loop_is_periodic() {
        for t in 0..64 {
            assert_eq!(WALK.resolve(t), WALK.resolve(t + WALK.len() as u64));
        }
    }

    #[test]
    fn test_single_frame_is_always_itself() {
        assert_eq!(SINGLE.resolve(0), 3);
        assert_eq!(SINGLE.resolve(5), 3);
        assert_eq!(SINGLE.resolve(u64::MAX), 3);
    }

    #[test]
    fn test_play_once_holds_last_frame() {
        assert_eq!(FIRE.resolve(0), 80);
        assert_eq!(FIRE.resolve(1), 81);
        assert_eq!(FIRE.resolve(2), 82);
        assert_eq!(FIRE.resolve(3), 82);
        assert_eq!(FIRE.resolve(100), 82);
        assert!(FIRE.holds_last_frame());
    }

    #[test]
    fn test_linear_playback_before_loop_point() {
        for (t, frame) in SHOOT.frames().iter().enumerate() {
            assert_eq!(SHOOT.resolve(t as u64), *frame);
        }
    }

    #[test]
    fn test_partial_loop_repeats_tail() {
        // After the first pass only the last four frames repeat.
        let tail: Vec<_> = (9..17).map(|t| SHOOT.resolve(t)).collect();
        assert_eq!(tail, vec![168, 169, 170, 169, 168, 169, 170, 169]);
    }

    #[test]
    fn test_resolve_is_pure() {
        for t in [0, 7, 9, 1000] {
            assert_eq!(SHOOT.resolve(t), SHOOT.resolve(t));
        }
    }

    #[test]
    #[should_panic(expected = "loop span")]
    fn test_zero_loop_span_rejected() {
        let _ = FrameSequence::with_loop_span(&[1, 2], 0);
    }

    #[test]
    #[should_panic(expected = "at least one frame")]
    fn test_empty_sequence_rejected() {
        let _ = FrameSequence::looped(&[]);
    }
}
