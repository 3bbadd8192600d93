use crate::resources::sprites::SpriteHandle;

/// Outline flag bits, one per RGB channel of the debug outline color.
pub const OUTLINE_RED: u8 = 0b100;
pub const OUTLINE_GREEN: u8 = 0b010;
pub const OUTLINE_BLUE: u8 = 0b001;

/// Drawable sprite at a sub-pixel screen position.
///
/// `bitmap` is `None` until something assigns a visual. Entities with an
/// [`Animation`](super::animation::Animation) get it filled in every tick.
/// `flags` drives the debug outline: zero draws no outline, otherwise bits
/// 2/1/0 switch the red/green/blue channels on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub bitmap: Option<SpriteHandle>,
    pub flags: u8,
}

impl Sprite {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            bitmap: None,
            flags: 0,
        }
    }

    pub fn with_bitmap(mut self, bitmap: SpriteHandle) -> Self {
        self.bitmap = Some(bitmap);
        self
    }

    pub fn with_flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// Debug outline color, or `None` when no outline is requested.
    pub fn outline_rgb(&self) -> Option<(u8, u8, u8)> {
        if self.flags == 0 {
            return None;
        }
        let channel = |bit: u8| if self.flags & bit != 0 { 255 } else { 0 };
        Some((
            channel(OUTLINE_RED),
            channel(OUTLINE_GREEN),
            channel(OUTLINE_BLUE),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_outline_without_flags() {
        assert_eq!(Sprite::new(0.0, 0.0).outline_rgb(), None);
    }

    #[test]
    fn test_outline_channels_follow_bits() {
        let s = Sprite::new(0.0, 0.0).with_flags(OUTLINE_RED | OUTLINE_BLUE);
        assert_eq!(s.outline_rgb(), Some((255, 0, 255)));
        let s = s.with_flags(OUTLINE_GREEN);
        assert_eq!(s.outline_rgb(), Some((0, 255, 0)));
    }

    #[test]
    fn test_high_bits_still_draw_black_outline() {
        let s = Sprite::new(0.0, 0.0).with_flags(0b1000);
        assert_eq!(s.outline_rgb(), Some((0, 0, 0)));
    }
}
