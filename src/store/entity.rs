//! Entity identifiers and component masks.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Opaque, monotonically increasing entity identifier.
///
/// IDs are handed out in order and never recycled, so appending a new entity
/// keeps the entity list sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The component kinds the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Sprite,
    Animation,
    Actor,
    GridMover,
    InputHook,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Sprite,
        ComponentKind::Animation,
        ComponentKind::Actor,
        ComponentKind::GridMover,
        ComponentKind::InputHook,
    ];

    pub const fn mask(self) -> ComponentMask {
        ComponentMask(1 << self as u8)
    }
}

/// Bit set of component kinds attached to an entity (or required by a pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentMask(u8);

impl ComponentMask {
    pub const EMPTY: ComponentMask = ComponentMask(0);
    pub const SPRITE: ComponentMask = ComponentKind::Sprite.mask();
    pub const ANIMATION: ComponentMask = ComponentKind::Animation.mask();
    pub const ACTOR: ComponentMask = ComponentKind::Actor.mask();
    pub const GRID_MOVER: ComponentMask = ComponentKind::GridMover.mask();
    pub const INPUT_HOOK: ComponentMask = ComponentKind::InputHook.mask();

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn has(self, kind: ComponentKind) -> bool {
        self.0 & kind.mask().0 != 0
    }

    /// True when every bit of `required` is also set in `self`.
    pub fn contains(self, required: ComponentMask) -> bool {
        self.0 & required.0 == required.0
    }

    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= kind.mask().0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ComponentMask {
    type Output = ComponentMask;

    fn bitor(self, rhs: ComponentMask) -> ComponentMask {
        ComponentMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ComponentMask {
    fn bitor_assign(&mut self, rhs: ComponentMask) {
        self.0 |= rhs.0;
    }
}

impl From<ComponentKind> for ComponentMask {
    fn from(kind: ComponentKind) -> Self {
        kind.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_bits_are_distinct() {
        let mut all = ComponentMask::EMPTY;
        for kind in ComponentKind::ALL {
            assert!(!all.has(kind));
            all.insert(kind);
        }
        assert_eq!(all.bits(), 0b1_1111);
    }

    #[test]
    fn test_contains_is_superset_check() {
        let mask = ComponentMask::SPRITE | ComponentMask::GRID_MOVER;
        assert!(mask.contains(ComponentMask::SPRITE));
        assert!(mask.contains(ComponentMask::EMPTY));
        assert!(!mask.contains(ComponentMask::SPRITE | ComponentMask::ANIMATION));
    }

    #[test]
    fn test_entity_display() {
        assert_eq!(EntityId::from_raw(7).to_string(), "#7");
    }
}
