//! Optional per-entity behavior hacks.
//!
//! An [`InputHook`] links an entity to a controller slot in the
//! [`InputSources`](crate::resources::input::InputSources) registry and
//! carries small behavior toggles such as screen wrap.

/// Index of a controller in the input registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerSlot(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputHook {
    /// Wrap around the playfield edges instead of leaving it.
    pub wrap: bool,
    /// Controller driving this entity. `None` means no one is at the wheel.
    pub controller: Option<ControllerSlot>,
    /// Fire button state captured this tick.
    pub firing: bool,
}

impl InputHook {
    pub fn controlled_by(slot: usize) -> Self {
        Self {
            controller: Some(ControllerSlot(slot)),
            ..Self::default()
        }
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}
