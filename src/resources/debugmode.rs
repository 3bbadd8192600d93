//! Debug toggle.
//!
//! While enabled, the frame gets a text overlay and every sprite carries
//! outline flags so the render pass draws its cell.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugMode {
    pub enabled: bool,
}

impl DebugMode {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Flip the mode and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            log::info!("Debug mode enabled");
        } else {
            log::info!("Debug mode disabled");
        }
        self.enabled
    }
}
