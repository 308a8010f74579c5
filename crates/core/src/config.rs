/// Options that shape pattern generation for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    /// Whether downbeats may draw a muted strum
    pub muting_enabled: bool,
}

impl GenerationConfig {
    pub fn new(muting_enabled: bool) -> Self {
        Self { muting_enabled }
    }

    /// Turn mutes on. There is no way back within a session.
    ///
    /// Returns true if the flag changed.
    pub fn enable_muting(&mut self) -> bool {
        let changed = !self.muting_enabled;
        self.muting_enabled = true;
        changed
    }
}
