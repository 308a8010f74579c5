use serde::Deserialize;

use crate::pattern::SlotIndex;

/// One strum in a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Down strum, downbeats only
    Down,
    /// Up strum, upbeats only
    Up,
    /// No strum, valid anywhere
    Pause,
    /// Muted (percussive) strum, downbeats only
    Mute,
}

impl Symbol {
    /// Whether this symbol may appear at the given slot
    pub fn is_valid_at(self, slot: SlotIndex) -> bool {
        match self {
            Symbol::Pause => true,
            Symbol::Down | Symbol::Mute => slot.is_downbeat(),
            Symbol::Up => !slot.is_downbeat(),
        }
    }
}

/// Which glyph table the renderer should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Arrow emoji, as most terminals show them
    #[default]
    Emoji,
    /// Plain characters for terminals without emoji fonts
    Ascii,
}
