use serde::Deserialize;
use strum_core::{GenerationConfig, GlyphStyle};

/// Contents of `strummer.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Start the session with muted strums already enabled
    pub muting_enabled: bool,
    /// Fixed seed for reproducible patterns
    pub seed: Option<u64>,
    pub glyphs: GlyphStyle,
}

impl Settings {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.muting_enabled)
    }
}
