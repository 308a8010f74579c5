// Core types shared by every Strummer crate

pub mod config;
pub mod events;
pub mod pattern;
pub mod symbol;

pub use config::GenerationConfig;
pub use events::{EventBus, SharedEventBus, StrumEvent};
pub use pattern::{Pattern, SlotIndex, SLOTS_PER_BAR};
pub use symbol::{GlyphStyle, Symbol};
