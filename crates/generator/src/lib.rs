// generator module

pub mod random;

#[cfg(test)]
mod tests;

use log::{debug, warn};
use strum_core::{GenerationConfig, Pattern, SlotIndex, Symbol, SLOTS_PER_BAR};

pub use random::{RandomSource, RngSource, SeededSource};

/// Symbols a downbeat may draw, in weight order
pub const DOWNBEAT_OPTIONS: [Symbol; 3] = [Symbol::Down, Symbol::Pause, Symbol::Mute];

/// Symbols an upbeat may draw
pub const UPBEAT_OPTIONS: [Symbol; 2] = [Symbol::Up, Symbol::Pause];

/// Relative weight of a muted strum when mutes are enabled
pub const MUTE_WEIGHT: f64 = 0.15;

/// Cap on uniform re-draws after a duplicate mute
pub const MAX_MUTE_REDRAWS: usize = 1000;

/// Downbeat weights for the given config, parallel to [`DOWNBEAT_OPTIONS`]
pub fn downbeat_weights(config: &GenerationConfig) -> [f64; 3] {
    let mute = if config.muting_enabled { MUTE_WEIGHT } else { 0.0 };
    [1.0, 1.0, mute]
}

/// Generate one bar of strums
///
/// Downbeats draw from [`DOWNBEAT_OPTIONS`] with [`downbeat_weights`], upbeats
/// draw uniformly from [`UPBEAT_OPTIONS`]. A bar never holds more than one
/// [`Symbol::Mute`]: a second mute draw is replaced by uniform re-draws from
/// the full downbeat set until something else comes up.
pub fn generate(config: &GenerationConfig, rng: &mut impl RandomSource) -> Pattern {
    let weights = downbeat_weights(config);
    let mut slots = [Symbol::Pause; SLOTS_PER_BAR];
    let mut mute_placed = false;

    for slot in SlotIndex::ALL {
        let symbol = if slot.is_downbeat() {
            let drawn = DOWNBEAT_OPTIONS[rng.weighted_index(&weights)];
            let symbol = if drawn == Symbol::Mute && mute_placed {
                redraw_without_mute(rng, slot)
            } else {
                drawn
            };
            if symbol == Symbol::Mute {
                mute_placed = true;
            }
            symbol
        } else {
            UPBEAT_OPTIONS[rng.uniform_index(UPBEAT_OPTIONS.len())]
        };

        debug!("Slot {} ({}) -> {:?}", slot.index(), slot.label(), symbol);
        slots[slot.index()] = symbol;
    }

    let pattern = Pattern::new(slots);
    debug_assert!(pattern.is_well_formed(), "misplaced symbol in {:?}", pattern);
    pattern
}

// Uniform, not weighted: every downbeat option is equally likely here
fn redraw_without_mute(rng: &mut impl RandomSource, slot: SlotIndex) -> Symbol {
    for attempt in 1..=MAX_MUTE_REDRAWS {
        let symbol = DOWNBEAT_OPTIONS[rng.uniform_index(DOWNBEAT_OPTIONS.len())];
        if symbol != Symbol::Mute {
            debug!(
                "Duplicate mute at slot {} replaced by {:?} after {} re-draw(s)",
                slot.index(),
                symbol,
                attempt
            );
            return symbol;
        }
    }

    warn!(
        "Random source kept returning mutes at slot {}; using a pause",
        slot.index()
    );
    Symbol::Pause
}
