// Bar layout and the pattern value type

use crate::symbol::Symbol;

/// Eighth-note subdivisions in one bar of 4/4
pub const SLOTS_PER_BAR: usize = 8;

const LABELS: [&str; SLOTS_PER_BAR] = ["1", "&", "2", "&", "3", "&", "4", "&"];

/// Position of a slot within the bar, 0..7
///
/// Even indices are downbeats ("1".."4"), odd indices are the "&" upbeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// All slots in bar order
    pub const ALL: [SlotIndex; SLOTS_PER_BAR] = [
        SlotIndex(0),
        SlotIndex(1),
        SlotIndex(2),
        SlotIndex(3),
        SlotIndex(4),
        SlotIndex(5),
        SlotIndex(6),
        SlotIndex(7),
    ];

    /// Returns `None` for indices outside the bar
    pub fn new(index: usize) -> Option<Self> {
        (index < SLOTS_PER_BAR).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_downbeat(self) -> bool {
        self.0 % 2 == 0
    }

    /// Beat label printed above the slot
    pub fn label(self) -> &'static str {
        LABELS[self.0]
    }
}

/// A single bar of strums, one symbol per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: [Symbol; SLOTS_PER_BAR],
}

impl Pattern {
    pub fn new(slots: [Symbol; SLOTS_PER_BAR]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Symbol; SLOTS_PER_BAR] {
        &self.slots
    }

    pub fn get(&self, slot: SlotIndex) -> Symbol {
        self.slots[slot.index()]
    }

    /// Iterate over `(slot, symbol)` pairs in bar order
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, Symbol)> + '_ {
        SlotIndex::ALL.into_iter().zip(self.slots.iter().copied())
    }

    pub fn mute_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s == Symbol::Mute).count()
    }

    /// True if every symbol sits on a slot that allows it
    pub fn is_well_formed(&self) -> bool {
        self.iter().all(|(slot, symbol)| symbol.is_valid_at(slot))
    }
}
