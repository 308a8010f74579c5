use std::collections::VecDeque;

use strum_core::{GenerationConfig, Pattern, SlotIndex, Symbol};

use crate::{downbeat_weights, generate, RandomSource, RngSource, MAX_MUTE_REDRAWS};

/// Always selects the mute option, whatever the draw
struct AlwaysMute {
    uniform_calls: usize,
}

impl RandomSource for AlwaysMute {
    fn weighted_index(&mut self, _weights: &[f64]) -> usize {
        2
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        self.uniform_calls += 1;
        // Mute on downbeats, Pause on upbeats
        len - 1
    }
}

/// Replays fixed answers, then falls back to index 0
#[derive(Default)]
struct Scripted {
    weighted: VecDeque<usize>,
    uniform: VecDeque<usize>,
    weights_seen: Vec<Vec<f64>>,
}

impl Scripted {
    fn new(weighted: &[usize], uniform: &[usize]) -> Self {
        Self {
            weighted: weighted.iter().copied().collect(),
            uniform: uniform.iter().copied().collect(),
            weights_seen: Vec::new(),
        }
    }
}

impl RandomSource for Scripted {
    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        self.weights_seen.push(weights.to_vec());
        self.weighted.pop_front().unwrap_or(0)
    }

    fn uniform_index(&mut self, _len: usize) -> usize {
        self.uniform.pop_front().unwrap_or(0)
    }
}

fn assert_valid(pattern: &Pattern) {
    assert_eq!(pattern.slots().len(), 8);
    for (slot, symbol) in pattern.iter() {
        if slot.is_downbeat() {
            assert!(
                matches!(symbol, Symbol::Down | Symbol::Pause | Symbol::Mute),
                "downbeat {} got {:?}",
                slot.index(),
                symbol
            );
        } else {
            assert!(
                matches!(symbol, Symbol::Up | Symbol::Pause),
                "upbeat {} got {:?}",
                slot.index(),
                symbol
            );
        }
    }
    assert!(pattern.is_well_formed(), "misplaced symbol in {:?}", pattern);
    assert!(pattern.mute_count() <= 1, "more than one mute in {:?}", pattern);
}

#[test]
fn test_no_mutes_when_disabled() {
    let config = GenerationConfig::new(false);
    let mut rng = RngSource::seeded(2024);

    let mut mutes = 0;
    for _ in 0..10_000 {
        let pattern = generate(&config, &mut rng);
        assert_valid(&pattern);
        mutes += pattern.mute_count();
    }
    assert_eq!(mutes, 0);
}

#[test]
fn test_patterns_valid_with_mutes_enabled() {
    let config = GenerationConfig::new(true);
    let mut rng = RngSource::seeded(99);

    let mut bars_with_mute = 0;
    for _ in 0..10_000 {
        let pattern = generate(&config, &mut rng);
        assert_valid(&pattern);
        if pattern.mute_count() == 1 {
            bars_with_mute += 1;
        }
    }
    // Roughly a quarter of bars should carry a mute at weight 0.15
    assert!(bars_with_mute > 1_000, "only {} bars had a mute", bars_with_mute);
}

#[test]
fn test_adversarial_source_keeps_single_mute() {
    let config = GenerationConfig::new(true);
    let mut rng = AlwaysMute { uniform_calls: 0 };

    let pattern = generate(&config, &mut rng);

    assert_valid(&pattern);
    assert_eq!(pattern.mute_count(), 1);
    // The first downbeat keeps its mute, the rest exhaust the re-draw cap
    assert_eq!(pattern.get(SlotIndex::new(0).unwrap()), Symbol::Mute);
    for idx in [2, 4, 6] {
        assert_eq!(pattern.get(SlotIndex::new(idx).unwrap()), Symbol::Pause);
    }
    assert_eq!(rng.uniform_calls, 4 + 3 * MAX_MUTE_REDRAWS);
}

#[test]
fn test_redraw_uses_uniform_choice() {
    let config = GenerationConfig::new(true);
    // Downbeats: Mute, Mute, Down, Pause. The second mute re-draws Mute, Mute, Down.
    let mut rng = Scripted::new(&[2, 2, 0, 1], &[0, 2, 2, 0, 1, 0, 0]);

    let pattern = generate(&config, &mut rng);

    use Symbol::*;
    assert_eq!(
        pattern.slots(),
        &[Mute, Up, Down, Pause, Down, Up, Pause, Up]
    );
    // Weighted draws only happen once per downbeat
    assert_eq!(rng.weights_seen.len(), 4);
}

#[test]
fn test_first_mute_is_never_suppressed() {
    let config = GenerationConfig::new(true);
    // Only the last downbeat draws a mute
    let mut rng = Scripted::new(&[0, 1, 0, 2], &[]);

    let pattern = generate(&config, &mut rng);

    assert_eq!(pattern.get(SlotIndex::new(6).unwrap()), Symbol::Mute);
    assert_eq!(pattern.mute_count(), 1);
}

#[test]
fn test_weights_follow_config() {
    assert_eq!(downbeat_weights(&GenerationConfig::new(false)), [1.0, 1.0, 0.0]);
    assert_eq!(downbeat_weights(&GenerationConfig::new(true)), [1.0, 1.0, 0.15]);

    let mut rng = Scripted::new(&[], &[]);
    generate(&GenerationConfig::new(true), &mut rng);
    assert!(rng.weights_seen.iter().all(|w| w == &[1.0, 1.0, 0.15]));
}

#[test]
fn test_same_seed_same_pattern() {
    let config = GenerationConfig::new(true);
    let mut a = RngSource::seeded(5);
    let mut b = RngSource::seeded(5);
    for _ in 0..50 {
        assert_eq!(generate(&config, &mut a), generate(&config, &mut b));
    }
}
