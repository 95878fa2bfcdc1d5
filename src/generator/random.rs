use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

/// Source of every random draw made while generating records.
///
/// Generators only ever ask for an integer in an inclusive range or for an
/// index into a non-empty collection, so a scripted sequence of integers is
/// enough to reproduce a run exactly.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty collection");
        let high = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.next_in_range(0, high) as usize
    }

    /// Fair coin.
    fn next_bool(&mut self) -> bool {
        self.next_in_range(0, 1) == 1
    }
}

/// [`RandomSource`] backed by an ISAAC generator.
///
/// ISAAC keeps its output stable across `rand` releases, so a `--seed`
/// replays the same records on any build.
#[derive(Clone, Debug)]
pub struct RngSource {
    rng: IsaacRng,
}

impl RngSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: IsaacRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: IsaacRng::from_entropy(),
        }
    }
}

impl RandomSource for RngSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed list of draws, in order.
///
/// Each value is returned as-is, so the caller must script values inside the
/// range the generator asks for. Running past the end of the script or
/// scripting an out-of-range value panics: both mean the script no longer
/// matches the generator's draw order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("scripted source exhausted (wanted {low}..={high})"));
        assert!(
            (low..=high).contains(&value),
            "scripted draw {value} outside {low}..={high}"
        );
        value
    }
}
