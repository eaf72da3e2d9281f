//! Deterministic per-agent RNG for replanning decisions.
//!
//! # Determinism strategy
//!
//! Each (agent, iteration) pair gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT) XOR (iteration * MIXING_CONSTANT²)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  A strategy
//! that replans agents in any order, on any thread, therefore draws the same
//! numbers for the same agent in the same iteration.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
///
/// Intentionally `!Sync`: each worker holds the RNGs of the agents it is
/// replanning.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        Self::for_iteration(global_seed, agent, 0)
    }

    /// Seed for `agent` in replanning iteration `iteration`.
    pub fn for_iteration(global_seed: u64, agent: AgentId, iteration: u32) -> Self {
        let seed = global_seed
            ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT)
            ^ (iteration as u64).wrapping_mul(MIXING_CONSTANT.wrapping_mul(MIXING_CONSTANT));
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform index into a collection of `len` items.
    /// Returns `None` if `len` is zero.
    #[inline]
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
