pub mod rand_util;

use std::any::Any;

/// A source of uniformly distributed integers for a duel.
///
/// A battle draws from exactly one generator, in a fixed order: stat jitter while Mons are
/// created, then a critical roll and a damage roll per attack. Bots own separate generators.
/// Replaying the same sequence of values therefore replays the same battle.
///
/// Implementors only provide raw values through [`PseudoRandomNumberGenerator::next`]. Every
/// bounded draw reduces a single raw value modulo the size of its range, so a draw always consumes
/// exactly one value.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// The seed this generator started from, for replaying a battle later.
    fn initial_seed(&self) -> u64;

    /// Produces the next raw value.
    fn next(&mut self) -> u64;

    /// Downcasting hook, so tests can reach a concrete generator behind a battle.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Draws an integer in `[min, max)`.
    ///
    /// `max` must be greater than `min`.
    fn range(&mut self, min: u64, max: u64) -> u64 {
        self.next() % (max - min) + min
    }

    /// Draws an integer in `[min, max]`.
    ///
    /// Damage rolls use `[217, 255]`, gender draws `[1, 99]`, and stat jitter `[80, 120]`.
    fn range_inclusive(&mut self, min: u64, max: u64) -> u64 {
        self.range(min, max + 1)
    }

    /// Returns true with probability `numerator / outcomes`.
    ///
    /// The draw succeeds when the raw value modulo `outcomes` lands below `numerator`.
    fn chance(&mut self, numerator: u64, outcomes: u64) -> bool {
        self.next() % outcomes < numerator
    }
}

/// Multiplier of the linear congruential step.
const LCG_MULTIPLIER: u64 = 0x5D588B656C078965;
/// Increment of the linear congruential step.
const LCG_INCREMENT: u64 = 0x269EC3;

/// A seedable generator backed by a 64-bit linear congruential generator.
///
/// Only the upper half of the state is handed out, since the low bits of an LCG cycle quickly.
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    state: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a generator from a seed, or from a fresh random seed when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let initial_seed = seed.unwrap_or_else(rand::random);
        Self {
            initial_seed,
            state: initial_seed,
        }
    }

    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.step() >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
