use std::{
    any::Any,
    collections::{
        VecDeque,
        hash_map::Entry,
    },
};

use ahash::{
    HashMap,
    HashMapExt,
};
use pokeduel::battle::Battle;
use pokeduel_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over battle RNG.
///
/// Fake values replace the value of the real generator at the given sequence count, which starts
/// at 1 for the first draw.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    /// Inserts fake values for upcoming draws, where count 1 is the next draw.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(relative, value)| (relative + count, value)),
        );
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Returns the battle's random number generator, if it is a [`ControlledRandomNumberGenerator`].
pub fn get_controlled_rng_for_battle(
    battle: &mut Battle,
) -> Option<&mut ControlledRandomNumberGenerator> {
    battle
        .prng_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}

/// A random number generator that returns a fixed sequence of values.
///
/// Panics when the sequence runs out, so tests fail loudly when an operation draws more often than
/// expected.
pub struct SequenceRandomNumberGenerator {
    values: VecDeque<u64>,
}

impl SequenceRandomNumberGenerator {
    pub fn new(values: &[u64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    /// The number of values that have not been drawn yet.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl PseudoRandomNumberGenerator for SequenceRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        0
    }

    fn next(&mut self) -> u64 {
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("random number sequence exhausted"),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
