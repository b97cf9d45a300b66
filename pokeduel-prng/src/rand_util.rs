use crate::PseudoRandomNumberGenerator;

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = prng.range(0, slice.len() as u64);
    slice.get(index as usize)
}

/// Picks an index with probability proportional to its weight.
///
/// Returns [`None`] if all weights are zero. Zero-weight entries are never picked.
pub fn weighted_index(prng: &mut dyn PseudoRandomNumberGenerator, weights: &[u64]) -> Option<usize> {
    let total = weights.iter().sum::<u64>();
    if total == 0 {
        return None;
    }
    let mut roll = prng.range(0, total);
    for (index, weight) in weights.iter().enumerate() {
        if roll < *weight {
            return Some(index);
        }
        roll -= weight;
    }
    None
}

#[cfg(test)]
mod rand_util_test {
    use std::any::Any;

    use crate::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
        rand_util,
    };

    struct FixedValues(Vec<u64>);

    impl PseudoRandomNumberGenerator for FixedValues {
        fn initial_seed(&self) -> u64 {
            0
        }

        fn next(&mut self) -> u64 {
            self.0.remove(0)
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn sample_slice_fails_empty_slice() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(987654321));
        let items: Vec<&str> = Vec::new();
        assert_eq!(rand_util::sample_slice(&mut prng, &items), None);
    }

    #[test]
    fn samples_only_element() {
        let mut prng = FixedValues(Vec::new());
        assert_eq!(rand_util::sample_slice(&mut prng, &["a"]), Some(&"a"));
    }

    #[test]
    fn samples_element_by_index() {
        let mut prng = FixedValues(vec![2, 5]);
        let items = ["a", "b", "c", "d"];
        assert_eq!(rand_util::sample_slice(&mut prng, &items), Some(&"c"));
        assert_eq!(rand_util::sample_slice(&mut prng, &items), Some(&"b"));
    }

    #[test]
    fn weighted_index_respects_weights() {
        let mut prng = FixedValues(vec![0, 49, 50, 69, 70, 99]);
        let weights = [50, 20, 30];
        let got = (0..6)
            .map(|_| rand_util::weighted_index(&mut prng, &weights))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![Some(0), Some(0), Some(1), Some(1), Some(2), Some(2)]
        );
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(3));
        for _ in 0..100 {
            assert_ne!(rand_util::weighted_index(&mut prng, &[5, 0, 5]), Some(1));
        }
    }

    #[test]
    fn weighted_index_fails_all_zero() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(3));
        assert_eq!(rand_util::weighted_index(&mut prng, &[0, 0, 0]), None);
    }
}
