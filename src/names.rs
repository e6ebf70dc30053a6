//! Random source for fresh names and body shuffling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Characters fresh names are drawn from: ASCII letters, digits, underscore.
pub const NAME_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Per-run random state. Never shared between rewrites.
pub struct NameGenerator {
    rng: StdRng,
    length: usize,
}

impl NameGenerator {
    pub fn new(seed: Option<u64>, length: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, length }
    }

    /// A name of the configured length drawn uniformly from [`NAME_ALPHABET`].
    /// Uniqueness is not guaranteed.
    pub fn fresh_name(&mut self) -> String {
        (0..self.length)
            .map(|_| char::from(NAME_ALPHABET[self.rng.gen_range(0..NAME_ALPHABET.len())]))
            .collect()
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_have_requested_length() {
        let mut names = NameGenerator::new(Some(1), 10);
        for _ in 0..50 {
            assert_eq!(names.fresh_name().len(), 10);
        }
        assert_eq!(NameGenerator::new(Some(1), 4).fresh_name().len(), 4);
    }

    #[test]
    fn names_use_only_the_alphabet() {
        let mut names = NameGenerator::new(Some(7), 10);
        for _ in 0..100 {
            let name = names.fresh_name();
            assert!(
                name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
                "bad name {name}"
            );
        }
    }

    #[test]
    fn alphabet_has_63_symbols() {
        assert_eq!(NAME_ALPHABET.len(), 63);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = NameGenerator::new(Some(42), 10);
        let mut b = NameGenerator::new(Some(42), 10);
        for _ in 0..10 {
            assert_eq!(a.fresh_name(), b.fresh_name());
        }
        let mut xs = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut ys = xs;
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut names = NameGenerator::new(Some(3), 10);
        let mut items: Vec<u32> = (0..20).collect();
        names.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
