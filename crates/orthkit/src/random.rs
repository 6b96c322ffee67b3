//! Uniform random pick from a collection.
//!
//! Callers pass the RNG so draws can be seeded (`StdRng::seed_from_u64`).

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Uniformly chosen element of `src`. Pre: `src` is non-empty.
pub fn rand_peek<'a, T, R: Rng>(rng: &mut R, src: &'a [T]) -> &'a T {
    src.choose(rng)
        .unwrap_or_else(|| panic!("cannot pick from an empty slice"))
}

/// Uniformly chosen element of `src`. Pre: `src` is non-empty.
pub fn rand_peek_set<'a, T, S, R>(rng: &mut R, src: &'a HashSet<T, S>) -> &'a T
where
    S: BuildHasher,
    R: Rng,
{
    src.iter()
        .choose(rng)
        .unwrap_or_else(|| panic!("cannot pick from an empty set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn slice_pick_is_member_and_reaches_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let src = [1, 2, 3, 4];
        let mut hits = [0usize; 4];
        for _ in 0..400 {
            let x = *rand_peek(&mut rng, &src);
            hits[x - 1] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0), "{hits:?}");
    }

    #[test]
    fn set_pick_is_member() {
        let mut rng = StdRng::seed_from_u64(42);
        let src: HashSet<&str> = ["a", "b", "c"].into_iter().collect();
        for _ in 0..20 {
            assert!(src.contains(rand_peek_set(&mut rng, &src)));
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let src: Vec<u32> = (0..100).collect();
        let a: Vec<u32> = {
            let mut rng = StdRng::seed_from_u64(3);
            (0..10).map(|_| *rand_peek(&mut rng, &src)).collect()
        };
        let b: Vec<u32> = {
            let mut rng = StdRng::seed_from_u64(3);
            (0..10).map(|_| *rand_peek(&mut rng, &src)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "empty set")]
    fn empty_set_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let src: HashSet<u8> = HashSet::new();
        rand_peek_set(&mut rng, &src);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn empty_slice_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let src: [u8; 0] = [];
        rand_peek(&mut rng, &src);
    }
}
