//! A fixed pool of cat facts.

use rand::Rng;
use rand::seq::SliceRandom;

/// Every fact the simulator knows.
pub const CAT_FACTS: [&str; 10] = [
    "Cats sleep for 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats can rotate their ears 180 degrees.",
    "The world's oldest cat lived to be 38 years old.",
    "Cats have five toes on their front paws, but only four on the back.",
    "A cat can jump up to six times its length.",
    "Each cat's nose print is unique, like a human fingerprint.",
    "Cats use their whiskers to detect changes in their surroundings.",
    "The average house cat can run at speeds up to 30 mph.",
    "Cats meow only to communicate with humans.",
];

/// Returns a uniformly chosen fact using the thread-local RNG.
pub fn random_fact() -> &'static str {
    random_fact_with(&mut rand::thread_rng())
}

/// Returns a uniformly chosen fact drawn from `rng`.
pub fn random_fact_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The pool is a non-empty constant.
    CAT_FACTS.choose(rng).copied().unwrap_or(CAT_FACTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fact_comes_from_pool() {
        for _ in 0..50 {
            assert!(CAT_FACTS.contains(&random_fact()));
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_fact_with(&mut a), random_fact_with(&mut b));
        }
    }

    #[test]
    fn selection_covers_the_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(random_fact_with(&mut rng));
        }
        assert_eq!(seen.len(), CAT_FACTS.len());
    }
}
