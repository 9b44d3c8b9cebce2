//! Source of the replacement verbs offered for a generic Objective verb.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks `count` distinct entries from a catalog.
pub trait SuggestionSource {
    fn pick(&mut self, catalog: &'static [&'static str], count: usize) -> Vec<&'static str>;
}

/// Uniform sampling without replacement.
#[derive(Debug, Clone)]
pub struct RandomSuggestions<R> {
    rng: R,
}

impl<R: Rng> RandomSuggestions<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSuggestions<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> SuggestionSource for RandomSuggestions<R> {
    fn pick(&mut self, catalog: &'static [&'static str], count: usize) -> Vec<&'static str> {
        catalog.choose_multiple(&mut self.rng, count).copied().collect()
    }
}

/// Always the first `count` entries, for reproducible output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSuggestions;

impl SuggestionSource for FirstSuggestions {
    fn pick(&mut self, catalog: &'static [&'static str], count: usize) -> Vec<&'static str> {
        catalog.iter().take(count).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::catalog::STRONG_ACTION_VERBS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_picks_are_distinct_catalog_members() {
        let mut source = RandomSuggestions::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let picked = source.pick(STRONG_ACTION_VERBS, 3);
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|verb| STRONG_ACTION_VERBS.contains(verb)));
            assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 3);
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = RandomSuggestions::new(StdRng::seed_from_u64(42)).pick(STRONG_ACTION_VERBS, 3);
        let b = RandomSuggestions::new(StdRng::seed_from_u64(42)).pick(STRONG_ACTION_VERBS, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn first_suggestions_are_deterministic() {
        assert_eq!(
            FirstSuggestions.pick(STRONG_ACTION_VERBS, 3),
            vec!["act as", "analyze", "assess"]
        );
    }
}
