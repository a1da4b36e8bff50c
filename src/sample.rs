use crate::card::Card;
use crate::deck::{build_deck, DeckOptions};
use crate::rng::DeckRng;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::collections::HashSet;

/// Summary of repeated shuffled builds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShuffleStats {
    pub trials: usize,
    pub deck_size: usize,
    pub distinct_orderings: usize,
    /// Trials whose top card matches the top card of the unshuffled deck
    pub top_position_hits: usize,
}

impl ShuffleStats {
    /// Fraction of trials that kept the unshuffled top card on top
    pub fn top_position_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.top_position_hits as f64 / self.trials as f64
        }
    }

    /// Rate a uniform shuffle would give for the top position
    pub fn expected_top_position_rate(&self) -> f64 {
        if self.deck_size == 0 {
            0.0
        } else {
            1.0 / self.deck_size as f64
        }
    }
}

/// Build `trials` shuffled decks in parallel, each trial seeded with
/// `base_seed + i` so runs are reproducible.
pub fn sample_shuffles(
    options: &DeckOptions,
    trials: usize,
    base_seed: u64,
    progress: &ProgressBar,
) -> ShuffleStats {
    if trials == 0 {
        return ShuffleStats::default();
    }

    let mut ordered = options.clone();
    ordered.shuffle = false;
    let reference = build_deck(&ordered, &mut DeckRng::new(Some(base_seed)));
    let top = reference.cards().first().copied();

    let mut shuffled = options.clone();
    shuffled.shuffle = true;

    let decks: Vec<Vec<Card>> = (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = DeckRng::new(Some(base_seed.wrapping_add(i as u64)));
            let deck = build_deck(&shuffled, &mut rng).into_cards();
            progress.inc(1);
            deck
        })
        .collect();

    let top_position_hits = decks
        .iter()
        .filter(|deck| top.is_some() && deck.first().copied() == top)
        .count();
    let distinct_orderings = decks.iter().collect::<HashSet<_>>().len();

    ShuffleStats {
        trials,
        deck_size: reference.len(),
        distinct_orderings,
        top_position_hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{with_jokers, with_omitted};

    fn hidden() -> ProgressBar {
        ProgressBar::hidden()
    }

    #[test]
    fn test_zero_trials() {
        let stats = sample_shuffles(&DeckOptions::default(), 0, 1, &hidden());
        assert_eq!(stats, ShuffleStats::default());
        assert_eq!(stats.top_position_rate(), 0.0);
    }

    #[test]
    fn test_full_deck_sampling() {
        let stats = sample_shuffles(&DeckOptions::default(), 200, 12345, &hidden());
        assert_eq!(stats.trials, 200);
        assert_eq!(stats.deck_size, 52);
        assert!(stats.distinct_orderings > 1, "Shuffles should not all match");
        assert!(stats.top_position_hits < 50, "Ace of Spades should rarely stay on top");
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let options = DeckOptions::resolve(vec![with_jokers(2)]);
        let a = sample_shuffles(&options, 100, 77, &hidden());
        let b = sample_shuffles(&options, 100, 77, &hidden());
        assert_eq!(a, b);
    }

    #[test]
    fn test_jokers_only_deck_has_one_ordering() {
        let options = DeckOptions::resolve(vec![with_omitted(1..=13), with_jokers(3)]);
        let stats = sample_shuffles(&options, 20, 5, &hidden());
        assert_eq!(stats.deck_size, 3);
        assert_eq!(stats.distinct_orderings, 1);
        assert_eq!(stats.top_position_hits, 20);
    }

    #[test]
    fn test_empty_deck_sampling() {
        let options = DeckOptions::resolve(vec![with_omitted(1..=13)]);
        let stats = sample_shuffles(&options, 10, 5, &hidden());
        assert_eq!(stats.deck_size, 0);
        assert_eq!(stats.top_position_hits, 0);
        assert_eq!(stats.expected_top_position_rate(), 0.0);
    }
}
