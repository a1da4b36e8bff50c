use crate::card::{Card, Rank, Suit};
use crate::deck::options::{DeckOption, DeckOptions};
use crate::deck::shuffle::shuffle_cards;
use crate::rng::{DeckRng, RandomSource};
use log::{debug, warn};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Invalid deck count: {0} (must be at least 1)")]
    InvalidDeckCount(i32),
}

/// An ordered sequence of cards produced by one build
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

/// One or more decks returned by a build call
pub type DeckSet = Vec<Deck>;

impl Deck {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Deck { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Build decks with an entropy-seeded RNG
pub fn new_decks<I>(options: I) -> Result<DeckSet, DeckError>
where
    I: IntoIterator<Item = DeckOption>,
{
    let mut rng = DeckRng::new(None);
    new_decks_with_rng(options, &mut rng)
}

/// Build decks drawing shuffle randomness from `rng`
pub fn new_decks_with_rng<I, R>(options: I, rng: &mut R) -> Result<DeckSet, DeckError>
where
    I: IntoIterator<Item = DeckOption>,
    R: RandomSource + ?Sized,
{
    let options = DeckOptions::resolve(options);
    build_decks(&options, rng)
}

/// Build `options.decks` independent decks from already resolved options
pub fn build_decks<R>(options: &DeckOptions, rng: &mut R) -> Result<DeckSet, DeckError>
where
    R: RandomSource + ?Sized,
{
    if options.decks <= 0 {
        warn!("Rejecting deck request with count {}", options.decks);
        return Err(DeckError::InvalidDeckCount(options.decks));
    }

    Ok((0..options.decks).map(|_| build_deck(options, rng)).collect())
}

/// Assemble a single deck. `options.decks` is ignored.
pub fn build_deck<R>(options: &DeckOptions, rng: &mut R) -> Deck
where
    R: RandomSource + ?Sized,
{
    let suits = suit_sequence(options);
    let ranks = rank_sequence(options);

    let mut cards = Vec::with_capacity(suits.len() * ranks.len());
    for suit in suits {
        if suit == Suit::Jokers {
            cards.push(Card::joker());
            continue;
        }
        cards.extend(ranks.iter().map(|&rank| Card::new(suit, rank)));
    }

    if options.shuffle {
        cards = shuffle_cards(cards, rng);
    }

    debug!(
        "Built deck of {} cards ({} jokers, {} ranks kept, shuffled: {})",
        cards.len(),
        options.jokers,
        ranks.len(),
        options.shuffle
    );

    Deck { cards }
}

/// Standard suits followed by one Jokers entry per joker, then custom sort
fn suit_sequence(options: &DeckOptions) -> Vec<Suit> {
    let mut suits = Suit::STANDARD.to_vec();
    suits.extend(std::iter::repeat(Suit::Jokers).take(options.jokers));

    if let Some(cmp) = &options.sort {
        insertion_sort(&mut suits, |a, b| cmp(a, b));
    }

    suits
}

/// Stable insertion sort. Terminates for any comparator, including ones
/// that are not a total order.
fn insertion_sort<F>(suits: &mut [Suit], cmp: F)
where
    F: Fn(&Suit, &Suit) -> Ordering,
{
    for i in 1..suits.len() {
        let mut j = i;
        while j > 0 && cmp(&suits[j - 1], &suits[j]) == Ordering::Greater {
            suits.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn rank_sequence(options: &DeckOptions) -> Vec<Rank> {
    for id in options.omit.iter().filter(|id| Rank::from_id(**id).is_none()) {
        warn!("Ignoring omission of unknown rank id {}", id);
    }

    Rank::ALL
        .iter()
        .copied()
        .filter(|rank| !options.omit.contains(&(rank.id() as i64)))
        .collect()
}
