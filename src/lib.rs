pub mod card;
pub mod config;
pub mod deck;
pub mod rng;
pub mod sample;

pub use card::{Card, Rank, Suit};
pub use deck::{new_decks, new_decks_with_rng, Deck, DeckError, DeckOption, DeckSet};
pub use rng::{DeckRng, RandomSource};
