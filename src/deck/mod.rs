pub mod builder;
pub mod options;
pub mod shuffle;

pub use builder::{build_deck, build_decks, new_decks, new_decks_with_rng, Deck, DeckError, DeckSet};
pub use options::{
    with_decks, with_jokers, with_omitted, with_shuffle, with_sort, with_suit_order, DeckOption,
    DeckOptions, SuitComparator,
};
pub use shuffle::shuffle_cards;
