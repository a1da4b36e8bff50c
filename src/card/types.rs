use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card suits, plus the synthetic Jokers suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
    Jokers,
}

impl Suit {
    /// Standard suit order used when assembling a deck
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
            Suit::Jokers => "Jokers",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown suit: {0}")]
pub struct ParseSuitError(pub String);

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spades" | "spade" => Ok(Suit::Spades),
            "diamonds" | "diamond" => Ok(Suit::Diamonds),
            "clubs" | "club" => Ok(Suit::Clubs),
            "hearts" | "heart" => Ok(Suit::Hearts),
            "jokers" | "joker" => Ok(Suit::Jokers),
            _ => Err(ParseSuitError(s.to_string())),
        }
    }
}

/// The 13 standard card values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Fixed rank order, Ace through King
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Id used to reference the rank in omission lists (Ace = 1, King = 13)
    pub fn id(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn from_id(id: i64) -> Option<Rank> {
        if (1..=13).contains(&id) {
            Some(Rank::ALL[(id - 1) as usize])
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card. Jokers carry no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Option<Rank>,
}

impl Card {
    /// Build a card; a Jokers suit always yields a rankless Joker
    pub fn new(suit: Suit, rank: Rank) -> Self {
        match suit {
            Suit::Jokers => Card::joker(),
            _ => Card {
                suit,
                rank: Some(rank),
            },
        }
    }

    pub fn joker() -> Self {
        Card {
            suit: Suit::Jokers,
            rank: None,
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Jokers
    }

    /// Human-readable name, e.g. "Ace Of Spades" or "Jokers"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => write!(f, "{} Of {}", rank, self.suit),
            None => write!(f, "{}", self.suit),
        }
    }
}
