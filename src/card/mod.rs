pub mod types;

pub use types::{Card, ParseSuitError, Rank, Suit};
