use crate::card::Card;
use crate::rng::RandomSource;

/// Random permutation by repeated selection from a shrinking pool.
/// Quadratic in the deck size, which stays under a few hundred cards.
pub fn shuffle_cards<R: RandomSource + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
    let mut pool = cards;
    let mut shuffled = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let index = rng.next_index(pool.len());
        shuffled.push(pool.remove(index));
    }

    shuffled
}
