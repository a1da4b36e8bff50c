use crate::card::Suit;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Comparator used to reorder the suit sequence before assembly
pub type SuitComparator = Arc<dyn Fn(&Suit, &Suit) -> Ordering + Send + Sync>;

/// Resolved build parameters for one deck request
#[derive(Clone)]
pub struct DeckOptions {
    pub sort: Option<SuitComparator>,
    pub shuffle: bool,
    pub jokers: usize,
    /// Omitted rank ids (Ace = 1, King = 13)
    pub omit: HashSet<i64>,
    pub decks: i32,
}

impl Default for DeckOptions {
    fn default() -> Self {
        DeckOptions {
            sort: None,
            shuffle: false,
            jokers: 0,
            omit: HashSet::new(),
            decks: 1,
        }
    }
}

impl fmt::Debug for DeckOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut omit: Vec<_> = self.omit.iter().collect();
        omit.sort();
        f.debug_struct("DeckOptions")
            .field("sort", &self.sort.as_ref().map(|_| "custom"))
            .field("shuffle", &self.shuffle)
            .field("jokers", &self.jokers)
            .field("omit", &omit)
            .field("decks", &self.decks)
            .finish()
    }
}

impl DeckOptions {
    /// Apply options in order over the defaults. Later options replace
    /// earlier ones for the same field.
    pub fn resolve<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut resolved = DeckOptions::default();
        for option in options {
            option.apply(&mut resolved);
        }
        resolved
    }
}

/// A single override of one `DeckOptions` field
#[derive(Clone)]
pub enum DeckOption {
    Sort(SuitComparator),
    Shuffle(bool),
    Jokers(usize),
    Omit(HashSet<i64>),
    Decks(i32),
}

impl DeckOption {
    pub fn apply(self, options: &mut DeckOptions) {
        match self {
            DeckOption::Sort(cmp) => options.sort = Some(cmp),
            DeckOption::Shuffle(shuffle) => options.shuffle = shuffle,
            DeckOption::Jokers(count) => options.jokers = count,
            DeckOption::Omit(ids) => options.omit = ids,
            DeckOption::Decks(count) => options.decks = count,
        }
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckOption::Sort(_) => f.write_str("Sort(..)"),
            DeckOption::Shuffle(v) => f.debug_tuple("Shuffle").field(v).finish(),
            DeckOption::Jokers(v) => f.debug_tuple("Jokers").field(v).finish(),
            DeckOption::Omit(v) => f.debug_tuple("Omit").field(v).finish(),
            DeckOption::Decks(v) => f.debug_tuple("Decks").field(v).finish(),
        }
    }
}

/// Reorder suits with a custom comparator
pub fn with_sort<F>(cmp: F) -> DeckOption
where
    F: Fn(&Suit, &Suit) -> Ordering + Send + Sync + 'static,
{
    DeckOption::Sort(Arc::new(cmp))
}

/// Reorder suits by their position in `order`. Unlisted suits go last.
pub fn with_suit_order(order: Vec<Suit>) -> DeckOption {
    with_sort(move |a, b| position(&order, a).cmp(&position(&order, b)))
}

fn position(order: &[Suit], suit: &Suit) -> usize {
    order.iter().position(|s| s == suit).unwrap_or(order.len())
}

pub fn with_shuffle(shuffle: bool) -> DeckOption {
    DeckOption::Shuffle(shuffle)
}

pub fn with_jokers(count: usize) -> DeckOption {
    DeckOption::Jokers(count)
}

/// Exclude ranks by id. Replaces any earlier omission option.
pub fn with_omitted<I>(ids: I) -> DeckOption
where
    I: IntoIterator<Item = i64>,
{
    DeckOption::Omit(ids.into_iter().collect())
}

pub fn with_decks(count: i32) -> DeckOption {
    DeckOption::Decks(count)
}
