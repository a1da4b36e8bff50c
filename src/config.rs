use crate::card::{Rank, Suit};
use crate::deck::{
    new_decks_with_rng, with_decks, with_jokers, with_omitted, with_shuffle, with_suit_order,
    DeckError, DeckOption, DeckSet,
};
use crate::rng::DeckRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
    #[error("Invalid rank id: {0} (expected 1-13)")]
    InvalidRank(i64),
    #[error("Deck error: {0}")]
    DeckError(#[from] DeckError),
}

/// Deck request loaded from a JSON file. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub suit_order: Option<Vec<Suit>>,
    pub shuffle: bool,
    pub jokers: usize,
    pub omit: Vec<i64>,
    pub decks: i32,
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            suit_order: None,
            shuffle: false,
            jokers: 0,
            omit: Vec::new(),
            decks: 1,
            seed: None,
        }
    }
}

impl DeckConfig {
    /// Load a deck request from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject omission ids that name no rank and deck counts below one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = self.omit.iter().find(|id| Rank::from_id(**id).is_none()) {
            return Err(ConfigError::InvalidRank(*id));
        }
        if self.decks <= 0 {
            return Err(DeckError::InvalidDeckCount(self.decks).into());
        }
        Ok(())
    }

    /// Replace every field set in `overrides`, keep the rest, then validate
    pub fn with_overrides(mut self, overrides: &DeckOverrides) -> Result<Self, ConfigError> {
        if let Some(decks) = overrides.decks {
            self.decks = decks;
        }
        if let Some(jokers) = overrides.jokers {
            self.jokers = jokers;
        }
        if let Some(omit) = &overrides.omit {
            self.omit = omit.clone();
        }
        if let Some(shuffle) = overrides.shuffle {
            self.shuffle = shuffle;
        }
        if let Some(order) = &overrides.suit_order {
            self.suit_order = Some(order.clone());
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }

        self.validate()?;
        Ok(self)
    }

    /// Convert to build options, one per field
    pub fn options(&self) -> Vec<DeckOption> {
        let mut options = vec![
            with_shuffle(self.shuffle),
            with_jokers(self.jokers),
            with_omitted(self.omit.iter().copied()),
            with_decks(self.decks),
        ];
        if let Some(order) = &self.suit_order {
            options.push(with_suit_order(order.clone()));
        }
        options
    }

    /// Build the requested decks, seeding the RNG from `seed` when present
    pub fn build(&self) -> Result<DeckSet, ConfigError> {
        let mut rng = DeckRng::new(self.seed);
        Ok(new_decks_with_rng(self.options(), &mut rng)?)
    }
}

/// Field values that take precedence over a loaded `DeckConfig`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckOverrides {
    pub suit_order: Option<Vec<Suit>>,
    pub shuffle: Option<bool>,
    pub jokers: Option<usize>,
    pub omit: Option<Vec<i64>>,
    pub decks: Option<i32>,
    pub seed: Option<u64>,
}

/// Parse a comma-separated suit list such as "hearts,spades"
pub fn parse_suit_list(list: &str) -> Result<Vec<Suit>, ConfigError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Suit>().map_err(|e| ConfigError::InvalidSuit(e.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckOptions;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DeckConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.decks, 1);
    }

    #[test]
    fn test_full_config() {
        let config = DeckConfig::from_json(
            r#"{ "suit_order": ["hearts", "spades"], "shuffle": true, "jokers": 2,
                 "omit": [1, 13], "decks": 3, "seed": 42 }"#,
        )
        .expect("valid config");

        assert_eq!(config.suit_order, Some(vec![Suit::Hearts, Suit::Spades]));
        assert_eq!(config.seed, Some(42));

        let options = DeckOptions::resolve(config.options());
        assert!(options.shuffle);
        assert!(options.sort.is_some());
        assert_eq!(options.jokers, 2);
        assert_eq!(options.decks, 3);
        assert_eq!(options.omit.len(), 2);
    }

    #[test]
    fn test_config_builds_decks() {
        let config = DeckConfig::from_json(r#"{ "suit_order": ["clubs"], "omit": [2, 3], "decks": 2 }"#)
            .expect("valid config");
        let mut rng = DeckRng::new(Some(1));
        let decks = new_decks_with_rng(config.options(), &mut rng).expect("valid decks");
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].len(), 44);
        assert_eq!(decks[0].cards()[0].suit(), Suit::Clubs);
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let config = DeckConfig::from_json(r#"{ "shuffle": true, "decks": 2, "seed": 9 }"#)
            .expect("valid config");
        assert_eq!(config.build().expect("valid decks"), config.build().expect("valid decks"));
    }

    #[test]
    fn test_zero_decks_rejected_on_load() {
        let result = DeckConfig::from_json(r#"{ "decks": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::DeckError(DeckError::InvalidDeckCount(0)))
        ));
    }

    #[test]
    fn test_zero_decks_rejected_on_build() {
        let config = DeckConfig {
            decks: -3,
            ..DeckConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ConfigError::DeckError(DeckError::InvalidDeckCount(-3)))
        ));
    }

    fn file_config() -> DeckConfig {
        DeckConfig::from_json(
            r#"{ "suit_order": ["hearts"], "shuffle": true, "jokers": 2,
                 "omit": [1, 2], "decks": 3, "seed": 7 }"#,
        )
        .expect("valid config")
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let overrides = DeckOverrides {
            decks: Some(5),
            omit: Some(vec![13]),
            suit_order: Some(vec![Suit::Clubs, Suit::Spades]),
            ..DeckOverrides::default()
        };
        let config = file_config().with_overrides(&overrides).expect("valid overrides");

        assert_eq!(config.decks, 5);
        assert_eq!(config.omit, vec![13]);
        assert_eq!(config.suit_order, Some(vec![Suit::Clubs, Suit::Spades]));
    }

    #[test]
    fn test_absent_overrides_keep_file_values() {
        let config = file_config()
            .with_overrides(&DeckOverrides::default())
            .expect("valid overrides");
        assert_eq!(config, file_config());

        let config = file_config()
            .with_overrides(&DeckOverrides {
                jokers: Some(0),
                ..DeckOverrides::default()
            })
            .expect("valid overrides");
        assert_eq!(config.jokers, 0);
        assert_eq!(config.decks, 3);
        assert_eq!(config.omit, vec![1, 2]);
        assert!(config.shuffle);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_shuffle_override_can_disable_file_shuffle() {
        let config = file_config()
            .with_overrides(&DeckOverrides {
                shuffle: Some(false),
                ..DeckOverrides::default()
            })
            .expect("valid overrides");
        assert!(!config.shuffle);
    }

    #[test]
    fn test_invalid_override_rank_rejected() {
        let result = file_config().with_overrides(&DeckOverrides {
            omit: Some(vec![14]),
            ..DeckOverrides::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidRank(14))));
    }

    #[test]
    fn test_invalid_override_deck_count_rejected() {
        let result = DeckConfig::default().with_overrides(&DeckOverrides {
            decks: Some(0),
            ..DeckOverrides::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::DeckError(DeckError::InvalidDeckCount(0)))
        ));
    }

    #[test]
    fn test_invalid_rank_rejected() {
        let result = DeckConfig::from_json(r#"{ "omit": [1, 14] }"#);
        assert!(matches!(result, Err(ConfigError::InvalidRank(14))));
    }

    #[test]
    fn test_invalid_suit_rejected() {
        let result = DeckConfig::from_json(r#"{ "suit_order": ["stars"] }"#);
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DeckConfig::from_file("does-not-exist.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_parse_suit_list() {
        assert_eq!(
            parse_suit_list("hearts, Spades,joker").expect("valid list"),
            vec![Suit::Hearts, Suit::Spades, Suit::Jokers]
        );
        assert!(matches!(parse_suit_list("hearts,cups"), Err(ConfigError::InvalidSuit(_))));
    }
}
