use clap::{ArgAction, Args, Parser, Subcommand};
use deckgen::config::{parse_suit_list, ConfigError, DeckConfig, DeckOverrides};
use deckgen::deck::DeckOptions;
use deckgen::rng::DeckRng;
use deckgen::sample::sample_shuffles;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(name = "deckgen")]
#[command(about = "Playing card deck generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build decks and print them (default)
    Build {
        #[command(flatten)]
        deck: DeckArgs,
    },

    /// Shuffle many decks in parallel and report ordering statistics
    Sample {
        /// Number of shuffled decks to build
        #[arg(short, long, default_value = "10000")]
        trials: usize,

        #[command(flatten)]
        deck: DeckArgs,
    },
}

#[derive(Args, Clone, Default)]
struct DeckArgs {
    /// JSON deck configuration file; flags override its values
    #[arg(short, long)]
    config: Option<String>,

    /// Number of decks to build
    #[arg(short, long, allow_negative_numbers = true)]
    decks: Option<i32>,

    /// Number of jokers per deck
    #[arg(short, long)]
    jokers: Option<usize>,

    /// Rank ids to omit, Ace = 1 through King = 13 (e.g. 1,11,12,13)
    #[arg(short, long, value_delimiter = ',')]
    omit: Option<Vec<i64>>,

    /// Shuffle each deck; `--shuffle false` turns off a shuffle set in the config file
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    shuffle: Option<bool>,

    /// Suit order, e.g. hearts,spades,jokers
    #[arg(long)]
    suit_order: Option<String>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,
}

impl DeckArgs {
    /// Load the optional config file and apply command-line overrides
    fn resolve(&self) -> Result<DeckConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => {
                let config = DeckConfig::from_file(path)?;
                eprintln!("✓ Loaded deck configuration from {}", path);
                config
            }
            None => DeckConfig::default(),
        };

        let overrides = DeckOverrides {
            suit_order: self.suit_order.as_deref().map(parse_suit_list).transpose()?,
            shuffle: self.shuffle,
            jokers: self.jokers,
            omit: self.omit.clone(),
            decks: self.decks,
            seed: self.seed,
        };
        config.with_overrides(&overrides)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build { deck }) => print_decks(&deck),
        Some(Commands::Sample { trials, deck }) => run_sample(&deck, trials),
        None => print_decks(&DeckArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn print_decks(args: &DeckArgs) -> Result<(), ConfigError> {
    let config = args.resolve()?;
    let decks = config.build()?;

    for (i, deck) in decks.iter().enumerate() {
        println!("Deck {} ({} cards)", i + 1, deck.len());
        for card in deck {
            println!("  {}", card);
        }
        if i + 1 < decks.len() {
            println!();
        }
    }

    eprintln!("✓ Built {} deck(s)", decks.len());
    Ok(())
}

fn run_sample(args: &DeckArgs, trials: usize) -> Result<(), ConfigError> {
    let config = args.resolve()?;
    let options = DeckOptions::resolve(config.options());
    let base_seed = DeckRng::new(config.seed).seed();

    println!("\n=== Shuffle Sampling ===\n");
    println!("Trials: {}", trials);
    println!("Seed: {}", base_seed);
    println!();

    let progress = ProgressBar::new(trials as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} ({eta})") {
        progress.set_style(style);
    }

    let start = std::time::Instant::now();
    let stats = sample_shuffles(&options, trials, base_seed, &progress);
    progress.finish_and_clear();
    let elapsed = start.elapsed();

    println!("=== Results ===\n");
    println!("Deck size: {}", stats.deck_size);
    println!(
        "Distinct orderings: {} of {} trials",
        stats.distinct_orderings, stats.trials
    );
    println!(
        "Unshuffled top card stayed on top: {:.2}% (uniform: {:.2}%)",
        stats.top_position_rate() * 100.0,
        stats.expected_top_position_rate() * 100.0
    );
    println!(
        "\nCompleted in {:.2?} ({:.0} decks/sec)",
        elapsed,
        trials as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgen::deck::DeckError;

    fn deck_args(argv: &[&str]) -> DeckArgs {
        match Cli::try_parse_from(argv).expect("valid arguments").command {
            Some(Commands::Build { deck }) | Some(Commands::Sample { deck, .. }) => deck,
            None => DeckArgs::default(),
        }
    }

    #[test]
    fn test_shuffle_flag_forms() {
        assert_eq!(deck_args(&["deckgen", "build"]).shuffle, None);
        assert_eq!(deck_args(&["deckgen", "build", "--shuffle"]).shuffle, Some(true));
        assert_eq!(
            deck_args(&["deckgen", "build", "--shuffle", "false"]).shuffle,
            Some(false)
        );
    }

    #[test]
    fn test_flags_resolve_without_config_file() {
        let config = deck_args(&["deckgen", "build", "-d", "2", "-o", "1,13", "--suit-order", "hearts"])
            .resolve()
            .expect("valid flags");
        assert_eq!(config.decks, 2);
        assert_eq!(config.omit, vec![1, 13]);
        assert_eq!(config.suit_order, Some(vec![deckgen::Suit::Hearts]));
    }

    #[test]
    fn test_sample_rejects_zero_decks() {
        let result = deck_args(&["deckgen", "sample", "--decks", "0"]).resolve();
        assert!(matches!(
            result,
            Err(ConfigError::DeckError(DeckError::InvalidDeckCount(0)))
        ));
    }

    #[test]
    fn test_out_of_range_omit_flag_rejected() {
        let result = deck_args(&["deckgen", "build", "--omit", "14"]).resolve();
        assert!(matches!(result, Err(ConfigError::InvalidRank(14))));
    }
}
