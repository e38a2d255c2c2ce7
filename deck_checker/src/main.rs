//! Deck Checker - decklist vs. collection gap reports
//!
//! Prints the report to stdout. Errors are printed as a single message and
//! exit with status 1.

use clap::{Parser, Subcommand};
use deck_checker::cache::MAX_STALENESS_HOURS;
use deck_checker::{
    CollectionSource, Config, DeckChecker, GoogleScriptSource, Result, SheetCsvSource,
    SnapshotStore, SourceConfig, StalenessPolicy, SubstitutionRule,
};
use std::io::Read;
use std::path::PathBuf;

/// Check a TCG Pocket decklist against your collection
#[derive(Parser, Debug)]
#[command(name = "deck_checker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Google Apps Script deployment id (overrides the config file)
    #[arg(long)]
    deployment_id: Option<String>,

    /// Directory for the cached collection snapshot
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Maximum snapshot age in hours before it is refetched
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_STALENESS_HOURS))]
    staleness_hours: Option<i64>,

    /// Also suggest same-set printings with a different number
    #[arg(long, default_value_t = false)]
    loose_substitutions: bool,

    /// Always download a fresh collection snapshot
    #[arg(long, default_value_t = false)]
    refresh: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a decklist with the collection
    Check {
        /// Decklist file, or "-" for stdin (default: built-in deck)
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },
    /// Search the collection by card name
    Search {
        /// Name or part of a name (default: Pikachu)
        term: Option<String>,
    },
}

fn read_deck(path: Option<&PathBuf>) -> Result<String> {
    match path {
        None => Ok(String::new()),
        Some(p) if p.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(p) => Ok(std::fs::read_to_string(p)?),
    }
}

fn load_config(args: &Args) -> Result<(Config, StalenessPolicy)> {
    let path = args.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_create(&path)?;

    if let Some(id) = &args.deployment_id {
        config.google_deployment_id = Some(id.clone());
    }
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(hours) = args.staleness_hours {
        config.staleness_hours = hours;
    }
    if args.loose_substitutions {
        config.substitution_rule = SubstitutionRule::DifferentPrinting;
    }

    let policy = config.staleness_policy(&path)?;
    Ok((config, policy))
}

async fn run_with<S: CollectionSource>(
    source: S,
    args: &Args,
    store: SnapshotStore,
    policy: StalenessPolicy,
    rule: SubstitutionRule,
) -> Result<String> {
    let checker = DeckChecker::new(source, store)
        .with_policy(policy)
        .with_rule(rule);
    let now = chrono::Utc::now();

    match &args.command {
        Command::Check { deck } => {
            let deck_text = read_deck(deck.as_ref())?;
            checker.check_deck(&deck_text, args.refresh, now).await
        }
        Command::Search { term } => {
            checker
                .search_vault(term.as_deref().unwrap_or(""), args.refresh, now)
                .await
        }
    }
}

async fn run(args: &Args) -> Result<String> {
    let (config, policy) = load_config(args)?;
    let store = SnapshotStore::new(config.snapshot_dir());
    let rule = config.substitution_rule;

    log::info!("Snapshot directory: {}", store.dir().display());

    match config.source()? {
        SourceConfig::GoogleScript { deployment_id } => {
            let source = GoogleScriptSource::new(&deployment_id);
            run_with(source, args, store, policy, rule).await
        }
        SourceConfig::SheetCsv { url } => {
            let source = SheetCsvSource::new(url);
            run_with(source, args, store, policy, rule).await
        }
    }
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=deck_checker=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args).await {
        Ok(report) => println!("{report}"),
        Err(e) => {
            log::error!("Deck checker error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
