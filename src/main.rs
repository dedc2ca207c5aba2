use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use currency_view::config::Config;
use currency_view::filter::apply_category;
use currency_view::generator::RandomCurrencyGenerator;
use currency_view::logging;
use currency_view::search::search_hint;
use currency_view::storage::JsonFileStorage;
use currency_view::store::{CurrencyViewState, SearchInput};
use currency_view::{strings, Category, CurrencyStore};

#[derive(Debug, Parser)]
#[command(name = "currency-view", version, about = "Browse and edit a persisted currency list")]
struct Cli {
    /// Config file path (TOML). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the visible list.
    List {
        /// all, crypto or fiat.
        #[arg(long)]
        category: Option<Category>,
        /// Case-insensitive text matched against name, symbol and code.
        #[arg(long)]
        search: Option<String>,
    },
    #[command(about = strings::CLEAR_DATA)]
    Clear,
    #[command(about = strings::ADD_RANDOM_CURRENCY)]
    Add {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    #[command(about = strings::RESET_DATA)]
    Reset,
    /// Delete persisted data; the next run starts from the default set.
    Purge,
    /// Print a search suggestion for a category.
    Hint {
        #[arg(long)]
        category: Option<Category>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        logging::init_stderr();
    } else {
        logging::init_tracing();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    tracing::debug!(
        storage = %config.storage.path.display(),
        debounce_ms = config.search.debounce_ms,
        category = %config.view.default_category,
        "Configuration loaded"
    );

    let storage = Arc::new(JsonFileStorage::new(config.storage.path.clone()));
    let store = CurrencyStore::new(storage, Arc::new(RandomCurrencyGenerator::new()));
    store.set_category(config.view.default_category);
    store.initialize().await;

    match cli.command {
        Command::List { category, search } => {
            if let Some(category) = category {
                store.set_category(category);
            }
            if let Some(search) = search {
                let mut input = SearchInput::new(store.clone(), config.debounce());
                input.set_text(search);
                input.settled().await;
            }
        }
        Command::Clear => store.clear(),
        Command::Add { count } => {
            for _ in 0..count {
                store.insert_random();
            }
        }
        Command::Reset => store.reset(),
        Command::Purge => {
            store
                .purge_storage()
                .context("Failed to remove persisted data")?;
            println!("Removed {}", config.storage.path.display());
            return Ok(());
        }
        Command::Hint { category } => {
            let category = category.unwrap_or_else(|| store.category());
            println!("{}", search_hint(&apply_category(&store.raw(), category)));
            return Ok(());
        }
    }

    if !store.flush() {
        tracing::warn!("Persistence writer unavailable; changes were not saved");
    }
    render(&store.snapshot());
    Ok(())
}

fn render(state: &CurrencyViewState) {
    println!("{} ({})", state.category().label(), state.visible().len());
    if state.visible().is_empty() {
        println!("{}", strings::NO_RESULTS);
        let hint = state.hint();
        if !hint.is_empty() {
            println!("{}", hint);
        }
        return;
    }

    for currency in state.visible() {
        println!(
            "{:<6} {:<4} {}",
            currency.symbol,
            currency.code.as_deref().unwrap_or(""),
            currency.name
        );
    }
}
