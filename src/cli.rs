//! Command-line front end driving the search screen contract.
//!
//! Each subcommand plays one UI event: typing a query, tapping a result,
//! dismissing a recent chip, or opening the screen and reading the strip.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::location::LocationRecord;
use crate::recent::{RecentListManager, RemoveOutcome, SelectOutcome};
use crate::search::{Catalog, SearchUiState, UiStateBroadcaster};
use crate::store::{BlobStore, DeferredBlobStore, FileBlobStore};

#[derive(Debug, Parser)]
#[command(
    name = "locsearch",
    version,
    about = "Search places and keep a list of recent selections"
)]
pub struct Cli {
    /// Config file (default: platform config dir + locsearch/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the persisted recent list
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// JSON catalog file (default: built-in sample catalog)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a query and print the matches
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Select a catalog location by exact name and print its map handoff JSON
    Select { name: String },
    /// Remove a location from the recent list by name
    Remove { name: String },
    /// Print the recent list, most recent first
    Recent,
}

struct Session {
    catalog: Arc<Catalog>,
    recent: RecentListManager,
}

impl Session {
    fn open(cli: &Cli) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let catalog_path = cli.catalog.clone().or(config.search.catalog.clone());
        let catalog = match catalog_path {
            Some(path) => Catalog::from_json_file(&path)?,
            None => Catalog::sample(),
        }
        .with_max_results(config.search.max_results);

        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| config.storage.resolved_data_dir());
        let file_store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(data_dir));
        let store: Arc<dyn BlobStore> = if config.storage.deferred_writes {
            Arc::new(DeferredBlobStore::new(file_store))
        } else {
            file_store
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            recent: RecentListManager::open(store, config.storage.recent_key),
        })
    }
}

/// Execute one CLI invocation.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut session = Session::open(&cli)?;

    let result = match cli.command {
        Command::Search { query } => search(&session, &query),
        Command::Select { name } => select(&mut session, &name),
        Command::Remove { name } => remove(&mut session, &name),
        Command::Recent => {
            print_recent(&session.recent);
            Ok(())
        }
    };
    session.recent.flush();
    result
}

fn search(session: &Session, query: &str) -> anyhow::Result<()> {
    let broadcaster = UiStateBroadcaster::new(session.catalog.clone());
    broadcaster.add_listener(render_search);
    broadcaster.on_query_changed(query);
    Ok(())
}

fn render_search(state: &SearchUiState) {
    if let Some(error) = &state.error {
        println!("Search failed: {error}");
        return;
    }
    for record in &state.matches {
        println!("{}", format_record(record));
    }
    if state.show_empty_indicator {
        println!("No results");
    }
}

fn select(session: &mut Session, name: &str) -> anyhow::Result<()> {
    let record = session
        .catalog
        .find_by_name(name)
        .cloned()
        .ok_or_else(|| anyhow!("Location '{name}' not found in catalog"))?;

    match session.recent.select(record.clone()) {
        SelectOutcome::Inserted => tracing::info!(name = %record.name, "Added to recent list"),
        SelectOutcome::MovedToFront { from } => {
            tracing::info!(name = %record.name, from, "Moved to front of recent list")
        }
        SelectOutcome::AlreadyMostRecent => {}
    }

    let handoff = record
        .to_handoff_json()
        .context("Failed to encode selected location")?;
    println!("{handoff}");
    Ok(())
}

fn remove(session: &mut Session, name: &str) -> anyhow::Result<()> {
    let Some(record) = session.recent.find_by_name(name).cloned() else {
        println!("'{name}' is not in the recent list");
        return Ok(());
    };

    match session.recent.remove(&record) {
        RemoveOutcome::Removed { now_empty: true, .. } => {
            println!("Removed '{name}'; recent list is now empty")
        }
        RemoveOutcome::Removed { .. } => println!("Removed '{name}'"),
        RemoveOutcome::NotFound => println!("'{name}' is not in the recent list"),
    }
    Ok(())
}

fn print_recent(recent: &RecentListManager) {
    if !recent.is_strip_visible() {
        println!("No recent searches");
        return;
    }
    for record in recent.list().entries() {
        println!("{}", format_record(record));
    }
}

fn format_record(record: &LocationRecord) -> String {
    format!("{}\t{}\t{}", record.name, record.category, record.address)
}
