use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use starshelf::backend::create_backend;
use starshelf::config::Config;
use starshelf::constants::*;
use starshelf::storage::LocalStorage;
use starshelf::{logger, BookmarkError, BookmarkStore, MetadataFetcher, RepositoryId, RepositoryRecord};

#[derive(Parser)]
#[command(name = "starshelf", version, about = "Bookmark GitHub repositories locally")]
struct Cli {
    /// Use this config file instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a repository from GitHub and bookmark it
    Add { owner: String, repo: String },
    /// List bookmarked repositories
    List,
    /// Edit the local copy of a bookmark; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        stars: Option<u64>,
        #[arg(long)]
        forks: Option<u64>,
    },
    /// Delete a bookmark
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete every bookmark
    Clear {
        #[arg(long, short)]
        yes: bool,
    },
    /// Write a default configuration file
    InitConfig {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)?;
        }
        Commands::Add { owner, repo } => {
            let (config, mut store) = open_store(cli.config.as_deref()).await?;
            let fetcher = MetadataFetcher::new(Arc::from(create_backend(&config.api)?));
            match fetcher.fetch(&owner, &repo).await {
                Ok(record) => {
                    print_record(&record);
                    store.add(record).await?;
                    println!("{}", SUCCESS_REPOSITORY_ADDED);
                }
                Err(BookmarkError::InvalidInput(_)) => bail!(ERROR_MISSING_FIELDS),
                Err(e @ BookmarkError::RemoteLookup { .. }) => bail!("{}: {}", ERROR_REPOSITORY_NOT_FOUND, e),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::List => {
            let (_, store) = open_store(cli.config.as_deref()).await?;
            if store.is_empty() {
                println!("{}", INFO_EMPTY_LIST);
            }
            for record in store.records() {
                print_record(record);
            }
        }
        Commands::Edit {
            id,
            name,
            description,
            stars,
            forks,
        } => {
            let (_, mut store) = open_store(cli.config.as_deref()).await?;
            let id = RepositoryId::parse(&id);
            let Some(current) = store.get(&id) else {
                bail!("{}: {}", ERROR_NO_MATCHING_BOOKMARK, id);
            };

            let mut edit = current.to_edit();
            if let Some(name) = name {
                edit.name = name;
            }
            if let Some(description) = description {
                edit.description = description;
            }
            if let Some(stars) = stars {
                edit.stars = stars;
            }
            if let Some(forks) = forks {
                edit.forks = forks;
            }

            if store.update(&id, &edit).await? {
                println!("{}", SUCCESS_REPOSITORY_UPDATED);
            }
        }
        Commands::Remove { id, yes } => {
            let (_, mut store) = open_store(cli.config.as_deref()).await?;
            let id = RepositoryId::parse(&id);
            if store.get(&id).is_none() {
                bail!("{}: {}", ERROR_NO_MATCHING_BOOKMARK, id);
            }
            if !yes && !confirm(PROMPT_CONFIRM_DELETE)? {
                println!("{}", INFO_CANCELLED);
                return Ok(());
            }
            store.remove(&id).await?;
            println!("{}", SUCCESS_REPOSITORY_DELETED);
        }
        Commands::Clear { yes } => {
            let (_, mut store) = open_store(cli.config.as_deref()).await?;
            if !yes && !confirm(PROMPT_CONFIRM_CLEAR)? {
                println!("{}", INFO_CANCELLED);
                return Ok(());
            }
            store.clear().await?;
            println!("{}", SUCCESS_REPOSITORIES_CLEARED);
        }
    }

    Ok(())
}

/// Load configuration, start logging and open the bookmark store.
async fn open_store(config_path: Option<&Path>) -> Result<(Config, BookmarkStore)> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let database_path = config.storage.resolve_database_path()?;
    let storage = Arc::new(LocalStorage::open(&database_path).await?);
    let store = BookmarkStore::from_config(storage, &config.storage).await?;
    Ok((config, store))
}

fn print_record(record: &RepositoryRecord) {
    println!("[{}] {}", record.id, record.name);
    println!("    Description: {}", record.description);
    println!("    Stars: {} | Forks: {}", record.stars, record.forks);
    println!("    Owner: {} ({})", record.owner.name, record.owner.profile_url);
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
