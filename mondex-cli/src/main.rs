//! mondex CLI
//!
//! Command-line surface for browsing the pokemon catalog and curating the
//! persisted personal collection.

mod config;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use mondex_api::{ApiError, CatalogGateway, PokeApiClient, Pokemon};
use mondex_browse::BrowseSession;
use mondex_collection::{Collection, CollectionStore};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "mondex")]
#[command(about = "Browse the pokemon catalog and curate a collection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog, loading pages the way an infinite scroll would
    Browse {
        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: u32,

        /// Entries per page (overrides config)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Fetch one pokemon by name and add it to the collection
    Add { name: String },

    /// List the collection in curated order
    List,

    /// Move a collection entry to a new position
    Move { from: usize, to: usize },

    /// Remove the collection entry at an index
    Remove { index: usize },

    /// Remove every collection entry
    Clear,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let settings = config::load();

    if let Err(e) = run(cli.command, settings).await {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}

async fn run(command: Commands, settings: Settings) -> Result<(), ApiError> {
    match command {
        Commands::Browse { pages, page_size } => browse(&settings, pages, page_size).await,
        Commands::Add { name } => add(&settings, &name).await,
        Commands::List => {
            let collection = open_collection(&settings);
            if collection.is_empty() {
                println!("collection is empty; try `mondex add <name>`");
            }
            for (index, item) in collection.items().iter().enumerate() {
                print_row(index, item);
            }
            Ok(())
        }
        Commands::Move { from, to } => {
            let mut collection = open_collection(&settings);
            if collection.move_item(from, to) {
                println!("moved entry {from} to position {to}");
            } else {
                println!("nothing to move (indices out of range or equal)");
            }
            collection.sync().await;
            Ok(())
        }
        Commands::Remove { index } => {
            let mut collection = open_collection(&settings);
            match collection.remove_at(index) {
                Some(item) => println!("removed {}", item.name.bold()),
                None => println!("no entry at index {index}"),
            }
            collection.sync().await;
            Ok(())
        }
        Commands::Clear => {
            let mut collection = open_collection(&settings);
            let count = collection.len();
            collection.clear();
            collection.sync().await;
            println!("removed {count} entries");
            Ok(())
        }
    }
}

fn client(settings: &Settings) -> Result<PokeApiClient, ApiError> {
    match &settings.base_url {
        Some(url) => PokeApiClient::with_base_url(url),
        None => PokeApiClient::new(),
    }
}

fn open_collection(settings: &Settings) -> Collection {
    Collection::open(CollectionStore::at(&settings.store_path))
}

async fn browse(settings: &Settings, pages: u32, page_size: Option<u32>) -> Result<(), ApiError> {
    let page_size = page_size.unwrap_or(settings.page_size);
    let mut session = BrowseSession::new(client(settings)?, page_size);

    for _ in 0..pages {
        if !session.has_more() {
            break;
        }
        session.sentinel_visible();
        session.settle().await;
        session.sentinel_hidden();

        if let Some(e) = session.last_error() {
            eprintln!("{} page load failed: {e}", "warning:".yellow());
            break;
        }
    }

    for item in session.display() {
        print_card(item);
    }
    let pending = session.pending_count();
    if pending > 0 {
        println!("{}", format!("({pending} entries did not resolve)").dimmed());
    }
    if session.has_more() {
        println!("{}", "more available; raise --pages to keep scrolling".dimmed());
    }
    Ok(())
}

async fn add(settings: &Settings, name: &str) -> Result<(), ApiError> {
    let item = client(settings)?.fetch_detail(name).await?;
    let mut collection = open_collection(settings);

    if collection.add(item) {
        println!("added {} to the collection", name.bold());
    } else {
        println!("{} is already in the collection", name.bold());
    }
    collection.sync().await;
    Ok(())
}

fn print_card(item: &Pokemon) {
    let stat = |name: &str| {
        item.base_stat(name)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    println!("{} {}", format!("#{:<4}", item.id).dimmed(), item.name.bold());
    let types = item.type_names();
    if !types.is_empty() {
        println!("      {}", types.join(" / "));
    }
    println!(
        "      hp {}  atk {}  def {}",
        stat("hp"),
        stat("attack"),
        stat("defense")
    );
    match item.image_url() {
        Some(url) => println!("      {}", url.dimmed()),
        None => println!("      {}", "(no image)".dimmed()),
    }
}

fn print_row(index: usize, item: &Pokemon) {
    let types = item.type_names();
    let suffix = if types.is_empty() {
        String::new()
    } else {
        format!("  [{}]", types.join(", "))
    };
    println!(
        "{:>3}. {} {}{}",
        index,
        item.name.bold(),
        format!("#{}", item.id).dimmed(),
        suffix
    );
}
