mod dataset;
mod favorites;
mod models;
mod search;
mod storage;
mod viewer;

use clap::{Parser, Subcommand, ValueEnum};
use dataset::{Dataset, DatasetSource, JsonFileSource};
use favorites::{AddOutcome, Favorites};
use models::PropertyType;
use search::SearchCriteria;
use std::path::PathBuf;
use storage::FileStore;
use tracing::{info, Level};

/// Browse a local property dataset and curate a saved favorites list
#[derive(Parser)]
#[command(name = "estate-viewer")]
struct Cli {
    /// Path to the property dataset JSON file
    #[arg(long, default_value = "data/properties.json")]
    dataset: PathBuf,

    /// Directory holding saved session state
    #[arg(long, default_value = ".estate-viewer")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Property type filter as typed on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeChoice {
    Any,
    House,
    Flat,
}

impl TypeChoice {
    fn into_criterion(self) -> Option<PropertyType> {
        match self {
            TypeChoice::Any => None,
            TypeChoice::House => Some(PropertyType::House),
            TypeChoice::Flat => Some(PropertyType::Flat),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Search the listings and print matching cards
    Search {
        /// Property type to match
        #[arg(long, value_enum)]
        r#type: Option<TypeChoice>,
        /// Minimum price (£)
        #[arg(long)]
        min_price: Option<i64>,
        /// Maximum price (£)
        #[arg(long)]
        max_price: Option<i64>,
        /// Minimum number of bedrooms
        #[arg(long)]
        min_bedrooms: Option<u32>,
        /// Maximum number of bedrooms
        #[arg(long)]
        max_bedrooms: Option<u32>,
        /// Postcode fragment, matched case-insensitively
        #[arg(long)]
        postcode: Option<String>,
    },

    /// Show full details for one listing
    Show { id: String },

    /// Manage the saved favorites list
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
}

#[derive(Subcommand)]
enum FavAction {
    /// Print the saved favorites
    List,
    /// Add a listing to favorites by id
    Add { id: String },
    /// Remove a listing from favorites by id
    Remove { id: String },
    /// Empty the favorites list and delete the saved record
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    info!("🏠 Estate Viewer");

    // The dataset is loaded once and read-only for the rest of the session
    let source = JsonFileSource::new(&cli.dataset);
    info!("Loading dataset from {}...", source.source_name());
    let dataset = Dataset::new(source.load().await?)?;

    let store = FileStore::open(&cli.state_dir)?;
    let mut favorites = Favorites::load(store);

    match cli.command {
        Command::Search {
            r#type,
            min_price,
            max_price,
            min_bedrooms,
            max_bedrooms,
            postcode,
        } => {
            let criteria = SearchCriteria {
                property_type: r#type.and_then(TypeChoice::into_criterion),
                min_price,
                max_price,
                min_bedrooms,
                max_bedrooms,
                postcode,
            };
            let results = search::filter(dataset.properties(), &criteria);
            info!("{} of {} listings match", results.len(), dataset.len());
            println!();

            if results.is_empty() {
                println!("No properties available to display.");
            } else {
                for (i, property) in results.iter().enumerate() {
                    let card = viewer::property_card(property, favorites.contains(&property.id));
                    println!("{}. {}", i + 1, card);
                    println!();
                }
            }
            print!("{}", viewer::favorites_panel(favorites.entries()));
        }

        Command::Show { id } => match dataset.find_by_id(&id) {
            Some(property) => print!("{}", viewer::property_detail(property)),
            None => println!("{}", viewer::not_found(&id)),
        },

        Command::Fav { action } => match action {
            FavAction::List => print!("{}", viewer::favorites_panel(favorites.entries())),

            FavAction::Add { id } => match favorites.add(&dataset, &id)? {
                AddOutcome::Added => {
                    info!("💾 Saved listing {id} to favorites");
                    print!("{}", viewer::favorites_panel(favorites.entries()));
                }
                AddOutcome::AlreadyPresent => {
                    println!("Property {id} is already in favorites.");
                }
                AddOutcome::NotFound => println!("{}", viewer::not_found(&id)),
            },

            FavAction::Remove { id } => {
                if favorites.remove(&id)? {
                    print!("{}", viewer::favorites_panel(favorites.entries()));
                } else {
                    println!("Property {id} is not in favorites.");
                }
            }

            FavAction::Clear => {
                favorites.clear()?;
                info!("Cleared saved favorites");
            }
        },
    }

    Ok(())
}
