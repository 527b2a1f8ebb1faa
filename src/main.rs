use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use destinations::logging::init_logging;
use destinations::{CatalogConfig, CatalogLoader, Destination, DestinationCatalog};

#[derive(Parser)]
#[command(name = "destinations")]
#[command(about = "Browse and validate the travel destination catalog")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON payload to use instead of the embedded destinations
    #[arg(long, global = true)]
    data: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Print results as pretty JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every destination in catalog order
    List,
    /// Show one destination
    Get { id: String },
    /// Destinations in the same category, sorted by name
    Related { id: String },
    /// Destinations for the given ids, in the order given
    Ids {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Destinations in a country, in catalog order
    Country {
        country: String,
        /// Leave this destination out
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Destinations in a category, sorted by name
    Category { category: String },
    /// Distinct categories with destination counts
    Categories,
    /// Check the catalog for duplicate ids
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = CatalogConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(data) = cli.data {
        config.catalog.data_path = Some(data);
    }
    config.validate()?;

    init_logging(&config.logging);
    debug!("Using configuration: {:?}", config);

    let catalog = CatalogLoader::load(&config).context("Failed to load destinations")?;
    let json = cli.json;

    match cli.command {
        Commands::List => print_list(catalog.all().iter(), json)?,
        Commands::Get { id } => match catalog.get_by_id(&id) {
            Some(destination) => println!("{}", serde_json::to_string_pretty(destination)?),
            None => {
                eprintln!("Destination not found: {id}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Related { id } => print_list(catalog.related(&id), json)?,
        Commands::Ids { ids } => print_list(catalog.by_ids(&ids), json)?,
        Commands::Country { country, exclude } => print_list(
            catalog.by_country(Some(country.as_str()), exclude.as_deref()),
            json,
        )?,
        Commands::Category { category } => {
            print_list(catalog.by_category(Some(category.as_str())), json)?;
        }
        Commands::Categories => print_categories(&catalog),
        Commands::Validate => return Ok(validate(&catalog)),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_list<'a>(destinations: impl IntoIterator<Item = &'a Destination>, json: bool) -> Result<()> {
    let destinations: Vec<&Destination> = destinations.into_iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&destinations)?);
        return Ok(());
    }

    for destination in destinations {
        println!(
            "{:<20} {:<24} {:<12} {}",
            destination.id,
            destination.name,
            destination.category,
            destination.country().unwrap_or("-")
        );
    }
    Ok(())
}

fn print_categories(catalog: &DestinationCatalog) {
    for category in catalog.categories() {
        let count = catalog.by_category(Some(category)).len();
        println!("{category:<20} {count}");
    }
}

fn validate(catalog: &DestinationCatalog) -> ExitCode {
    let duplicates = catalog.duplicate_ids();
    if duplicates.is_empty() {
        println!("OK: {} destinations, all ids unique", catalog.len());
        ExitCode::SUCCESS
    } else {
        for id in duplicates {
            println!("Duplicate id: {id}");
        }
        ExitCode::FAILURE
    }
}
