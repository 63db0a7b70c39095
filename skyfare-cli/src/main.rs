use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skyfare_cli::offers::ListOptions;
use skyfare_cli::{airports, init_tracing, offers, AppState};
use skyfare_offer::{DepartureWindow, SortKey, SortOrder, StopsFilter};
use skyfare_store::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyfare", author, version, about, long_about = None)]
struct Cli {
    /// Directory holding default.toml, {RUN_MODE}.toml and local.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Airport CSV file, overrides airports.data_path
    #[arg(long)]
    airports: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up airports
    #[command(subcommand)]
    Airports(AirportCommands),
    /// Filter and sort flight offers
    #[command(subcommand)]
    Offers(OfferCommands),
}

#[derive(Subcommand)]
enum AirportCommands {
    /// Ranked search by code, city, name or country
    Search {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Popular destinations
    Popular {
        #[arg(long)]
        json: bool,
    },
    /// Exact IATA code lookup
    Code {
        code: String,
        #[arg(long)]
        json: bool,
    },
    /// All airports serving a city
    City {
        city: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum OfferCommands {
    /// Print the visible flight list for an offers JSON file
    List {
        file: PathBuf,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        /// all, nonstop, 1stop or 2+stops
        #[arg(long, default_value = "all")]
        stops: StopsFilter,
        /// Airline code to keep; repeat for several
        #[arg(long = "airline")]
        airlines: Vec<String>,
        /// all, morning, afternoon, evening or night
        #[arg(long, default_value = "all")]
        departure: DepartureWindow,
        /// price, duration, departure or arrival
        #[arg(long, default_value = "price")]
        sort_by: SortKey,
        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(&cli.config_dir)
        .with_context(|| format!("Failed to load config from {}", cli.config_dir.display()))?;
    init_tracing(&config.logging.filter);
    tracing::debug!(config_dir = %cli.config_dir.display(), "Configuration loaded");

    let state = AppState::new(config, cli.airports);

    let output = match cli.command {
        Commands::Airports(command) => match command {
            AirportCommands::Search { query, limit, json } => airports::search(&state, &query, limit, json).await?,
            AirportCommands::Popular { json } => airports::popular(&state, json).await?,
            AirportCommands::Code { code, json } => airports::by_code(&state, &code, json).await?,
            AirportCommands::City { city, json } => airports::by_city(&state, &city, json).await?,
        },
        Commands::Offers(OfferCommands::List {
            file,
            min_price,
            max_price,
            stops,
            airlines,
            departure,
            sort_by,
            order,
            json,
        }) => {
            let options = ListOptions {
                min_price,
                max_price,
                stops,
                airlines,
                departure,
                sort_by,
                order,
                json,
            };
            offers::list(&state, &file, &options).await?
        }
    };

    print!("{}", output);
    if !output.ends_with('\n') && !output.is_empty() {
        println!();
    }
    Ok(())
}
