//! CLI commands implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing::info;

use lifeline::config::{load_settings, Settings};
use lifeline::llm::{AdvisoryService, LlmClient};
use lifeline::models::{CategoryFilter, GeoPoint, PlaceCategory};
use lifeline::repository::{EmergencyRepository, PlaceRepository, Provisioner};
use lifeline::services::{GuidanceResolver, PlaceFinder, PlaceLookup, DEFAULT_NEAREST_LIMIT};

use super::render;

#[derive(Parser)]
#[command(name = "lifeline")]
#[command(about = "First-aid guidance and nearby emergency services")]
#[command(version)]
pub struct Cli {
    /// Data directory (holds lifeline.db)
    #[arg(long, global = true, env = "LIFELINE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Where to look for emergency services.
#[derive(Args)]
struct LocationArgs {
    /// City name (case-insensitive)
    #[arg(long)]
    city: Option<String>,
    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Only these categories (hospital, police-station, fire-station); repeatable
    #[arg(short = 'c', long = "category", value_parser = parse_category)]
    categories: Vec<PlaceCategory>,
    /// Maximum places for a coordinate search
    #[arg(short = 'n', long, default_value_t = DEFAULT_NEAREST_LIMIT)]
    limit: usize,
}

impl LocationArgs {
    fn lookup(&self) -> anyhow::Result<PlaceLookup> {
        let point = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)?),
            _ => None,
        };
        Ok(PlaceLookup::from_inputs(point, self.city.as_deref()))
    }

    fn filter(&self) -> CategoryFilter {
        CategoryFilter::only(self.categories.iter().copied())
    }
}

fn parse_category(s: &str) -> Result<PlaceCategory, String> {
    PlaceCategory::from_str(s).ok_or_else(|| {
        format!(
            "unknown category '{}' (expected hospital, police-station or fire-station)",
            s
        )
    })
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database with the built-in catalogs
    Init {
        /// Drop and recreate the catalogs even if the database exists
        #[arg(long)]
        force: bool,
    },

    /// Get first-aid guidance and nearby emergency services
    Guide {
        /// Emergency scenario, e.g. "Heart Attack"
        query: Vec<String>,
        #[command(flatten)]
        location: LocationArgs,
        /// Answer from the local catalog without contacting the advisory service
        #[arg(long)]
        offline: bool,
    },

    /// List nearby emergency services
    Places {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// List the first-aid catalog
    Emergencies,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.data_dir).await;

    match cli.command {
        Commands::Init { force } => cmd_init(&settings, force).await,
        Commands::Guide {
            query,
            location,
            offline,
        } => cmd_guide(&settings, &query.join(" "), &location, offline).await,
        Commands::Places { location } => cmd_places(&settings, &location).await,
        Commands::Emergencies => cmd_emergencies(&settings).await,
    }
}

/// Provision the database on first use.
async fn ensure_database(settings: &Settings) -> anyhow::Result<()> {
    let provisioner = Provisioner::new(settings.pool());
    if provisioner.ensure_provisioned().await? {
        info!("Created {}", settings.database_path().display());
    }
    Ok(())
}

async fn cmd_init(settings: &Settings, force: bool) -> anyhow::Result<()> {
    let provisioner = Provisioner::new(settings.pool());
    let db_path = settings.database_path();

    if force {
        provisioner.provision().await?;
    } else if !provisioner.ensure_provisioned().await? {
        println!(
            "{} Database already exists at {} (use --force to recreate)",
            style("!").yellow(),
            db_path.display()
        );
        return Ok(());
    }

    println!(
        "{} Database created with emergencies and places at {}",
        style("✓").green(),
        db_path.display()
    );
    Ok(())
}

async fn cmd_guide(
    settings: &Settings,
    query: &str,
    location: &LocationArgs,
    offline: bool,
) -> anyhow::Result<()> {
    ensure_database(settings).await?;

    let pool = settings.pool();
    let advisory: Arc<dyn AdvisoryService> = Arc::new(LlmClient::new(settings.llm.clone())?);
    let catalog = Arc::new(EmergencyRepository::new(pool.clone()));
    let resolver = GuidanceResolver::new(advisory, catalog).with_timeout(settings.llm.timeout());

    let guidance = if offline {
        resolver.resolve_offline(query).await
    } else {
        resolver.resolve(query).await
    };
    render::print_guidance(query, &guidance);
    println!();

    // Guidance is already out; a bad location only skips the place list.
    let lookup = match location.lookup() {
        Ok(lookup) => lookup,
        Err(e) => {
            println!("{} {}", style("!").yellow(), e);
            return Ok(());
        }
    };

    let finder = PlaceFinder::new(PlaceRepository::new(pool));
    let results = finder
        .find(&lookup, &location.filter(), location.limit)
        .await?;
    render::print_places(&results);
    Ok(())
}

async fn cmd_places(settings: &Settings, location: &LocationArgs) -> anyhow::Result<()> {
    let lookup = location.lookup()?;
    ensure_database(settings).await?;

    let finder = PlaceFinder::new(PlaceRepository::new(settings.pool()));
    let results = finder
        .find(&lookup, &location.filter(), location.limit)
        .await?;
    render::print_places(&results);
    Ok(())
}

async fn cmd_emergencies(settings: &Settings) -> anyhow::Result<()> {
    ensure_database(settings).await?;

    let entries = EmergencyRepository::new(settings.pool()).all().await?;
    render::print_emergencies(&entries);
    Ok(())
}
