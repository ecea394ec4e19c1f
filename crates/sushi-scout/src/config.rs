//! Command-line and environment configuration.

use std::env;
use std::path::PathBuf;

use clap::Parser;
use sushi_tools::SearchArea;

/// Delivery address used when none is configured.
pub const DEFAULT_ADDRESS: &str = "123 Main St, San Francisco, CA 94102";

#[derive(Debug, Parser)]
#[command(name = "sushi-scout")]
#[command(about = "Find the cheapest tuna roll nearby")]
pub struct Args {
    /// Saved Places searchNearby response to search instead of the demo
    /// restaurants. Falls back to SUSHI_SCOUT_PLACES_FILE env.
    #[arg(long)]
    pub places_file: Option<PathBuf>,

    /// Latitude of the search center (default: San Francisco)
    #[arg(long, default_value_t = 37.7749, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the search center (default: San Francisco)
    #[arg(long, default_value_t = -122.4194, allow_negative_numbers = true)]
    pub lng: f64,

    /// Search radius in miles
    #[arg(long, default_value_t = 2.0)]
    pub radius: f64,

    /// Simulate placing an order for the cheapest deliverable tuna roll
    #[arg(long)]
    pub order: bool,

    /// Show hours, service options and reviews for the cheapest restaurant
    #[arg(long)]
    pub details: bool,

    /// Print the tool definitions offered to a model as JSON and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Delivery address. Falls back to SUSHI_SCOUT_ADDRESS env.
    #[arg(long)]
    pub address: Option<String>,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` searches the built-in demo restaurants.
    pub places_file: Option<PathBuf>,
    pub area: SearchArea,
    pub order: bool,
    pub details: bool,
    pub list_tools: bool,
    pub address: String,
}

impl Config {
    /// Resolve flags, falling back to environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SUSHI_SCOUT_PLACES_FILE` | Saved Places response | demo restaurants |
    /// | `SUSHI_SCOUT_ADDRESS` | Delivery address | `123 Main St, San Francisco, CA 94102` |
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let area = SearchArea::new(args.lat, args.lng, args.radius)
            .map_err(|e| ConfigError::InvalidLocation(e.to_string()))?;

        let places_file = args
            .places_file
            .or_else(|| env::var("SUSHI_SCOUT_PLACES_FILE").ok().map(PathBuf::from));
        if let Some(path) = places_file.as_ref() {
            if !path.is_file() {
                return Err(ConfigError::MissingPlacesFile(path.clone()));
            }
        }

        let address = args
            .address
            .or_else(|| env::var("SUSHI_SCOUT_ADDRESS").ok())
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Ok(Self {
            places_file,
            area,
            order: args.order,
            details: args.details,
            list_tools: args.list_tools,
            address,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid search location: {0}")]
    InvalidLocation(String),

    #[error("Places file not found: {}", .0.display())]
    MissingPlacesFile(PathBuf),
}
