//! Find the cheapest tuna roll nearby, then optionally simulate an order.
//!
//! ```bash
//! sushi-scout --lat 37.7749 --lng -122.4194 --radius 2 --order
//! sushi-scout --details
//! sushi-scout --list-tools
//! RUST_LOG=menu_synth=debug sushi-scout --places-file places.json
//! ```

mod config;
mod display;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use sushi_tools::{registry_with_search, DemoRestaurants, PlacesFixture, RestaurantSearch};
use tracing::{info, warn};

use crate::config::{Args, Config};
use crate::workflow::{order_choice, Scout};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sushi_scout=info".parse()?),
        )
        .init();

    let config = Config::from_args(Args::parse())?;

    let provider: Arc<dyn RestaurantSearch> = match config.places_file.as_ref() {
        Some(path) => Arc::new(PlacesFixture::load(path).await?),
        None => Arc::new(DemoRestaurants::new()),
    };
    info!("Searching with provider '{}'", provider.name());

    let scout = Scout::new(registry_with_search(provider));

    if config.list_tools {
        println!("{}", serde_json::to_string_pretty(&scout.tool_definitions())?);
        return Ok(());
    }

    let restaurants = scout.search(&config.area).await?;
    println!("{}", display::restaurants(&restaurants));

    let report = scout.rank(&restaurants).await?;
    println!("{}", display::ranking(&report));
    println!("{}", display::winner(&report));

    if config.details {
        if let Some(best) = report.cheapest.as_ref() {
            let details = scout.details(&best.restaurant_id).await?;
            println!();
            println!("{}", display::details(&details));
        }
    }

    if !config.order {
        return Ok(());
    }

    match order_choice(&report) {
        Some(option) => {
            let confirmation = scout.order(option, &config.address).await?;
            println!();
            println!("{}", display::confirmation(&confirmation));
        }
        None if report.cheapest.is_some() => {
            warn!("No tuna roll option offers delivery, skipping order");
        }
        None => {}
    }

    Ok(())
}
