//! Utility to import nutrient profiles from USDA FoodData Central
//!
//! The food list holds `{"foods": [{"fdc_id": 171477, "name": "Chicken Breast"}]}`.
//! Imported foods are written to the foods directory of the configuration.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutrimetrics::cli::ImportFoodDataCentralArgs;
use nutrimetrics::config::{load_settings, read_json, ConfigPaths};
use nutrimetrics::tools::import::{FoodDataCentral, FoodList};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ImportFoodDataCentralArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrimetrics=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let paths = ConfigPaths::resolve()?;

    let list_path = args.food_list;
    if !list_path.exists() {
        eprintln!("Data file '{}' does not exist", list_path.display());
        std::process::exit(1);
    }

    paths.initialize()?;
    let settings = load_settings(&paths.config_file)?;
    let list: FoodList = read_json(&list_path)?;

    let client = FoodDataCentral::new(settings.food_data_central)?;
    let summary = client.import_food_list(&list, &paths.foods_dir, args.replace)?;

    for path in &summary.imported {
        println!("> Imported to {}", path.display());
    }
    for path in &summary.skipped_existing {
        println!("> Kept existing {} (use --replace to overwrite)", path.display());
    }
    for name in &summary.failed {
        println!("> Failed to import {}", name);
    }
    for message in summary.diagnostics.messages() {
        println!("Warning: {}", message);
    }

    Ok(())
}
