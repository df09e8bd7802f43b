//! Utility to analyze a meal plan and write its Markdown report
//!
//! The report is written to the current directory, named after the plan file.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutrimetrics::cli::AnalyzeMealPlanArgs;
use nutrimetrics::config::ConfigPaths;
use nutrimetrics::nutrition::AdequacyBand;
use nutrimetrics::tools::{plans, reports};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = AnalyzeMealPlanArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrimetrics=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let paths = ConfigPaths::resolve()?;

    let plan_path = args.meal_plan;
    if !plan_path.exists() {
        eprintln!("Data file '{}' does not exist", plan_path.display());
        std::process::exit(1);
    }

    paths.initialize()?;
    let (plan, settings) = plans::load_meal_plan(&paths, &plan_path)?;

    let file_name = plan_path.file_name().map(Path::new).unwrap_or(plan_path.as_path());
    let output = plans::report_path_for(file_name);
    reports::generate_meal_plan_report(&plan, &settings.report, Some(&output))?;

    println!("Meal plan: {}", plan.name);
    println!(
        "Energy: {:.0} kcal (protein {:.0}%, carbohydrate {:.0}%, fat {:.0}%)",
        plan.distribution.energy_total,
        100.0 * plan.distribution.protein_ratio,
        100.0 * plan.distribution.carbohydrate_ratio,
        100.0 * plan.distribution.fat_ratio
    );
    println!("Target: {:.0} kcal", plan.target.basal_metabolic_rate);

    let deficits: Vec<&str> = plan
        .dri_ratio
        .iter()
        .filter(|(_, ratio)| AdequacyBand::from_ratio(*ratio) == AdequacyBand::Deficit3)
        .map(|(nutrient, _)| nutrient.def().label)
        .collect();
    if !deficits.is_empty() {
        println!("Below 60% of reference: {}", deficits.join(", "));
    }
    for message in plan.diagnostics.messages() {
        println!("Warning: {}", message);
    }

    println!("Report written to {}", output.display());
    Ok(())
}
