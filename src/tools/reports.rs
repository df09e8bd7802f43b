//! Report generation tools
//!
//! Render a derived meal plan as a Markdown document: target parameters,
//! energy distribution, meal contents and a per-nutrient table comparing the
//! totals with the target and reference intakes.

use std::path::Path;

use serde::Serialize;

use crate::config::ReportSettings;
use crate::models::{FoodRecord, MealPlan};
use crate::nutrition::{AdequacyBand, Nutrient, NUTRIENTS};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MealPlanReportResponse {
    pub markdown: String,
    pub file_path: Option<String>,
    pub generated_at: String,
}

// ============================================================================
// Formatting Helpers
// ============================================================================

/// Display amount of a nutrient, converted from its canonical unit
fn display_amount(nutrient: Nutrient, amount: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, nutrient.def().unit.to_display(amount))
}

fn percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, 100.0 * ratio)
}

fn displayed_nutrients(settings: &ReportSettings) -> impl Iterator<Item = Nutrient> + '_ {
    NUTRIENTS
        .iter()
        .map(|def| def.nutrient)
        .filter(|n| settings.is_displayed(*n))
}

/// Amounts are canonical grams once a meal is built
fn food_line(food: &FoodRecord, decimals: usize) -> String {
    format!(
        "- {}: {:.*} g ({} kcal)\n",
        food.name,
        decimals,
        food.amount,
        display_amount(Nutrient::Energy, food.get(Nutrient::Energy), decimals),
    )
}

// ============================================================================
// Markdown Rendering
// ============================================================================

/// Render a meal plan report
pub fn render_meal_plan_markdown(plan: &MealPlan, settings: &ReportSettings) -> String {
    let decimals = settings.decimals;
    let now = chrono::Utc::now();
    let generated_at = now.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let mut markdown = String::new();

    // Header
    markdown.push_str(&format!("# Meal Plan: {}\n\n", plan.name));
    markdown.push_str(&format!("**Reference Intakes:** {}\n\n", plan.dri_name));
    markdown.push_str(&format!("**Date:** {}\n\n", now.format("%Y-%m-%d")));
    markdown.push_str("---\n\n");

    // Target
    let target = &plan.target;
    markdown.push_str("## Target\n\n");
    markdown.push_str("| Parameter | Value |\n");
    markdown.push_str("|---|---:|\n");
    markdown.push_str(&format!("| Body Mass (g) | {:.*} |\n", decimals, target.body_mass));
    markdown.push_str(&format!("| Body Fat (%) | {:.*} |\n", decimals, 100.0 * target.body_fat_ratio));
    markdown.push_str(&format!("| Activity Factor | {} |\n", target.activity_factor));
    markdown.push_str(&format!("| Minimum Protein Factor | {} |\n", target.minimum_protein_factor));
    markdown.push_str(&format!("| Minimum Fat Factor | {} |\n", target.minimum_fat_factor));
    markdown.push_str(&format!("| Lean Body Mass (g) | {:.*} |\n", decimals, target.lean_body_mass));
    markdown.push_str(&format!(
        "| Resting Daily Energy Expenditure (kcal) | {:.*} |\n",
        decimals, target.resting_energy
    ));
    markdown.push_str(&format!(
        "| Basal Metabolic Rate (kcal) | {:.*} |\n",
        decimals, target.basal_metabolic_rate
    ));
    markdown.push_str(&format!("| Minimum Protein (g) | {:.*} |\n", decimals, target.minimum_protein));
    markdown.push_str(&format!("| Minimum Fat (g) | {:.*} |\n\n", decimals, target.minimum_fat));

    // Energy distribution
    let dist = &plan.distribution;
    markdown.push_str("## Energy Distribution\n\n");
    markdown.push_str("| Macronutrient | Energy (kcal) | Energy (%) |\n");
    markdown.push_str("|---|---:|---:|\n");
    for (label, energy, ratio) in [
        ("Protein", dist.energy_protein, dist.protein_ratio),
        ("Carbohydrate", dist.energy_carbohydrate, dist.carbohydrate_ratio),
        ("Fat", dist.energy_fat, dist.fat_ratio),
    ] {
        markdown.push_str(&format!(
            "| {} | {:.*} | {} |\n",
            label,
            decimals,
            energy,
            percent(ratio, decimals)
        ));
    }
    markdown.push_str(&format!("| **Total** | {:.*} | |\n\n", decimals, dist.energy_total));

    // Meals
    markdown.push_str("## Meals\n\n");
    for meal in &plan.meals {
        markdown.push_str(&format!("### {}\n\n", meal.name));
        for food in &meal.foods {
            markdown.push_str(&food_line(food, decimals));
        }
        if meal.foods.is_empty() {
            markdown.push_str("*No foods.*\n");
        }
        markdown.push_str(&format!(
            "\n**{}:** {:.*} g ({} kcal)\n\n",
            meal.total.name,
            decimals,
            meal.total.amount,
            display_amount(Nutrient::Energy, meal.total.get(Nutrient::Energy), decimals),
        ));
    }
    if plan.meals.is_empty() {
        markdown.push_str("*No meals in this plan.*\n\n");
    }

    // Nutrient table
    markdown.push_str("## Nutrients\n\n");
    let mut header = String::from("| Nutrient |");
    let mut align = String::from("|---|");
    for meal in &plan.meals {
        header.push_str(&format!(" {} |", meal.name));
        align.push_str("---:|");
    }
    header.push_str(&format!(" {} | Target & DRI | Target & DRI [%] | |\n", plan.total.name));
    align.push_str("---:|---:|---:|:---:|\n");
    markdown.push_str(&header);
    markdown.push_str(&align);

    for nutrient in displayed_nutrients(settings) {
        let mut row = format!("| {} |", nutrient.def().header_label());
        for meal in &plan.meals {
            row.push_str(&format!(" {} |", display_amount(nutrient, meal.total.get(nutrient), decimals)));
        }
        row.push_str(&format!(" {} |", display_amount(nutrient, plan.total.get(nutrient), decimals)));

        match (plan.dri.get(nutrient), plan.dri_ratio.get(nutrient)) {
            (Some(reference), Some(ratio)) => row.push_str(&format!(
                " {} | {} | {} |\n",
                display_amount(nutrient, reference, decimals),
                percent(ratio, decimals),
                AdequacyBand::from_ratio(ratio).marker()
            )),
            _ => row.push_str(" | | |\n"),
        }
        markdown.push_str(&row);
    }
    markdown.push('\n');

    markdown.push_str("Bands: `---` below 60%, `--` below 80%, `-` below 100%, ");
    markdown.push_str("`+` from 100%, `++` from 200%, `+++` from 300%.\n\n");

    // Diagnostics
    if !plan.diagnostics.is_empty() {
        markdown.push_str("## Warnings\n\n");
        for message in plan.diagnostics.messages() {
            markdown.push_str(&format!("- {}\n", message));
        }
        markdown.push('\n');
    }

    markdown.push_str("---\n\n");
    markdown.push_str(&format!("*Generated: {}*\n", generated_at));

    markdown
}

/// Render a meal plan report and optionally write it to `output`
pub fn generate_meal_plan_report(
    plan: &MealPlan,
    settings: &ReportSettings,
    output: Option<&Path>,
) -> Result<MealPlanReportResponse, String> {
    let markdown = render_meal_plan_markdown(plan, settings);
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let file_path = match output {
        Some(path) => {
            std::fs::write(path, &markdown)
                .map_err(|e| format!("Failed to write report '{}': {}", path.display(), e))?;
            tracing::info!(path = %path.display(), "Meal plan report written");
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(MealPlanReportResponse {
        markdown,
        file_path,
        generated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodLibrary, FoodPortion, MealPlanSpec, MealSpec, RawFoodRecord, TargetSpec};
    use crate::nutrition::{Diagnostics, ReferenceIntakes};
    use std::collections::BTreeMap;

    fn plan() -> MealPlan {
        let mut diags = Diagnostics::new();
        let library = FoodLibrary::from_raw_records(
            vec![RawFoodRecord {
                name: "Chicken".to_string(),
                description: String::new(),
                amount: 100.0,
                nutrients: BTreeMap::from([
                    ("energy".to_string(), 165.0),
                    ("protein".to_string(), 31.0),
                    ("fat".to_string(), 3.6),
                    ("calcium".to_string(), 0.015),
                ]),
            }],
            &mut diags,
        );
        let spec = MealPlanSpec {
            name: "Cut".to_string(),
            unit: "g".to_string(),
            meals: vec![MealSpec {
                name: "Lunch".to_string(),
                foods: vec![
                    FoodPortion { food: "Chicken".to_string(), amount: 200.0 },
                    FoodPortion { food: "Unicorn Meat".to_string(), amount: 50.0 },
                ],
            }],
            dietary_reference_intakes: "adult".to_string(),
            target: TargetSpec {
                body_mass: 70000.0,
                body_fat_percent: 20.0,
                activity_factor: 1.5,
                minimum_protein_factor: 2.2,
                minimum_fat_factor: 0.8,
            },
        };
        let mut intakes = ReferenceIntakes::new();
        intakes.set(Nutrient::Calcium, 1.0);
        MealPlan::build(&spec, &library, intakes)
    }

    #[test]
    fn test_report_contains_sections() {
        let markdown = render_meal_plan_markdown(&plan(), &ReportSettings::default());

        assert!(markdown.starts_with("# Meal Plan: Cut\n"));
        assert!(markdown.contains("## Target\n"));
        assert!(markdown.contains("| Lean Body Mass (g) | 56000.0 |"));
        assert!(markdown.contains("## Energy Distribution\n"));
        assert!(markdown.contains("- Chicken: 200.0 g (330.0 kcal)\n"));
        assert!(markdown.contains("## Warnings\n"));
        assert!(markdown.contains("Unicorn Meat"));
    }

    #[test]
    fn test_report_converts_display_units_and_bands() {
        let markdown = render_meal_plan_markdown(&plan(), &ReportSettings::default());

        // 2 x 0.015 g of calcium against 1 g
        assert!(markdown.contains("| Calcium [mg] | 30.0 | 30.0 | 1000.0 | 3.0 | --- |\n"));
        // protein is compared against the target minimum of 123.2 g
        assert!(markdown.contains("| Protein [g] | 62.0 | 62.0 | 123.2 | 50.3 | --- |\n"));
        // no reference intake for water
        assert!(markdown.contains("| Water [g] | 0.0 | 0.0 | | | |\n"));
    }

    #[test]
    fn test_report_hides_nutrients() {
        let settings = ReportSettings {
            do_not_display: vec!["calcium".to_string()],
            decimals: 2,
        };
        let markdown = render_meal_plan_markdown(&plan(), &settings);

        assert!(!markdown.contains("Calcium [mg]"));
        assert!(markdown.contains("| Protein [g] | 62.00 |"));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.md");

        let response = generate_meal_plan_report(&plan(), &ReportSettings::default(), Some(&path)).unwrap();

        assert_eq!(response.file_path, Some(path.display().to_string()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), response.markdown);
    }
}
