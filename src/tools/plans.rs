//! Meal Plan MCP Tools
//!
//! Load a meal plan file, build it against the configured food library and
//! reference intakes, and summarize the result.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{
    load_food_library, load_meal_plan_spec, load_reference_intakes, load_settings, ConfigPaths,
    ReportSettings, Settings,
};
use crate::models::MealPlan;
use crate::nutrition::{AdequacyBand, Diagnostics, EnergyDistribution, Nutrient, Target, NUTRIENTS};
use crate::tools::reports::generate_meal_plan_report;

/// Per-meal summary
#[derive(Debug, Serialize)]
pub struct MealSummary {
    pub name: String,
    pub food_count: usize,
    pub amount: f64,
    pub energy: f64,
}

/// One nutrient of the plan total in its display unit
#[derive(Debug, Serialize)]
pub struct NutrientRow {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub total: f64,
    pub reference: Option<f64>,
    pub percent: Option<f64>,
    pub band: Option<AdequacyBand>,
}

/// Response for analyze_meal_plan
#[derive(Debug, Serialize)]
pub struct AnalyzeMealPlanResponse {
    pub name: String,
    pub dietary_reference_intakes: String,
    pub meals: Vec<MealSummary>,
    pub distribution: EnergyDistribution,
    pub target: Target,
    pub nutrients: Vec<NutrientRow>,
    pub warnings: Vec<String>,
    pub report_path: Option<String>,
}

/// Resolve a plan path, falling back to the samples directory for bare names
pub fn resolve_plan_path(paths: &ConfigPaths, plan: &str) -> PathBuf {
    let direct = PathBuf::from(plan);
    if direct.exists() || direct.is_absolute() {
        return direct;
    }

    let file_name = if plan.ends_with(".json") {
        plan.to_string()
    } else {
        format!("{}.json", plan)
    };
    let sample = paths.samples_dir.join(file_name);
    if sample.exists() {
        sample
    } else {
        direct
    }
}

/// Report path next to the plan file
pub fn report_path_for(plan_path: &Path) -> PathBuf {
    plan_path.with_extension("md")
}

/// Load settings, foods, reference intakes and the plan file, then build the plan
///
/// Loading warnings (unknown nutrients, duplicate foods) are merged into the
/// plan's own diagnostics.
pub fn load_meal_plan(paths: &ConfigPaths, plan_path: &Path) -> Result<(MealPlan, Settings), String> {
    let settings = load_settings(&paths.config_file)
        .map_err(|e| format!("Failed to read configuration: {}", e))?;

    let spec = load_meal_plan_spec(plan_path).map_err(|e| format!("Failed to read meal plan: {}", e))?;

    let mut load_diagnostics = Diagnostics::new();
    let library = load_food_library(&paths.foods_dir, &mut load_diagnostics)
        .map_err(|e| format!("Failed to load foods: {}", e))?;

    let intakes = load_reference_intakes(paths, &spec.dietary_reference_intakes)
        .map_err(|e| format!("Failed to load reference intakes: {}", e))?;

    let mut plan = MealPlan::build(&spec, &library, intakes);
    let plan_diagnostics = std::mem::replace(&mut plan.diagnostics, load_diagnostics);
    plan.diagnostics.extend(plan_diagnostics);

    Ok((plan, settings))
}

/// Summarize a built plan
pub fn summarize_meal_plan(plan: &MealPlan, settings: &ReportSettings) -> AnalyzeMealPlanResponse {
    let meals = plan
        .meals
        .iter()
        .map(|meal| MealSummary {
            name: meal.name.clone(),
            food_count: meal.foods.len(),
            amount: meal.total.amount,
            energy: meal.total.get(Nutrient::Energy),
        })
        .collect();

    let nutrients = NUTRIENTS
        .iter()
        .filter(|def| settings.is_displayed(def.nutrient))
        .map(|def| {
            let ratio = plan.dri_ratio.get(def.nutrient);
            NutrientRow {
                key: def.key,
                label: def.label,
                unit: def.unit.symbol,
                total: def.unit.to_display(plan.total.get(def.nutrient)),
                reference: plan.dri.get(def.nutrient).map(|r| def.unit.to_display(r)),
                percent: ratio.map(|r| 100.0 * r),
                band: ratio.map(AdequacyBand::from_ratio),
            }
        })
        .collect();

    AnalyzeMealPlanResponse {
        name: plan.name.clone(),
        dietary_reference_intakes: plan.dri_name.clone(),
        meals,
        distribution: plan.distribution.clone(),
        target: plan.target.clone(),
        nutrients,
        warnings: plan.diagnostics.messages(),
        report_path: None,
    }
}

/// Analyze a meal plan file, optionally writing the Markdown report beside it
pub fn analyze_meal_plan(
    paths: &ConfigPaths,
    plan: &str,
    write_report: bool,
) -> Result<AnalyzeMealPlanResponse, String> {
    let plan_path = resolve_plan_path(paths, plan);
    let (meal_plan, settings) = load_meal_plan(paths, &plan_path)?;

    let mut response = summarize_meal_plan(&meal_plan, &settings.report);

    if write_report {
        let output = report_path_for(&plan_path);
        let report = generate_meal_plan_report(&meal_plan, &settings.report, Some(&output))?;
        response.report_path = report.file_path;
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn paths() -> (tempfile::TempDir, ConfigPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::from_root(dir.path());
        paths.initialize().unwrap();
        (dir, paths)
    }

    #[test]
    fn test_resolve_sample_by_name() {
        let (_dir, paths) = paths();
        assert_eq!(
            resolve_plan_path(&paths, "meal_plan"),
            paths.samples_dir.join("meal_plan.json")
        );
        assert_eq!(resolve_plan_path(&paths, "nope.json"), PathBuf::from("nope.json"));
    }

    #[test]
    fn test_analyze_sample_plan() {
        let (_dir, paths) = paths();

        let response = analyze_meal_plan(&paths, "meal_plan", false).unwrap();

        assert_eq!(response.name, "Sample Day");
        assert_eq!(response.meals.len(), 2);
        assert!(response.warnings.is_empty());
        assert!(response.report_path.is_none());

        let ratios = response.distribution.protein_ratio
            + response.distribution.carbohydrate_ratio
            + response.distribution.fat_ratio;
        assert!((ratios - 1.0).abs() < 1e-9);

        // protein is measured against the target minimum
        let protein = response.nutrients.iter().find(|n| n.key == "protein").unwrap();
        assert!((protein.reference.unwrap() - response.target.minimum_protein).abs() < 1e-9);

        // trans fats are hidden by the default configuration
        assert!(response.nutrients.iter().all(|n| n.key != "trans"));
        // no reference intake for caffeine
        let caffeine = response.nutrients.iter().find(|n| n.key == "caffeine").unwrap();
        assert!(caffeine.percent.is_none());
    }

    #[test]
    fn test_analyze_writes_report_and_merges_warnings() {
        let (dir, paths) = paths();
        fs::write(
            paths.foods_dir.join("mystery.json"),
            r#"{"name": "Mystery", "amount": 100, "nutrients": {"unobtainium": 1}}"#,
        )
        .unwrap();
        let plan_path = dir.path().join("plan.json");
        fs::write(
            &plan_path,
            r#"{
                "name": "Odd Day",
                "unit": "g",
                "dietary_reference_intakes": "adult_female_31_50",
                "target": {"body_mass": 60000, "body_fat_percent": 25, "activity_factor": 1.4,
                           "minimum_protein_factor": 1.8, "minimum_fat_factor": 0.8},
                "meals": [{"name": "Snack", "foods": [{"food": "Unicorn Meat", "amount": 50}]}]
            }"#,
        )
        .unwrap();

        let response = analyze_meal_plan(&paths, plan_path.to_str().unwrap(), true).unwrap();

        assert_eq!(response.warnings.len(), 3);
        assert!(response.warnings[0].contains("unobtainium"));
        assert!(response.warnings.iter().any(|w| w.contains("Unicorn Meat")));
        // empty plan: the energy distribution is degenerate
        assert_eq!(response.distribution.protein_ratio, 0.0);

        let report = report_path_for(&plan_path);
        assert_eq!(response.report_path, Some(report.display().to_string()));
        assert!(fs::read_to_string(report).unwrap().contains("# Meal Plan: Odd Day"));
    }

    #[test]
    fn test_load_meal_plan_missing_file() {
        let (_dir, paths) = paths();
        let err = load_meal_plan(&paths, Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_load_meal_plan_totals() {
        let (_dir, paths) = paths();
        let (plan, _settings) = load_meal_plan(&paths, &paths.samples_dir.join("meal_plan.json")).unwrap();

        // 350 g of chicken at 31 g, 450 g of rice at 2.69 g, 150 g of broccoli at 2.82 g
        let expected = 3.5 * 31.0 + 4.5 * 2.69 + 1.5 * 2.82;
        assert!((plan.total.get(Nutrient::Protein) - expected).abs() < 1e-9);
    }
}
