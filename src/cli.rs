//! Command-line arguments for the utility binaries.
use clap::Parser;
use std::path::PathBuf;

const CONFIG_LOCATION_HELP: &str =
    "NutriMetrics configuration files live in $NUTRIMETRICS_HOME (default: ~/.nutrimetrics).";

/// Arguments of `analyze_meal_plan`.
#[derive(Parser, Debug)]
#[command(
    name = "analyze_meal_plan",
    version,
    about = "NutriMetrics - Analyze nutrients in a meal plan.",
    after_help = CONFIG_LOCATION_HELP
)]
pub struct AnalyzeMealPlanArgs {
    /// Path to meal plan JSON file to be processed
    #[arg(value_name = "meal_plan.json")]
    pub meal_plan: PathBuf,
}

/// Arguments of `import_food_data_central`.
#[derive(Parser, Debug)]
#[command(
    name = "import_food_data_central",
    version,
    about = "NutriMetrics - Import food data from FoodData Central.",
    after_help = CONFIG_LOCATION_HELP
)]
pub struct ImportFoodDataCentralArgs {
    /// Replace food file if it already exists
    #[arg(short, long)]
    pub replace: bool,

    /// Path to food list JSON file to be processed
    #[arg(value_name = "food_list.json")]
    pub food_list: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_analyze_takes_plan_path() {
        let args = AnalyzeMealPlanArgs::try_parse_from(["analyze_meal_plan", "plan.json"]).unwrap();
        assert_eq!(args.meal_plan, PathBuf::from("plan.json"));
    }

    #[test]
    fn test_analyze_help_is_not_a_file() {
        let err = AnalyzeMealPlanArgs::try_parse_from(["analyze_meal_plan", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("configuration files live in"));
    }

    #[test]
    fn test_analyze_requires_plan() {
        let err = AnalyzeMealPlanArgs::try_parse_from(["analyze_meal_plan"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_import_short_replace_flag() {
        let args =
            ImportFoodDataCentralArgs::try_parse_from(["import_food_data_central", "-r", "list.json"]).unwrap();
        assert!(args.replace);
        assert_eq!(args.food_list, PathBuf::from("list.json"));

        let args = ImportFoodDataCentralArgs::try_parse_from(["import_food_data_central", "list.json"]).unwrap();
        assert!(!args.replace);
    }

    #[test]
    fn test_import_rejects_unknown_flag() {
        let err = ImportFoodDataCentralArgs::try_parse_from(["import_food_data_central", "--replcae", "list.json"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
