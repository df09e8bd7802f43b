//! Food MCP Tools
//!
//! Tools for browsing the nutrient catalog and the food library.

use serde::Serialize;

use crate::config::{load_food_library, ConfigPaths};
use crate::models::FoodRecord;
use crate::nutrition::{Category, Diagnostics, Nutrient, NUTRIENTS};

/// One catalog entry
#[derive(Debug, Serialize)]
pub struct NutrientSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub category: Category,
}

/// Response for list_nutrients
#[derive(Debug, Serialize)]
pub struct ListNutrientsResponse {
    pub nutrients: Vec<NutrientSummary>,
    pub total: usize,
}

/// Summary of a food for list results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub energy: f64,
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
}

impl From<&FoodRecord> for FoodSummary {
    fn from(food: &FoodRecord) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            amount: food.amount,
            energy: food.get(Nutrient::Energy),
            protein: food.get(Nutrient::Protein),
            carbohydrate: food.get(Nutrient::Carbohydrate),
            fat: food.get(Nutrient::Fat),
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodSummary>,
    pub total: usize,
    pub warnings: Vec<String>,
}

/// A non-zero nutrient amount in its display unit
#[derive(Debug, Serialize)]
pub struct DisplayAmount {
    pub key: &'static str,
    pub label: &'static str,
    pub amount: f64,
    pub unit: &'static str,
}

/// Full food detail response
#[derive(Debug, Serialize)]
pub struct FoodDetail {
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub nutrients: Vec<DisplayAmount>,
}

impl From<&FoodRecord> for FoodDetail {
    fn from(food: &FoodRecord) -> Self {
        let nutrients = NUTRIENTS
            .iter()
            .filter(|def| food.get(def.nutrient) != 0.0)
            .map(|def| DisplayAmount {
                key: def.key,
                label: def.label,
                amount: def.unit.to_display(food.get(def.nutrient)),
                unit: def.unit.symbol,
            })
            .collect();

        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            amount: food.amount,
            nutrients,
        }
    }
}

/// List the nutrient catalog, optionally restricted to one category
pub fn list_nutrients(category: Option<&str>) -> Result<ListNutrientsResponse, String> {
    let category = category.map(str::trim).filter(|c| !c.is_empty());

    let nutrients: Vec<NutrientSummary> = NUTRIENTS
        .iter()
        .filter(|def| match category {
            Some(c) => def.category.display_name().eq_ignore_ascii_case(c),
            None => true,
        })
        .map(|def| NutrientSummary {
            key: def.key,
            label: def.label,
            unit: def.unit.symbol,
            category: def.category,
        })
        .collect();

    if nutrients.is_empty() {
        return Err(format!("No nutrients in category '{}'", category.unwrap_or_default()));
    }

    let total = nutrients.len();
    Ok(ListNutrientsResponse { nutrients, total })
}

/// List foods of the library whose name or description contains `query`
pub fn list_foods(paths: &ConfigPaths, query: Option<&str>) -> Result<ListFoodsResponse, String> {
    let mut diagnostics = Diagnostics::new();
    let library = load_food_library(&paths.foods_dir, &mut diagnostics)
        .map_err(|e| format!("Failed to load foods: {}", e))?;

    let query = query.map(|q| q.trim().to_lowercase()).filter(|q| !q.is_empty());

    let foods: Vec<FoodSummary> = library
        .iter()
        .filter(|food| match &query {
            Some(q) => {
                food.name.to_lowercase().contains(q) || food.description.to_lowercase().contains(q)
            }
            None => true,
        })
        .map(FoodSummary::from)
        .collect();

    let total = foods.len();
    Ok(ListFoodsResponse {
        foods,
        total,
        warnings: diagnostics.messages(),
    })
}

/// Get one food by exact name
pub fn get_food(paths: &ConfigPaths, name: &str) -> Result<Option<FoodDetail>, String> {
    let mut diagnostics = Diagnostics::new();
    let library = load_food_library(&paths.foods_dir, &mut diagnostics)
        .map_err(|e| format!("Failed to load foods: {}", e))?;

    Ok(library.get(name).map(FoodDetail::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> (tempfile::TempDir, ConfigPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::from_root(dir.path());
        paths.initialize().unwrap();
        (dir, paths)
    }

    #[test]
    fn test_list_nutrients_by_category() {
        let all = list_nutrients(None).unwrap();
        assert_eq!(all.total, 68);

        let alkaloids = list_nutrients(Some("alkaloids")).unwrap();
        let keys: Vec<&str> = alkaloids.nutrients.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!["caffeine", "theobromine"]);

        assert!(list_nutrients(Some("spices")).is_err());
    }

    #[test]
    fn test_list_foods_filters_by_query() {
        let (_dir, paths) = paths();

        let all = list_foods(&paths, None).unwrap();
        assert_eq!(all.total, 4);
        assert!(all.warnings.is_empty());

        let rice = list_foods(&paths, Some("RICE")).unwrap();
        assert_eq!(rice.total, 1);
        assert_eq!(rice.foods[0].name, "White Rice (cooked)");
    }

    #[test]
    fn test_get_food_display_units() {
        let (_dir, paths) = paths();

        let chicken = get_food(&paths, "Chicken Breast (roasted)").unwrap().unwrap();
        let calcium = chicken.nutrients.iter().find(|n| n.key == "calcium").unwrap();
        assert_eq!(calcium.unit, "mg");
        assert!((calcium.amount - 15.0).abs() < 1e-9);
        assert!(chicken.nutrients.iter().all(|n| n.key != "carbohydrate"));

        assert!(get_food(&paths, "Unicorn Meat").unwrap().is_none());
    }
}
