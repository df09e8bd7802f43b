//! Meal model
//!
//! A named list of food portions resolved against the food library.

use serde::{Deserialize, Serialize};

use super::{FoodLibrary, FoodRecord};
use crate::nutrition::converter::convert_amount;
use crate::nutrition::diagnostics::{Diagnostic, Diagnostics};

/// Name of a meal's total row
pub const MEAL_TOTAL_NAME: &str = "TOTAL";

/// One line of a meal in a plan file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPortion {
    /// Name of the food in the library
    pub food: String,
    /// Amount in the plan's declared unit
    pub amount: f64,
}

/// A meal as declared in a plan file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSpec {
    pub name: String,
    #[serde(default)]
    pub foods: Vec<FoodPortion>,
}

/// A meal with scaled foods and their total
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub name: String,
    pub foods: Vec<FoodRecord>,
    pub total: FoodRecord,
}

impl Meal {
    /// Resolve every portion of `spec` against `library`
    ///
    /// Unknown foods are skipped with an `UnknownFood` diagnostic; the rest of
    /// the meal is still built. Each food is a scaled copy of the library
    /// record, proportional to that record's own reference amount.
    pub fn build(
        spec: &MealSpec,
        unit: &str,
        library: &FoodLibrary,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut foods = Vec::with_capacity(spec.foods.len());

        for portion in &spec.foods {
            let Some(record) = library.get(&portion.food) else {
                diagnostics.push(Diagnostic::UnknownFood {
                    meal: spec.name.clone(),
                    food: portion.food.clone(),
                });
                continue;
            };

            let amount = convert_amount(portion.amount, unit, diagnostics);
            foods.push(record.portion(amount));
        }

        let total = foods
            .iter()
            .fold(FoodRecord::total(MEAL_TOTAL_NAME), |acc, food| acc.add(food));

        tracing::debug!(meal = %spec.name, foods = foods.len(), "Built meal");

        Self {
            name: spec.name.clone(),
            foods,
            total,
        }
    }
}
