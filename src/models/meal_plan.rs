//! Meal plan model
//!
//! Builds the fully derived plan: meals, grand total, energy distribution,
//! body-composition target and DRI ratios.

use serde::{Deserialize, Serialize};

use super::{FoodLibrary, FoodRecord, Meal, MealSpec};
use crate::nutrition::catalog::Nutrient;
use crate::nutrition::converter::convert_amount;
use crate::nutrition::diagnostics::Diagnostics;
use crate::nutrition::dri::{DriRatios, ReferenceIntakes};
use crate::nutrition::energy::EnergyDistribution;
use crate::nutrition::target::Target;

/// Name of a plan's grand total row
pub const GRAND_TOTAL_NAME: &str = "GRAND TOTAL";

/// Body-composition parameters as declared in a plan file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Body mass in the plan's declared unit
    pub body_mass: f64,
    /// Body fat in percent (0-100)
    pub body_fat_percent: f64,
    pub activity_factor: f64,
    pub minimum_protein_factor: f64,
    pub minimum_fat_factor: f64,
}

/// A meal plan file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanSpec {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub meals: Vec<MealSpec>,
    /// Name of the DRI table to compare against
    pub dietary_reference_intakes: String,
    pub target: TargetSpec,
}

/// A fully derived meal plan
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    pub name: String,
    pub unit: String,
    pub meals: Vec<Meal>,
    pub total: FoodRecord,
    pub distribution: EnergyDistribution,
    pub target: Target,
    pub dri_name: String,
    /// Reference intakes after the target's energy/protein/fat were merged in
    pub dri: ReferenceIntakes,
    pub dri_ratio: DriRatios,
    pub diagnostics: Diagnostics,
}

impl MealPlan {
    /// Build a plan from its spec, the food library and the named DRI table
    pub fn build(spec: &MealPlanSpec, library: &FoodLibrary, intakes: ReferenceIntakes) -> Self {
        let mut diagnostics = Diagnostics::new();

        let meals: Vec<Meal> = spec
            .meals
            .iter()
            .map(|meal| Meal::build(meal, &spec.unit, library, &mut diagnostics))
            .collect();

        let total = meals
            .iter()
            .fold(FoodRecord::total(GRAND_TOTAL_NAME), |acc, meal| acc.add(&meal.total));

        let distribution = EnergyDistribution::new(
            total.get(Nutrient::Protein),
            total.get(Nutrient::Carbohydrate),
            total.get(Nutrient::Fat),
            &mut diagnostics,
        );

        let target = Target::new(
            convert_amount(spec.target.body_mass, &spec.unit, &mut diagnostics),
            spec.target.body_fat_percent / 100.0,
            spec.target.activity_factor,
            spec.target.minimum_protein_factor,
            spec.target.minimum_fat_factor,
        );

        let mut dri = intakes;
        dri.apply_target(&target);

        let dri_ratio = DriRatios::compute(&total.nutrients, &dri, &mut diagnostics);

        tracing::info!(
            plan = %spec.name,
            meals = meals.len(),
            diagnostics = diagnostics.len(),
            "Built meal plan"
        );

        Self {
            name: spec.name.clone(),
            unit: spec.unit.clone(),
            meals,
            total,
            distribution,
            target,
            dri_name: spec.dietary_reference_intakes.clone(),
            dri,
            dri_ratio,
            diagnostics,
        }
    }
}
