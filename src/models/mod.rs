//! Data models
//!
//! Food records, meals and meal plans.

mod food;
mod library;
mod meal;
mod meal_plan;
mod nutrition;

pub use food::{FoodRecord, RawFoodRecord, RecordKind};
pub use library::FoodLibrary;
pub use meal::{FoodPortion, Meal, MealSpec, MEAL_TOTAL_NAME};
pub use meal_plan::{MealPlan, MealPlanSpec, TargetSpec, GRAND_TOTAL_NAME};
pub use nutrition::NutrientAmounts;
