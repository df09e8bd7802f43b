//! NutriMetrics Library
//!
//! Nutrient aggregation for meal plans: food, meal and plan totals, energy
//! distribution, body-composition targets and dietary reference intake ratios.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
