//! Body-composition target model
//!
//! Derives energy and minimum protein/fat goals from lean body mass using the
//! Katch–McArdle resting energy formula. Inputs are not range-checked here;
//! validation belongs to whoever reads the plan file.

use serde::Serialize;

/// Katch–McArdle intercept (kcal)
pub const RESTING_ENERGY_BASE: f64 = 370.0;
/// Katch–McArdle slope (kcal per kg of lean mass)
pub const RESTING_ENERGY_PER_KG_LEAN: f64 = 21.6;

const GRAMS_PER_KG: f64 = 1000.0;

/// Body-composition target with derived goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    /// Body mass in grams
    pub body_mass: f64,
    /// Body fat as a fraction in [0, 1]
    pub body_fat_ratio: f64,
    pub activity_factor: f64,
    /// Grams of protein per kg of lean mass
    pub minimum_protein_factor: f64,
    /// Grams of fat per kg of lean mass
    pub minimum_fat_factor: f64,

    /// Lean body mass in grams
    pub lean_body_mass: f64,
    /// Resting daily energy expenditure in kcal
    pub resting_energy: f64,
    /// Resting energy scaled by the activity factor, in kcal
    pub basal_metabolic_rate: f64,
    /// Minimum protein in grams
    pub minimum_protein: f64,
    /// Minimum fat in grams
    pub minimum_fat: f64,
}

impl Target {
    pub fn new(
        body_mass: f64,
        body_fat_ratio: f64,
        activity_factor: f64,
        minimum_protein_factor: f64,
        minimum_fat_factor: f64,
    ) -> Self {
        let lean_body_mass = (1.0 - body_fat_ratio) * body_mass;
        let lean_kg = lean_body_mass / GRAMS_PER_KG;
        let resting_energy = RESTING_ENERGY_BASE + RESTING_ENERGY_PER_KG_LEAN * lean_kg;

        Self {
            body_mass,
            body_fat_ratio,
            activity_factor,
            minimum_protein_factor,
            minimum_fat_factor,
            lean_body_mass,
            resting_energy,
            basal_metabolic_rate: resting_energy * activity_factor,
            minimum_protein: lean_kg * minimum_protein_factor,
            minimum_fat: lean_kg * minimum_fat_factor,
        }
    }
}
