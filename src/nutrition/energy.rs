//! Energy distribution between protein, carbohydrate and fat

use serde::Serialize;

use super::diagnostics::{Diagnostic, Diagnostics};

/// kcal per gram of protein
pub const ENERGY_PROTEIN_FACTOR: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const ENERGY_CARBOHYDRATE_FACTOR: f64 = 4.0;
/// kcal per gram of fat
pub const ENERGY_FAT_FACTOR: f64 = 8.0;

/// Caloric contribution and share of each macronutrient
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnergyDistribution {
    pub energy_protein: f64,
    pub energy_carbohydrate: f64,
    pub energy_fat: f64,
    pub energy_total: f64,
    pub protein_ratio: f64,
    pub carbohydrate_ratio: f64,
    pub fat_ratio: f64,
}

impl EnergyDistribution {
    /// Derive the distribution from macronutrient masses in grams
    ///
    /// A zero total has no meaningful shares: the ratios are left at zero and
    /// a `DegenerateDistribution` diagnostic is recorded.
    pub fn new(
        protein_g: f64,
        carbohydrate_g: f64,
        fat_g: f64,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let energy_protein = protein_g * ENERGY_PROTEIN_FACTOR;
        let energy_carbohydrate = carbohydrate_g * ENERGY_CARBOHYDRATE_FACTOR;
        let energy_fat = fat_g * ENERGY_FAT_FACTOR;
        let energy_total = energy_protein + energy_carbohydrate + energy_fat;

        let mut distribution = Self {
            energy_protein,
            energy_carbohydrate,
            energy_fat,
            energy_total,
            ..Self::default()
        };

        if energy_total == 0.0 || !energy_total.is_finite() {
            diagnostics.push(Diagnostic::DegenerateDistribution {
                total: energy_total,
            });
            return distribution;
        }

        distribution.protein_ratio = energy_protein / energy_total;
        distribution.carbohydrate_ratio = energy_carbohydrate / energy_total;
        distribution.fat_ratio = energy_fat / energy_total;
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_energy() {
        let mut diags = Diagnostics::new();
        let dist = EnergyDistribution::new(100.0, 200.0, 50.0, &mut diags);

        assert_eq!(dist.energy_protein, 400.0);
        assert_eq!(dist.energy_carbohydrate, 800.0);
        assert_eq!(dist.energy_fat, 400.0);
        assert_eq!(dist.energy_total, 1600.0);
        assert!((dist.protein_ratio - 0.25).abs() < 1e-12);
        assert!((dist.carbohydrate_ratio - 0.5).abs() < 1e-12);
        assert!((dist.fat_ratio - 0.25).abs() < 1e-12);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_ratios_sum_to_one() {
        let mut diags = Diagnostics::new();
        for (p, c, f) in [(62.0, 0.0, 7.2), (13.1, 77.9, 0.4), (0.01, 0.0, 0.0)] {
            let dist = EnergyDistribution::new(p, c, f, &mut diags);
            let sum = dist.protein_ratio + dist.carbohydrate_ratio + dist.fat_ratio;
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_distribution() {
        let mut diags = Diagnostics::new();
        let dist = EnergyDistribution::new(0.0, 0.0, 0.0, &mut diags);

        assert_eq!(dist.energy_total, 0.0);
        assert_eq!(dist.protein_ratio, 0.0);
        assert_eq!(dist.carbohydrate_ratio, 0.0);
        assert_eq!(dist.fat_ratio, 0.0);
        assert!(dist.protein_ratio.is_finite());
        assert_eq!(
            diags.iter().next(),
            Some(&Diagnostic::DegenerateDistribution { total: 0.0 })
        );
    }
}
