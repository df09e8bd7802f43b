//! Unit catalog
//!
//! Energy is always stored internally in kilocalories and every other nutrient
//! amount in grams. Display units only matter when presenting values.

use serde::Serialize;

/// A measurement unit with its display conversion factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Multiplier from the canonical amount to this unit's display amount
    pub display_factor: f64,
}

impl Unit {
    /// Express a canonically stored amount in this unit
    pub fn to_display(&self, canonical_amount: f64) -> f64 {
        canonical_amount * self.display_factor
    }
}

// ============================================================================
// Known Units
// ============================================================================

pub const KILOCALORIE: Unit = Unit {
    name: "kilocalorie",
    symbol: "kcal",
    display_factor: 1.0,
};

pub const GRAM: Unit = Unit {
    name: "gram",
    symbol: "g",
    display_factor: 1.0,
};

pub const MILLIGRAM: Unit = Unit {
    name: "milligram",
    symbol: "mg",
    display_factor: 1e3,
};

pub const MICROGRAM: Unit = Unit {
    name: "microgram",
    symbol: "µg",
    display_factor: 1e6,
};

// ============================================================================
// Input Conversion
// ============================================================================

/// Factor converting an amount in `symbol` to canonical storage
///
/// Returns None for unrecognized symbols.
pub fn canonical_factor(symbol: &str) -> Option<f64> {
    let lower = symbol.trim().to_lowercase();

    match lower.as_str() {
        "kcal" | "g" => Some(1.0),
        "mg" => Some(1e-3),
        // FoodData Central is not consistent about the micro sign
        "µg" | "μg" | "ug" | "mcg" => Some(1e-6),
        _ => None,
    }
}

/// Convert an amount to canonical storage, or None if the unit is unknown
pub fn to_canonical(amount: f64, symbol: &str) -> Option<f64> {
    canonical_factor(symbol).map(|factor| amount * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_units() {
        assert_eq!(to_canonical(250.0, "kcal"), Some(250.0));
        assert_eq!(to_canonical(31.0, "g"), Some(31.0));
    }

    #[test]
    fn test_sub_gram_units() {
        let mg = to_canonical(500.0, "mg").unwrap();
        assert!((mg - 0.5).abs() < 1e-12);

        let ug = to_canonical(15.0, "µg").unwrap();
        assert!((ug - 15e-6).abs() < 1e-15);
    }

    #[test]
    fn test_unit_aliases_and_case() {
        assert_eq!(canonical_factor("MG"), Some(1e-3));
        assert_eq!(canonical_factor("UG"), Some(1e-6));
        assert_eq!(canonical_factor("mcg"), Some(1e-6));
        assert_eq!(canonical_factor(" G "), Some(1.0));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(to_canonical(10.0, "kJ"), None);
        assert_eq!(to_canonical(10.0, "IU"), None);
        assert_eq!(canonical_factor(""), None);
    }

    #[test]
    fn test_to_display() {
        assert!((MILLIGRAM.to_display(0.0125) - 12.5).abs() < 1e-9);
        assert!((MICROGRAM.to_display(2.4e-6) - 2.4).abs() < 1e-9);
        assert_eq!(GRAM.to_display(7.2), 7.2);
    }
}
