//! Shared nutrient vector
//!
//! Used by food records, meal totals and plan totals. Every catalog nutrient
//! always has a slot, so aggregation is unconditional addition.

use std::ops::{Add, Index, IndexMut, Mul};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::nutrition::catalog::{Nutrient, NUTRIENTS, NUTRIENT_COUNT};

/// Amount of every catalog nutrient, in canonical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientAmounts([f64; NUTRIENT_COUNT]);

impl NutrientAmounts {
    /// All nutrients at zero
    pub fn zero() -> Self {
        Self([0.0; NUTRIENT_COUNT])
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.0[nutrient.index()]
    }

    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0[nutrient.index()] = amount;
    }

    /// Look up by data identifier; None if the identifier is not in the catalog
    pub fn get_by_key(&self, key: &str) -> Option<f64> {
        Nutrient::from_key(key).map(|n| self.get(n))
    }

    /// Scale every nutrient by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        let mut scaled = *self;
        for value in scaled.0.iter_mut() {
            *value *= multiplier;
        }
        scaled
    }

    /// Add another vector to this one
    pub fn add(&self, other: &NutrientAmounts) -> Self {
        let mut sum = *self;
        for (value, other_value) in sum.0.iter_mut().zip(other.0.iter()) {
            *value += other_value;
        }
        sum
    }

    /// Iterate `(nutrient, amount)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        NUTRIENTS
            .iter()
            .zip(self.0.iter())
            .map(|(def, value)| (def.nutrient, *value))
    }
}

impl Default for NutrientAmounts {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<Nutrient> for NutrientAmounts {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &f64 {
        &self.0[nutrient.index()]
    }
}

impl IndexMut<Nutrient> for NutrientAmounts {
    fn index_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        &mut self.0[nutrient.index()]
    }
}

impl Add for NutrientAmounts {
    type Output = NutrientAmounts;

    fn add(self, other: NutrientAmounts) -> NutrientAmounts {
        NutrientAmounts::add(&self, &other)
    }
}

impl Mul<f64> for NutrientAmounts {
    type Output = NutrientAmounts;

    fn mul(self, multiplier: f64) -> NutrientAmounts {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientAmounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientAmounts::zero(), |acc, n| acc + n)
    }
}

/// Serialized as `{identifier: amount}` in catalog order
impl Serialize for NutrientAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUTRIENT_COUNT))?;
        for (nutrient, amount) in self.iter() {
            map.serialize_entry(nutrient.key(), &amount)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(protein: f64, fat: f64, iron: f64) -> NutrientAmounts {
        let mut amounts = NutrientAmounts::zero();
        amounts.set(Nutrient::Protein, protein);
        amounts.set(Nutrient::Fat, fat);
        amounts[Nutrient::Iron] = iron;
        amounts
    }

    #[test]
    fn test_zero_has_every_slot() {
        let zero = NutrientAmounts::zero();
        assert_eq!(zero.iter().count(), NUTRIENT_COUNT);
        assert!(zero.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_add_is_per_nutrient() {
        let a = sample(31.0, 3.6, 0.001);
        let b = sample(2.5, 10.0, 0.002);
        let sum = a + b;

        for nutrient in Nutrient::all() {
            assert_eq!(sum.get(nutrient), a.get(nutrient) + b.get(nutrient));
        }
    }

    #[test]
    fn test_scale_round_trip() {
        let a = sample(31.0, 3.6, 0.0009);
        let k = 2.75;
        let back = a.scale(k).scale(1.0 / k);

        for nutrient in Nutrient::all() {
            assert!((back.get(nutrient) - a.get(nutrient)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sum() {
        let total: NutrientAmounts = vec![sample(1.0, 2.0, 0.0), sample(3.0, 4.0, 0.5)]
            .into_iter()
            .sum();
        assert_eq!(total.get(Nutrient::Protein), 4.0);
        assert_eq!(total.get(Nutrient::Fat), 6.0);
        assert_eq!(total[Nutrient::Iron], 0.5);
    }

    #[test]
    fn test_get_by_key() {
        let a = sample(31.0, 3.6, 0.0);
        assert_eq!(a.get_by_key("protein"), Some(31.0));
        assert_eq!(a.get_by_key("not-a-nutrient"), None);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let a = sample(31.0, 3.6, 0.0);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.starts_with(r#"{"energy":0.0,"water":0.0,"fat":3.6"#));
        assert!(json.contains(r#""protein":31.0"#));
    }
}
