//! Food record model
//!
//! A named nutrient profile proportional to its own reference amount.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::NutrientAmounts;
use crate::nutrition::catalog::Nutrient;
use crate::nutrition::diagnostics::{Diagnostic, Diagnostics};

/// Whether a record describes a food or a running total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Food,
    Total,
}

/// Food record as it appears in a food library file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFoodRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

/// A food record with every catalog nutrient populated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    pub name: String,
    pub description: String,
    /// Reference amount in grams
    pub amount: f64,
    pub nutrients: NutrientAmounts,
    pub kind: RecordKind,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            amount,
            nutrients: NutrientAmounts::zero(),
            kind: RecordKind::Food,
        }
    }

    /// An all-zero record used to seed a running total
    pub fn total(name: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Total,
            ..Self::new(name, "", 0.0)
        }
    }

    /// Build a record from a raw library entry
    ///
    /// Every catalog nutrient starts at zero and the raw values are laid over
    /// it, so a missing nutrient means zero. Unknown identifiers are reported
    /// and dropped. Returns None when the reference amount cannot be scaled
    /// from (zero, negative or not finite).
    pub fn from_raw(raw: RawFoodRecord, diagnostics: &mut Diagnostics) -> Option<Self> {
        if !raw.amount.is_finite() || raw.amount <= 0.0 {
            diagnostics.push(Diagnostic::InvalidReferenceAmount {
                food: raw.name,
                amount: raw.amount,
            });
            return None;
        }

        let mut record = Self::new(raw.name, raw.description, raw.amount);
        for (key, amount) in raw.nutrients {
            match Nutrient::from_key(&key) {
                Some(nutrient) => record.nutrients.set(nutrient, amount),
                None => diagnostics.push(Diagnostic::UnknownNutrient {
                    food: record.name.clone(),
                    nutrient: key,
                }),
            }
        }
        Some(record)
    }

    /// Convert back to the library file shape, listing every nutrient
    pub fn to_raw(&self) -> RawFoodRecord {
        RawFoodRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            amount: self.amount,
            nutrients: self
                .nutrients
                .iter()
                .map(|(nutrient, amount)| (nutrient.key().to_string(), amount))
                .collect(),
        }
    }

    /// A copy with the reference amount and every nutrient multiplied by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            amount: self.amount * factor,
            nutrients: self.nutrients.scale(factor),
            ..self.clone()
        }
    }

    /// A copy holding the sum of both records' amounts and nutrients
    pub fn add(&self, other: &FoodRecord) -> Self {
        Self {
            amount: self.amount + other.amount,
            nutrients: self.nutrients.add(&other.nutrients),
            ..self.clone()
        }
    }

    /// A copy scaled to `amount` grams relative to this record's reference amount
    pub fn portion(&self, amount: f64) -> Self {
        self.scale(amount / self.amount)
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient)
    }
}
