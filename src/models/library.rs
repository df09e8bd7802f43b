//! Food library
//!
//! Read-only, name-sorted collection of food records. Meals look foods up by
//! name and work on scaled copies, never on the stored records.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{FoodRecord, RawFoodRecord};
use crate::nutrition::diagnostics::{Diagnostic, Diagnostics};

#[derive(Debug, Clone, Default, Serialize)]
pub struct FoodLibrary {
    foods: BTreeMap<String, FoodRecord>,
}

impl FoodLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from raw records
    ///
    /// Invalid records are skipped. When two records share a name the later
    /// one wins and a `DuplicateFood` diagnostic is recorded.
    pub fn from_raw_records<I>(records: I, diagnostics: &mut Diagnostics) -> Self
    where
        I: IntoIterator<Item = RawFoodRecord>,
    {
        let mut library = Self::new();
        for raw in records {
            if let Some(food) = FoodRecord::from_raw(raw, diagnostics) {
                library.insert(food, diagnostics);
            }
        }
        library
    }

    /// Insert a record, replacing any record with the same name
    pub fn insert(&mut self, food: FoodRecord, diagnostics: &mut Diagnostics) {
        if self.foods.contains_key(&food.name) {
            diagnostics.push(Diagnostic::DuplicateFood {
                food: food.name.clone(),
            });
        }
        self.foods.insert(food.name.clone(), food);
    }

    pub fn get(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.foods.contains_key(name)
    }

    /// Iterate foods sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.foods.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
