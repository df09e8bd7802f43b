//! Non-fatal conditions raised while loading foods and building plans
//!
//! Nothing in the aggregation engine aborts: each condition is recovered
//! locally and recorded here so the caller can surface or discard it.

use serde::Serialize;
use thiserror::Error;

/// A recovered, non-fatal condition
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("unit '{unit}' is unknown")]
    UnknownUnit { unit: String },

    #[error("food '{food}' is unknown (meal '{meal}')")]
    UnknownFood { meal: String, food: String },

    #[error("nutrient '{nutrient}' is unknown (food '{food}')")]
    UnknownNutrient { food: String, nutrient: String },

    #[error("food '{food}' has invalid reference amount {amount}")]
    InvalidReferenceAmount { food: String, amount: f64 },

    #[error("food '{food}' is defined more than once, keeping the last definition")]
    DuplicateFood { food: String },

    #[error("energy distribution is degenerate (total energy {total})")]
    DegenerateDistribution { total: f64 },

    #[error("reference intake for '{nutrient}' is {reference}, ratio set to 0")]
    DegenerateRatio { nutrient: String, reference: f64 },
}

/// Ordered collection of diagnostics
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Human-readable messages, one per diagnostic
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_messages() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());

        diags.push(Diagnostic::UnknownFood {
            meal: "Lunch".to_string(),
            food: "Unicorn Meat".to_string(),
        });
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags.messages(),
            vec!["food 'Unicorn Meat' is unknown (meal 'Lunch')".to_string()]
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let diag = Diagnostic::UnknownUnit { unit: "oz".to_string() };
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "unknown_unit");
        assert_eq!(json["unit"], "oz");
    }
}
