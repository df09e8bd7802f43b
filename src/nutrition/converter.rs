//! Amount conversion with diagnostics
//!
//! Wraps the unit catalog for callers that must keep going on bad input.

use super::diagnostics::{Diagnostic, Diagnostics};
use super::units::to_canonical;

/// Convert an amount in `unit` to canonical storage
///
/// An unknown unit is recorded as a diagnostic and yields zero, so a single
/// bad record never aborts a whole load or import.
pub fn convert_amount(amount: f64, unit: &str, diagnostics: &mut Diagnostics) -> f64 {
    match to_canonical(amount, unit) {
        Some(value) => value,
        None => {
            diagnostics.push(Diagnostic::UnknownUnit {
                unit: unit.to_string(),
            });
            0.0
        }
    }
}
