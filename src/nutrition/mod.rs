//! Nutrition calculation module
//!
//! Unit and nutrient catalogs plus the energy, target and DRI derivations.

pub mod catalog;
pub mod converter;
pub mod diagnostics;
pub mod dri;
pub mod energy;
pub mod target;
pub mod units;

pub use catalog::{Category, Nutrient, NutrientDef, NUTRIENTS, NUTRIENT_COUNT};
pub use converter::convert_amount;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use dri::{AdequacyBand, DriRatios, ReferenceIntakes};
pub use energy::EnergyDistribution;
pub use target::Target;
pub use units::{canonical_factor, to_canonical, Unit, GRAM, KILOCALORIE, MICROGRAM, MILLIGRAM};
