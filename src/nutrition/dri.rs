//! Dietary reference intakes and adequacy ratios

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::catalog::Nutrient;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::target::Target;
use crate::models::NutrientAmounts;

/// Reference intake per nutrient, in canonical units
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferenceIntakes(BTreeMap<Nutrient, f64>);

impl ReferenceIntakes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an identifier-keyed mapping
    ///
    /// Identifiers outside the catalog can never be matched against a total,
    /// so they are logged and dropped.
    pub fn from_keyed(raw: &HashMap<String, f64>) -> Self {
        let mut intakes = Self::new();
        for (key, amount) in raw {
            match Nutrient::from_key(key) {
                Some(nutrient) => intakes.set(nutrient, *amount),
                None => tracing::warn!("Ignoring reference intake for unknown nutrient '{}'", key),
            }
        }
        intakes
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.0.contains_key(&nutrient)
    }

    /// Let the body-composition target replace energy, protein and fat
    pub fn apply_target(&mut self, target: &Target) {
        self.set(Nutrient::Energy, target.basal_metabolic_rate);
        self.set(Nutrient::Protein, target.minimum_protein);
        self.set(Nutrient::Fat, target.minimum_fat);
    }

    /// Iterate in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, v)| (*n, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Intake over reference intake, per nutrient with a reference value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DriRatios(BTreeMap<Nutrient, f64>);

impl DriRatios {
    /// Ratio of `total` over every reference intake
    ///
    /// Nutrients without a reference intake get no entry at all. A zero or
    /// non-finite reference keeps its entry with a ratio of 0 and records a
    /// `DegenerateRatio` diagnostic.
    pub fn compute(
        total: &NutrientAmounts,
        intakes: &ReferenceIntakes,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut ratios = BTreeMap::new();
        for (nutrient, reference) in intakes.iter() {
            let ratio = if reference == 0.0 || !reference.is_finite() {
                diagnostics.push(Diagnostic::DegenerateRatio {
                    nutrient: nutrient.key().to_string(),
                    reference,
                });
                0.0
            } else {
                total.get(nutrient) / reference
            };
            ratios.insert(nutrient, ratio);
        }
        Self(ratios)
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.0.contains_key(&nutrient)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, v)| (*n, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Adequacy classification of a DRI percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdequacyBand {
    /// Below 60%
    Deficit3,
    /// 60% to 80%
    Deficit2,
    /// 80% to 100%
    Deficit1,
    /// 100% to 200%
    Excess1,
    /// 200% to 300%
    Excess2,
    /// 300% and above
    Excess3,
}

impl AdequacyBand {
    pub fn from_ratio(ratio: f64) -> Self {
        let percent = 100.0 * ratio;
        if percent >= 300.0 {
            AdequacyBand::Excess3
        } else if percent >= 200.0 {
            AdequacyBand::Excess2
        } else if percent >= 100.0 {
            AdequacyBand::Excess1
        } else if percent >= 80.0 {
            AdequacyBand::Deficit1
        } else if percent >= 60.0 {
            AdequacyBand::Deficit2
        } else {
            AdequacyBand::Deficit3
        }
    }

    /// Short marker used in Markdown reports
    pub fn marker(&self) -> &'static str {
        match self {
            AdequacyBand::Deficit3 => "---",
            AdequacyBand::Deficit2 => "--",
            AdequacyBand::Deficit1 => "-",
            AdequacyBand::Excess1 => "+",
            AdequacyBand::Excess2 => "++",
            AdequacyBand::Excess3 => "+++",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn totals() -> NutrientAmounts {
        let mut t = NutrientAmounts::zero();
        t.set(Nutrient::Energy, 2000.0);
        t.set(Nutrient::Protein, 100.0);
        t.set(Nutrient::Calcium, 0.5);
        t
    }

    #[test]
    fn test_from_keyed_drops_unknown() {
        let raw = HashMap::from([
            ("calcium".to_string(), 1.0),
            ("kryptonite".to_string(), 3.0),
        ]);
        let intakes = ReferenceIntakes::from_keyed(&raw);
        assert_eq!(intakes.len(), 1);
        assert_eq!(intakes.get(Nutrient::Calcium), Some(1.0));
    }

    #[test]
    fn test_ratio_keys_are_intersection() {
        let mut intakes = ReferenceIntakes::new();
        intakes.set(Nutrient::Calcium, 1.0);
        intakes.set(Nutrient::Iron, 0.008);

        let mut diags = Diagnostics::new();
        let ratios = DriRatios::compute(&totals(), &intakes, &mut diags);

        let keys: HashSet<Nutrient> = ratios.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, HashSet::from([Nutrient::Calcium, Nutrient::Iron]));
        assert!((ratios.get(Nutrient::Calcium).unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(ratios.get(Nutrient::Iron), Some(0.0));
        assert!(!ratios.contains(Nutrient::VitaminD));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_zero_reference_is_degenerate() {
        let mut intakes = ReferenceIntakes::new();
        intakes.set(Nutrient::Calcium, 0.0);

        let mut diags = Diagnostics::new();
        let ratios = DriRatios::compute(&totals(), &intakes, &mut diags);

        assert_eq!(ratios.get(Nutrient::Calcium), Some(0.0));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_apply_target_overrides() {
        let mut intakes = ReferenceIntakes::new();
        intakes.set(Nutrient::Energy, 2500.0);
        intakes.set(Nutrient::Protein, 56.0);
        intakes.set(Nutrient::Calcium, 1.0);

        let target = Target::new(70000.0, 0.2, 1.5, 2.2, 0.8);
        intakes.apply_target(&target);

        assert!((intakes.get(Nutrient::Energy).unwrap() - 2369.4).abs() < 1e-9);
        assert!((intakes.get(Nutrient::Protein).unwrap() - 123.2).abs() < 1e-9);
        assert!((intakes.get(Nutrient::Fat).unwrap() - 44.8).abs() < 1e-9);
        assert_eq!(intakes.get(Nutrient::Calcium), Some(1.0));
    }

    #[test]
    fn test_adequacy_bands() {
        assert_eq!(AdequacyBand::from_ratio(3.0), AdequacyBand::Excess3);
        assert_eq!(AdequacyBand::from_ratio(2.5), AdequacyBand::Excess2);
        assert_eq!(AdequacyBand::from_ratio(1.0), AdequacyBand::Excess1);
        assert_eq!(AdequacyBand::from_ratio(0.85), AdequacyBand::Deficit1);
        assert_eq!(AdequacyBand::from_ratio(0.65), AdequacyBand::Deficit2);
        assert_eq!(AdequacyBand::from_ratio(0.1), AdequacyBand::Deficit3);
        assert_eq!(AdequacyBand::from_ratio(0.0), AdequacyBand::Deficit3);
    }
}
