//! User settings read from `config.json`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nutrition::catalog::Nutrient;

pub const DEFAULT_FDC_API_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub food_data_central: FoodDataCentralSettings,
}

/// Meal plan report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Nutrient identifiers left out of report tables
    #[serde(default)]
    pub do_not_display: Vec<String>,
    /// Decimal places for displayed amounts
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_decimals() -> usize {
    1
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            do_not_display: Vec::new(),
            decimals: default_decimals(),
        }
    }
}

impl ReportSettings {
    pub fn is_displayed(&self, nutrient: Nutrient) -> bool {
        !self.do_not_display.iter().any(|key| key == nutrient.key())
    }
}

/// FoodData Central import settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDataCentralSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Log every nutrient seen during import
    #[serde(default)]
    pub verbose_import: bool,
    /// Nutrient identifier to the FoodData Central nutrient ids that feed it
    #[serde(default)]
    pub nutrients_ids: BTreeMap<String, Vec<i64>>,
}

fn default_api_url() -> String {
    DEFAULT_FDC_API_URL.to_string()
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

impl Default for FoodDataCentralSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: default_api_key(),
            verbose_import: false,
            nutrients_ids: BTreeMap::new(),
        }
    }
}

impl FoodDataCentralSettings {
    /// Catalog nutrient fed by a FoodData Central nutrient id
    pub fn nutrient_for_fdc_id(&self, fdc_id: i64) -> Option<Nutrient> {
        self.nutrients_ids
            .iter()
            .find(|(_, ids)| ids.contains(&fdc_id))
            .and_then(|(key, _)| Nutrient::from_key(key))
    }
}
