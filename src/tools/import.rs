//! FoodData Central import
//!
//! Downloads nutrient profiles from the USDA FoodData Central API and writes
//! them as food library files. FoodData Central always reports nutrients per
//! 100 g.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ConfigError, FoodDataCentralSettings};
use crate::models::FoodRecord;
use crate::nutrition::{to_canonical, Diagnostic, Diagnostics};

/// Reference amount of every FoodData Central nutrient profile, in grams
pub const FDC_REFERENCE_AMOUNT: f64 = 100.0;

/// Import error types
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

// ============================================================================
// Input and API Types
// ============================================================================

/// One food to import
#[derive(Debug, Clone, Deserialize)]
pub struct FoodListEntry {
    pub fdc_id: i64,
    pub name: String,
}

/// A food list file: `{"foods": [{"fdc_id": 171477, "name": "Chicken Breast"}]}`
#[derive(Debug, Clone, Deserialize)]
pub struct FoodList {
    #[serde(default)]
    pub foods: Vec<FoodListEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FdcNutrient {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "unitName", default)]
    pub unit_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FdcFoodNutrient {
    pub amount: Option<f64>,
    pub nutrient: Option<FdcNutrient>,
}

/// The parts of a FoodData Central food record the import reads
#[derive(Debug, Clone, Deserialize)]
pub struct FdcFood {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "foodNutrients", default)]
    pub food_nutrients: Vec<FdcFoodNutrient>,
}

/// Outcome of a food list import
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub imported: Vec<PathBuf>,
    pub skipped_existing: Vec<PathBuf>,
    pub failed: Vec<String>,
    pub diagnostics: Diagnostics,
}

// ============================================================================
// Mapping
// ============================================================================

/// File name of an imported food: lowercase name, spaces as underscores, FDC id suffix
pub fn food_file_name(name: &str, fdc_id: i64) -> String {
    format!("{}_{}.json", name.to_lowercase().replace(' ', "_"), fdc_id)
}

/// Map a FoodData Central record onto a food record
///
/// Nutrients whose id is not mapped in the settings are ignored. Amounts are
/// converted to the canonical unit; an unknown unit is reported and the value
/// left out.
pub fn map_fdc_food(
    name: &str,
    fdc_id: i64,
    fdc: &FdcFood,
    settings: &FoodDataCentralSettings,
    diagnostics: &mut Diagnostics,
) -> FoodRecord {
    let mut food = FoodRecord::new(name, fdc.description.clone(), FDC_REFERENCE_AMOUNT);

    for entry in &fdc.food_nutrients {
        let (Some(amount), Some(nutrient)) = (entry.amount, entry.nutrient.as_ref()) else {
            continue;
        };

        let mapped = settings.nutrient_for_fdc_id(nutrient.id);
        if settings.verbose_import {
            tracing::info!(
                "{} ({}): [{}][{}][{}][{}] -> {}",
                name,
                fdc_id,
                nutrient.name,
                nutrient.id,
                amount,
                nutrient.unit_name,
                mapped.map(|n| n.key()).unwrap_or("-")
            );
        }

        let Some(target) = mapped else {
            continue;
        };
        match to_canonical(amount, &nutrient.unit_name) {
            Some(value) => food.nutrients.set(target, value),
            None => diagnostics.push(Diagnostic::UnknownUnit {
                unit: nutrient.unit_name.clone(),
            }),
        }
    }

    food
}

/// Write a food record as a library file
pub fn write_food_file(path: &Path, food: &FoodRecord) -> ImportResult<()> {
    let json = serde_json::to_string_pretty(&food.to_raw())?;
    fs::write(path, json)?;
    Ok(())
}

// ============================================================================
// Client
// ============================================================================

/// Blocking FoodData Central client
pub struct FoodDataCentral {
    settings: FoodDataCentralSettings,
    client: reqwest::blocking::Client,
}

impl FoodDataCentral {
    pub fn new(settings: FoodDataCentralSettings) -> ImportResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("nutrimetrics/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { settings, client })
    }

    /// Fetch one food; a non-success status is logged and yields None
    pub fn download(&self, fdc_id: i64, name: &str) -> ImportResult<Option<FdcFood>> {
        let url = format!("{}/food/{}", self.settings.api_url.trim_end_matches('/'), fdc_id);
        tracing::info!("Fetching {} ({}) GET {}", name, fdc_id, url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.settings.api_key.as_str())])
            .send()?;

        if !response.status().is_success() {
            tracing::error!("FoodData Central returned status={} for {} ({})", response.status(), name, fdc_id);
            return Ok(None);
        }

        Ok(Some(response.json::<FdcFood>()?))
    }

    /// Import every food of a list into `foods_dir`
    ///
    /// Existing files are kept unless `replace` is set. A food that fails to
    /// download is recorded and the import carries on.
    pub fn import_food_list(&self, list: &FoodList, foods_dir: &Path, replace: bool) -> ImportResult<ImportSummary> {
        fs::create_dir_all(foods_dir)?;
        let mut summary = ImportSummary::default();

        for entry in &list.foods {
            let path = foods_dir.join(food_file_name(&entry.name, entry.fdc_id));
            if path.exists() && !replace {
                tracing::info!("Skipping {} ({}): {} exists", entry.name, entry.fdc_id, path.display());
                summary.skipped_existing.push(path);
                continue;
            }

            let fdc = match self.download(entry.fdc_id, &entry.name) {
                Ok(Some(fdc)) => fdc,
                Ok(None) => {
                    summary.failed.push(entry.name.clone());
                    continue;
                }
                Err(e) => {
                    tracing::error!("Failed to import {} ({}): {}", entry.name, entry.fdc_id, e);
                    summary.failed.push(entry.name.clone());
                    continue;
                }
            };

            let food = map_fdc_food(&entry.name, entry.fdc_id, &fdc, &self.settings, &mut summary.diagnostics);
            write_food_file(&path, &food)?;
            tracing::info!("Imported to {}", path.display());
            summary.imported.push(path);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{read_json, ConfigPaths};
    use crate::models::RawFoodRecord;
    use crate::nutrition::Nutrient;
    use std::collections::BTreeMap;

    fn settings() -> FoodDataCentralSettings {
        FoodDataCentralSettings {
            nutrients_ids: BTreeMap::from([
                ("energy".to_string(), vec![1008]),
                ("protein".to_string(), vec![1003]),
                ("calcium".to_string(), vec![1087]),
                ("vitamin-d".to_string(), vec![1114]),
                ("sugar".to_string(), vec![2000, 1063]),
            ]),
            ..FoodDataCentralSettings::default()
        }
    }

    fn fdc_food() -> FdcFood {
        serde_json::from_str(
            r#"{
                "description": "Chicken, broilers or fryers, breast, meat only, cooked, roasted",
                "foodNutrients": [
                    {"amount": 165, "nutrient": {"id": 1008, "name": "Energy", "unitName": "kcal"}},
                    {"amount": 31.0, "nutrient": {"id": 1003, "name": "Protein", "unitName": "G"}},
                    {"amount": 15, "nutrient": {"id": 1087, "name": "Calcium, Ca", "unitName": "MG"}},
                    {"amount": 0.1, "nutrient": {"id": 1114, "name": "Vitamin D (D2 + D3)", "unitName": "UG"}},
                    {"amount": 1.2, "nutrient": {"id": 1063, "name": "Sugars, Total", "unitName": "BOGUS"}},
                    {"amount": 65.3, "nutrient": {"id": 1051, "name": "Water", "unitName": "G"}},
                    {"nutrient": {"id": 1004, "name": "Total lipid (fat)", "unitName": "G"}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_food_file_name() {
        assert_eq!(food_file_name("Chicken Breast", 171477), "chicken_breast_171477.json");
    }

    #[test]
    fn test_map_fdc_food_converts_units() {
        let mut diags = Diagnostics::new();
        let food = map_fdc_food("Chicken Breast", 171477, &fdc_food(), &settings(), &mut diags);

        assert_eq!(food.amount, FDC_REFERENCE_AMOUNT);
        assert_eq!(food.get(Nutrient::Energy), 165.0);
        assert_eq!(food.get(Nutrient::Protein), 31.0);
        assert!((food.get(Nutrient::Calcium) - 0.015).abs() < 1e-12);
        assert!((food.get(Nutrient::VitaminD) - 0.0000001).abs() < 1e-15);
        // unmapped id and missing amount stay zero
        assert_eq!(food.get(Nutrient::Water), 0.0);
        assert_eq!(food.get(Nutrient::Fat), 0.0);
        assert_eq!(food.get(Nutrient::Sugar), 0.0);
        assert_eq!(
            diags.iter().next(),
            Some(&Diagnostic::UnknownUnit { unit: "BOGUS".to_string() })
        );
    }

    #[test]
    fn test_written_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut diags = Diagnostics::new();
        let food = map_fdc_food("Chicken Breast", 171477, &fdc_food(), &settings(), &mut diags);
        let path = dir.path().join(food_file_name(&food.name, 171477));

        write_food_file(&path, &food).unwrap();

        let raw: RawFoodRecord = read_json(&path).unwrap();
        let loaded = FoodRecord::from_raw(raw, &mut diags).unwrap();
        assert_eq!(loaded.name, food.name);
        assert_eq!(loaded.description, food.description);
        for nutrient in Nutrient::all() {
            assert!((loaded.get(nutrient) - food.get(nutrient)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_import_skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::from_root(dir.path());
        fs::create_dir_all(&paths.foods_dir).unwrap();
        fs::write(paths.foods_dir.join("chicken_breast_171477.json"), "{}").unwrap();

        let list: FoodList =
            serde_json::from_str(r#"{"foods": [{"fdc_id": 171477, "name": "Chicken Breast"}]}"#).unwrap();
        let client = FoodDataCentral::new(settings()).unwrap();
        let summary = client.import_food_list(&list, &paths.foods_dir, false).unwrap();

        assert_eq!(summary.skipped_existing.len(), 1);
        assert!(summary.imported.is_empty());
        assert!(summary.failed.is_empty());
    }
}
