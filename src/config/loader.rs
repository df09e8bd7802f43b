//! Loaders for the files under the configuration directory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::ConfigResult;
use super::jsonc::read_json;
use super::paths::ConfigPaths;
use super::settings::Settings;
use crate::models::{FoodLibrary, MealPlanSpec, RawFoodRecord};
use crate::nutrition::diagnostics::Diagnostics;
use crate::nutrition::dri::ReferenceIntakes;

#[derive(Debug, Deserialize)]
struct DriFile {
    #[serde(default)]
    dietary_reference_intakes: HashMap<String, f64>,
}

/// Read `config.json`
pub fn load_settings(path: &Path) -> ConfigResult<Settings> {
    read_json(path)
}

/// JSON files of a directory, sorted by file name
pub fn json_files(dir: &Path) -> ConfigResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Load every food file of the foods directory
///
/// A file that cannot be parsed is logged and skipped; the rest of the
/// library still loads.
pub fn load_food_library(dir: &Path, diagnostics: &mut Diagnostics) -> ConfigResult<FoodLibrary> {
    let mut records = Vec::new();
    for path in json_files(dir)? {
        match read_json::<RawFoodRecord>(&path) {
            Ok(raw) => records.push(raw),
            Err(e) => tracing::error!("Skipping food file: {}", e),
        }
    }

    let library = FoodLibrary::from_raw_records(records, diagnostics);
    tracing::info!(dir = %dir.display(), foods = library.len(), "Loaded food library");
    Ok(library)
}

/// Load the DRI table `dri/<name>.json` of the configuration directory
///
/// A missing table is logged and yields an empty mapping, so the plan still
/// builds without ratios.
pub fn load_reference_intakes(paths: &ConfigPaths, name: &str) -> ConfigResult<ReferenceIntakes> {
    let path = paths.dri_file(name);
    if !path.exists() {
        tracing::error!("DRI file '{}' does not exist", path.display());
        return Ok(ReferenceIntakes::new());
    }

    let file: DriFile = read_json(&path)?;
    Ok(ReferenceIntakes::from_keyed(&file.dietary_reference_intakes))
}

/// Read a meal plan file
pub fn load_meal_plan_spec(path: &Path) -> ConfigResult<MealPlanSpec> {
    read_json(path)
}
