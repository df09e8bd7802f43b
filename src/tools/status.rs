//! NutriMetrics Status Tool
//!
//! Provides runtime status information about the NutriMetrics service.

use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::{json_files, ConfigPaths};

/// Meal plan authoring instructions for AI assistants
pub const PLAN_INSTRUCTIONS: &str = r#"
# NutriMetrics Meal Plan Instructions

This guide explains how to write and analyze meal plans with the NutriMetrics tools.

## Overview

An analysis needs:
1. **Foods** - One JSON file per food in the `foods/` directory of the configuration
2. **Reference intakes** - A DRI table in the `dri/` directory
3. **Meal plan** - A JSON file listing meals, the foods they contain and a body-composition target

Call `config_tree` to see where the configuration directory lives and which files it holds.

---

## Food Files

```json
{
  "name": "Chicken Breast (roasted)",
  "description": "Chicken, broilers or fryers, breast, meat only, cooked, roasted",
  "amount": 100,
  "nutrients": {"energy": 165, "protein": 31.0, "fat": 3.57, "calcium": 0.015}
}
```

- `amount` is the reference amount in grams the nutrient values describe
- Energy is in kcal, every other nutrient in **grams** (15 mg of calcium is `0.015`)
- Nutrients left out are zero
- Use `list_nutrients` for the valid identifiers

---

## Meal Plan Files

```json
{
  "name": "Sample Day",
  "unit": "g",
  "dietary_reference_intakes": "adult_male_31_50",
  "target": {
    "body_mass": 75000,
    "body_fat_percent": 18,
    "activity_factor": 1.5,
    "minimum_protein_factor": 2.0,
    "minimum_fat_factor": 0.8
  },
  "meals": [
    {"name": "Lunch", "foods": [{"food": "Chicken Breast (roasted)", "amount": 200}]}
  ]
}
```

- `unit` applies to every food amount and to `body_mass` (`g`, `mg`, `µg`)
- `food` must match a food `name` exactly; use `list_foods` to check
- `dietary_reference_intakes` names a file in `dri/` without the `.json` extension
- Comments (`//` and `/* */`) are allowed in every file

---

## Target

The target follows the Katch-McArdle formula:
- Lean body mass = body mass x (1 - body fat)
- Resting energy = 370 + 21.6 x lean mass in kg
- Basal metabolic rate = resting energy x activity factor
- Minimum protein and fat = factor x lean mass in kg

The basal metabolic rate, minimum protein and minimum fat replace the energy,
protein and fat entries of the reference intake table.

---

## Reading Results

`analyze_meal_plan` returns totals, the energy distribution, the target and the
percentage of each reference intake covered, with a band:

| Band | Percent |
|---|---|
| `---` | below 60% |
| `--` | 60% to 80% |
| `-` | 80% to 100% |
| `+` | 100% to 200% |
| `++` | 200% to 300% |
| `+++` | 300% and above |

Warnings list unknown foods, unknown units and unknown nutrients. A warning
never stops the analysis; the offending entry is skipped.
"#;

/// Status information about the running service
#[derive(Debug, Serialize)]
pub struct NutrimetricsStatus {
    /// Build information
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Configuration information
    pub config_root: String,
    pub config_initialized: bool,
    pub food_file_count: usize,
    pub dri_file_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    paths: ConfigPaths,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            start_time: Instant::now(),
            paths,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> NutrimetricsStatus {
        let build_info = BuildInfo::current();

        let count = |dir: &Path| json_files(dir).map(|files| files.len()).unwrap_or(0);

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutrimetricsStatus {
            build_profile: build_info.profile,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            config_root: self.paths.root.display().to_string(),
            config_initialized: self.paths.config_file.exists(),
            food_file_count: count(&self.paths.foods_dir),
            dri_file_count: count(&self.paths.dri_dir),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::from_root(dir.path());
        paths.initialize().unwrap();

        let status = StatusTracker::new(paths).get_status();

        assert!(status.config_initialized);
        assert_eq!(status.food_file_count, 4);
        assert_eq!(status.dri_file_count, 2);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert_ne!(status.build_profile, "unknown");
    }

    #[test]
    fn test_status_uninitialized() {
        let dir = tempfile::tempdir().unwrap();
        let status = StatusTracker::new(ConfigPaths::from_root(dir.path().join("missing"))).get_status();

        assert!(!status.config_initialized);
        assert_eq!(status.food_file_count, 0);
    }
}
