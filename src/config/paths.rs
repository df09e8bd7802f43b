//! Configuration directory layout
//!
//! The configuration root holds `config.json`, a `foods/` directory with one
//! JSON file per food, a `dri/` directory with the reference intake tables
//! and a `samples/` directory with example meal plans.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};

/// Environment variable overriding the configuration root
pub const HOME_ENV_VAR: &str = "NUTRIMETRICS_HOME";

/// Directory name used under the user's home when no override is set
pub const DEFAULT_DIR_NAME: &str = ".nutrimetrics";

/// Default files written into a fresh configuration directory
const DEFAULT_FILES: &[(&str, &str)] = &[
    ("config.json", include_str!("../../resources/config.json")),
    (
        "dri/adult_male_31_50.json",
        include_str!("../../resources/dri/adult_male_31_50.json"),
    ),
    (
        "dri/adult_female_31_50.json",
        include_str!("../../resources/dri/adult_female_31_50.json"),
    ),
    (
        "foods/chicken_breast_roasted.json",
        include_str!("../../resources/foods/chicken_breast_roasted.json"),
    ),
    (
        "foods/rice_white_cooked.json",
        include_str!("../../resources/foods/rice_white_cooked.json"),
    ),
    (
        "foods/broccoli_raw.json",
        include_str!("../../resources/foods/broccoli_raw.json"),
    ),
    ("foods/olive_oil.json", include_str!("../../resources/foods/olive_oil.json")),
    (
        "samples/meal_plan.json",
        include_str!("../../resources/samples/meal_plan.json"),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub foods_dir: PathBuf,
    pub dri_dir: PathBuf,
    pub samples_dir: PathBuf,
}

impl ConfigPaths {
    /// Layout rooted at an explicit directory
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_file: root.join("config.json"),
            foods_dir: root.join("foods"),
            dri_dir: root.join("dri"),
            samples_dir: root.join("samples"),
            root,
        }
    }

    /// Resolve the configuration root from the environment or the home directory
    pub fn resolve() -> ConfigResult<Self> {
        if let Ok(dir) = std::env::var(HOME_ENV_VAR) {
            if !dir.trim().is_empty() {
                return Ok(Self::from_root(dir));
            }
        }

        dirs::home_dir()
            .map(|home| Self::from_root(home.join(DEFAULT_DIR_NAME)))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Path of the DRI table with the given name
    pub fn dri_file(&self, name: &str) -> PathBuf {
        self.dri_dir.join(format!("{}.json", name))
    }

    /// Create missing directories and write the default files that do not exist yet.
    ///
    /// Existing files are never overwritten. Returns the files that were written.
    pub fn initialize(&self) -> ConfigResult<Vec<PathBuf>> {
        for dir in [&self.root, &self.foods_dir, &self.dri_dir, &self.samples_dir] {
            fs::create_dir_all(dir)?;
        }

        let mut written = Vec::new();
        for (relative, contents) in DEFAULT_FILES {
            let path = self.root.join(relative);
            if path.exists() {
                continue;
            }
            fs::write(&path, contents)?;
            tracing::info!(path = %path.display(), "Wrote default configuration file");
            written.push(path);
        }

        Ok(written)
    }

    /// Render the configuration directory as an indented tree
    pub fn config_tree(&self) -> ConfigResult<String> {
        let mut out = format!("{}\n", self.root.display());
        render_dir(&self.root, 1, &mut out)?;
        Ok(out)
    }
}

fn render_dir(dir: &Path, depth: usize, out: &mut String) -> ConfigResult<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            out.push_str(&format!("{}{}/\n", "  ".repeat(depth), name));
            render_dir(&path, depth + 1, out)?;
        } else {
            out.push_str(&format!("{}{}\n", "  ".repeat(depth), name));
        }
    }
    Ok(())
}
