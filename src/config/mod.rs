//! Configuration directory, settings and data file loading

pub mod error;
pub mod jsonc;
pub mod loader;
pub mod paths;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use jsonc::{parse_str, read_json, strip_comments};
pub use loader::{json_files, load_food_library, load_meal_plan_spec, load_reference_intakes, load_settings};
pub use paths::{ConfigPaths, DEFAULT_DIR_NAME, HOME_ENV_VAR};
pub use settings::{FoodDataCentralSettings, ReportSettings, Settings, DEFAULT_FDC_API_URL};
