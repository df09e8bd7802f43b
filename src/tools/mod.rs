//! NutriMetrics Tools module
//!
//! Tool implementations behind the MCP server and the command-line binaries.

pub mod foods;
pub mod import;
pub mod plans;
pub mod reports;
pub mod status;
