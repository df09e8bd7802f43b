//! NutriMetrics MCP Server Implementation
//!
//! Implements the MCP server with all NutriMetrics tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::ConfigPaths;
use crate::tools::foods;
use crate::tools::plans;
use crate::tools::reports;
use crate::tools::status::StatusTracker;

/// NutriMetrics MCP Service
#[derive(Clone)]
pub struct NutrimetricsService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    paths: ConfigPaths,
    tool_router: ToolRouter<NutrimetricsService>,
}

impl NutrimetricsService {
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(paths.clone()))),
            paths,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListNutrientsParams {
    /// Category display name, e.g. "Vitamins" or "Amino Acids"
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Case-insensitive text matched against food names and descriptions
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodParams {
    /// Exact food name
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMealPlanParams {
    /// Path to a meal plan file, or the name of a plan in the samples directory
    pub plan: String,
    /// Write a Markdown report next to the plan file
    #[serde(default)]
    pub write_report: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealPlanReportParams {
    /// Path to a meal plan file, or the name of a plan in the samples directory
    pub plan: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutrimetricsService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriMetrics service including build info, configuration directory, and process information")]
    async fn nutrimetrics_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for writing food files and meal plans and for reading analysis results. Call this before authoring a meal plan.")]
    fn plan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLAN_INSTRUCTIONS)]))
    }

    #[tool(description = "Show the configuration directory tree: config.json, foods, reference intake tables and sample plans")]
    fn config_tree(&self) -> Result<CallToolResult, McpError> {
        let tree = self.paths.config_tree().map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(tree)]))
    }

    // --- Catalog & Foods ---

    #[tool(description = "List the nutrient catalog with identifiers, display units and categories, optionally for one category")]
    fn list_nutrients(&self, Parameters(p): Parameters<ListNutrientsParams>) -> Result<CallToolResult, McpError> {
        let result = foods::list_nutrients(p.category.as_deref()).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List foods in the food library with their macronutrients, optionally filtered by name or description")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = foods::list_foods(&self.paths, p.query.as_deref()).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the full nutrient profile of a food in display units")]
    fn get_food(&self, Parameters(p): Parameters<GetFoodParams>) -> Result<CallToolResult, McpError> {
        let result = foods::get_food(&self.paths, &p.name).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(food) => serde_json::to_string_pretty(&food),
            None => serde_json::to_string_pretty(&serde_json::json!({"error": "Food not found", "name": p.name})),
        }
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Meal Plans ---

    #[tool(description = "Analyze a meal plan: nutrient totals, energy distribution, Katch-McArdle target and percentage of each reference intake with an adequacy band")]
    fn analyze_meal_plan(&self, Parameters(p): Parameters<AnalyzeMealPlanParams>) -> Result<CallToolResult, McpError> {
        let result = plans::analyze_meal_plan(&self.paths, &p.plan, p.write_report)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Render the Markdown report of a meal plan without writing it to disk")]
    fn meal_plan_report(&self, Parameters(p): Parameters<MealPlanReportParams>) -> Result<CallToolResult, McpError> {
        let plan_path = plans::resolve_plan_path(&self.paths, &p.plan);
        let (plan, settings) = plans::load_meal_plan(&self.paths, &plan_path).map_err(|e| McpError::internal_error(e, None))?;
        let result = reports::generate_meal_plan_report(&plan, &settings.report, None)
            .map_err(|e| McpError::internal_error(e, None))?;
        Ok(CallToolResult::success(vec![Content::text(result.markdown)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutrimetricsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrimetrics".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriMetrics".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriMetrics - Nutrient analysis of meal plans against dietary reference intakes. \
                 IMPORTANT: Call plan_instructions before writing a meal plan. \
                 Configuration: config_tree, nutrimetrics_status. \
                 Catalog: list_nutrients. Foods: list_foods, get_food. \
                 Meal plans: analyze_meal_plan (optionally writes a Markdown report), meal_plan_report."
                    .into(),
            ),
        }
    }
}
