use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::{RecipeSummary, SearchCriteria};
use crate::error::SearchError;
use crate::finder::{RecipeFinder, SearchOutcome};
use crate::store::Snapshot;

#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchRecipesParams {
    /// Free-text search term; may be empty
    #[serde(default)]
    pub query: Option<String>,
    /// Cuisine filter, e.g. "italian"
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Diet filter, e.g. "vegetarian"
    #[serde(default)]
    pub diet: Option<String>,
    /// Maximum calories per serving
    #[serde(default)]
    pub max_calories: Option<i32>,
}

impl From<SearchRecipesParams> for SearchCriteria {
    fn from(params: SearchRecipesParams) -> Self {
        SearchCriteria {
            free_text: params.query,
            cuisine: params.cuisine,
            diet: params.diet,
            max_calories: params.max_calories,
        }
    }
}

fn recipes_json(recipes: &[RecipeSummary]) -> Vec<serde_json::Value> {
    recipes
        .iter()
        .map(|recipe| {
            json!({
                "id": recipe.id(),
                "title": recipe.title(),
                "image_url": recipe.image_url(),
            })
        })
        .collect()
}

/// Body of a successful `search_recipes` call.
pub fn search_result_json(
    query: Option<&str>,
    outcome: SearchOutcome,
    current: &[RecipeSummary],
) -> serde_json::Value {
    let count = outcome.count();
    let interpretation = if outcome.is_applied() {
        format!(
            "Found {} recipes{}",
            count,
            query.map_or(String::new(), |q| format!(" matching '{}'", q))
        )
    } else {
        format!(
            "Found {} recipes but a newer search replaced them; showing current results",
            count
        )
    };

    json!({
        "recipes": recipes_json(current),
        "count": current.len(),
        "applied": outcome.is_applied(),
        "search_interpretation": interpretation,
    })
}

/// Body of a failed `search_recipes` call.
pub fn search_error_json(error: &SearchError) -> serde_json::Value {
    json!({
        "error": "Failed to search recipes",
        "kind": error.kind().as_str(),
        "details": error.to_string(),
    })
}

/// Body of a `current_results` call.
pub fn snapshot_json(snapshot: &Snapshot) -> serde_json::Value {
    json!({
        "recipes": recipes_json(&snapshot.recipes),
        "count": snapshot.recipes.len(),
        "sequence": snapshot.sequence,
        "updated_at": snapshot.updated_at,
    })
}

fn pretty(value: &serde_json::Value) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[derive(Clone)]
pub struct RecipeFinderMcpServer {
    finder: Arc<RecipeFinder>,
    tool_router: ToolRouter<RecipeFinderMcpServer>,
}

#[tool_router]
impl RecipeFinderMcpServer {
    /// Every session built from the same `finder` shares one result store.
    pub fn new(finder: Arc<RecipeFinder>) -> Self {
        Self {
            finder,
            tool_router: Self::tool_router(),
        }
    }

    pub fn finder(&self) -> &Arc<RecipeFinder> {
        &self.finder
    }

    /// Runs a throwaway search to confirm the service accepts our key.
    ///
    /// Does not touch the result store.
    pub async fn test_api_access(&self) -> Result<usize, SearchError> {
        let recipes = self.finder.client().search(&SearchCriteria::default()).await?;
        tracing::info!("API access test successful - found {} recipes", recipes.len());
        Ok(recipes.len())
    }

    #[tool(description = "Search Spoonacular recipes by free text with optional cuisine, diet and calorie filters. Replaces the current result list.")]
    pub async fn search_recipes(
        &self,
        Parameters(params): Parameters<SearchRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: search_recipes {:?}", params);
        let query = params.query.clone();

        match self.finder.user_requested_search(params.into()).await {
            Ok(outcome) => {
                let current = self.finder.current();
                let result = search_result_json(query.as_deref(), outcome, &current);
                Ok(CallToolResult::success(vec![Content::text(pretty(&result)?)]))
            }
            Err(e) => {
                let error = search_error_json(&e);
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Get the recipe list currently on display")]
    pub async fn current_results(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.finder.store().snapshot();
        let result = snapshot_json(&snapshot);
        Ok(CallToolResult::success(vec![Content::text(pretty(&result)?)]))
    }
}

#[tool_handler]
impl ServerHandler for RecipeFinderMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server searches the Spoonacular recipe catalogue. Use search_recipes with a query and optional cuisine, diet or max_calories filters to replace the current result list, and current_results to read the list that is on display.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
