mod common;

use std::time::Duration;

use common::{recipe, results_body, TestEnvironment, SEARCH_PATH};
use pretty_assertions::assert_eq;
use recipe_finder::server::SearchRecipesParams;
use recipe_finder::RecipeFinderMcpServer;
use rmcp::handler::server::tool::Parameters;
use rmcp::model::CallToolResult;
use rmcp::ServerHandler;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// Parses the JSON text carried by the first content item of a tool result.
fn tool_json(result: &CallToolResult) -> Value {
    let wire = serde_json::to_value(result).expect("Tool result should serialize");
    let text = wire["content"][0]["text"]
        .as_str()
        .expect("Tool result should carry text content");
    serde_json::from_str(text).expect("Tool text should be JSON")
}

fn search(query: &str) -> Parameters<SearchRecipesParams> {
    Parameters(SearchRecipesParams {
        query: Some(query.to_string()),
        ..Default::default()
    })
}

#[test_log::test(tokio::test)]
async fn test_mcp_server_info_lists_tools() {
    let env = TestEnvironment::new().await;
    let server = RecipeFinderMcpServer::new(env.finder.clone());

    let info = server.get_info();
    let instructions = info.instructions.expect("Server should describe itself");
    assert!(instructions.contains("search_recipes"));
    assert!(instructions.contains("current_results"));
    assert!(info.capabilities.tools.is_some());
}

#[test_log::test(tokio::test)]
async fn test_search_tool_updates_shared_store() {
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(200).set_body_json(results_body(vec![
        recipe(11, "Shakshuka"),
        recipe(12, "Menemen"),
    ])))
    .await;

    let server = RecipeFinderMcpServer::new(env.finder.clone());
    let other_session = RecipeFinderMcpServer::new(env.finder.clone());

    let result = server
        .search_recipes(search("eggs"))
        .await
        .expect("Tool call should not fail at protocol level");
    assert_ne!(result.is_error, Some(true));

    let titles: Vec<String> = other_session
        .finder()
        .current()
        .iter()
        .map(|r| r.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Shakshuka".to_string(), "Menemen".to_string()]);

    let current = other_session
        .current_results()
        .await
        .expect("current_results should succeed");
    assert_ne!(current.is_error, Some(true));

    let body = tool_json(&current);
    assert_eq!(body["count"], 2);
    assert_eq!(body["sequence"], 1);
    assert!(body["updated_at"].is_string());
    assert_eq!(
        body["recipes"],
        json!([
            {"id": 11, "title": "Shakshuka", "image_url": "https://img.spoonacular.com/recipes/11-312x231.jpg"},
            {"id": 12, "title": "Menemen", "image_url": "https://img.spoonacular.com/recipes/12-312x231.jpg"}
        ])
    );
}

#[test_log::test(tokio::test)]
async fn test_superseded_search_tool_reports_current_list() {
    let env = TestEnvironment::new().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(results_body(vec![recipe(1, "Cassoulet"), recipe(2, "Ragu")]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&env.server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(vec![recipe(3, "Avocado Toast")])))
        .mount(&env.server)
        .await;

    let server = RecipeFinderMcpServer::new(env.finder.clone());
    let slow_session = server.clone();
    let slow = tokio::spawn(async move { slow_session.search_recipes(search("slow")).await });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let fast = server
        .search_recipes(search("fast"))
        .await
        .expect("Fast tool call should succeed");
    assert_eq!(tool_json(&fast)["applied"], true);

    let slow = slow
        .await
        .expect("Slow tool task panicked")
        .expect("Slow tool call should succeed");
    assert_ne!(slow.is_error, Some(true));

    let body = tool_json(&slow);
    assert_eq!(body["applied"], false);
    assert_eq!(body["count"], 1);
    assert_eq!(body["recipes"][0]["title"], "Avocado Toast");
    assert_eq!(
        body["search_interpretation"],
        "Found 2 recipes but a newer search replaced them; showing current results"
    );
}

#[test_log::test(tokio::test)]
async fn test_search_tool_reports_failures() {
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .await;

    let server = RecipeFinderMcpServer::new(env.finder.clone());
    let result = server
        .search_recipes(Parameters(SearchRecipesParams::default()))
        .await
        .expect("Tool call should not fail at protocol level");

    assert_eq!(result.is_error, Some(true));
    let body = tool_json(&result);
    assert_eq!(body["kind"], "network");
    assert!(body["details"].as_str().unwrap_or_default().contains("500"));
    assert!(env.finder.current().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_api_access_check_leaves_store_alone() {
    let env = TestEnvironment::new().await;
    env.respond_with(ResponseTemplate::new(200).set_body_json(results_body(vec![recipe(1, "Pancakes")])))
        .await;

    let server = RecipeFinderMcpServer::new(env.finder.clone());
    let found = server.test_api_access().await.expect("Access check should succeed");

    assert_eq!(found, 1);
    assert!(env.finder.current().is_empty());
    assert_eq!(env.finder.store().snapshot().sequence, 0);
}
