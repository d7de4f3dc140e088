#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use recipe_finder::{ApiKey, FinderConfig, RecipeFinder};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const SEARCH_PATH: &str = "/recipes/complexSearch";

pub struct TestEnvironment {
    pub server: MockServer,
    pub finder: Arc<RecipeFinder>,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let config = FinderConfig::new(server.uri(), ApiKey::new(API_KEY)).with_timeout(timeout);
        let finder = RecipeFinder::from_config(&config).expect("Failed to build finder");

        Self {
            server,
            finder: Arc::new(finder),
        }
    }

    /// Answers every search with `status` and `body`.
    pub async fn respond_with(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Query pairs of every request the stub server received, in order.
    pub async fn received_queries(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .collect()
    }
}

pub fn recipe(id: i32, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "image": format!("https://img.spoonacular.com/recipes/{}-312x231.jpg", id),
        "imageType": "jpg"
    })
}

pub fn results_body(recipes: Vec<Value>) -> Value {
    let total = recipes.len();
    json!({
        "results": recipes,
        "offset": 0,
        "number": 10,
        "totalResults": total
    })
}
