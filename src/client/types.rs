//! Type definitions for the Spoonacular search API.
//!
//! ## Key Types
//!
//! - [`SearchCriteria`] - Free text and optional filters for one search request
//! - [`RecipeSummary`] - Minimal projection of a recipe used for list display
//! - [`SearchResponse`] - Envelope of the `recipes/complexSearch` endpoint
//!
//! ## API Compatibility
//!
//! Spoonacular returns a lot more than we use (nutrition, servings, paging
//! counters). Unknown fields are ignored; only `results[].id`, `title` and
//! `image` are required.

use serde::{Deserialize, Serialize};

/// User-chosen filters for a single search.
///
/// Absent fields are left out of the request entirely. A present but empty
/// `free_text` is still sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Free-text query (`query`)
    pub free_text: Option<String>,
    /// Cuisine filter, e.g. "italian" (`cuisine`)
    pub cuisine: Option<String>,
    /// Diet filter, e.g. "vegetarian" (`diet`)
    pub diet: Option<String>,
    /// Upper bound on calories per serving (`maxCalories`), sent as given
    pub max_calories: Option<i32>,
}

impl SearchCriteria {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            free_text: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_max_calories(mut self, max_calories: i32) -> Self {
        self.max_calories = Some(max_calories);
        self
    }

    /// Query parameters in wire order, excluding the API key.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        if let Some(q) = &self.free_text {
            params.push(("query", q.clone()));
        }
        if let Some(c) = &self.cuisine {
            params.push(("cuisine", c.clone()));
        }
        if let Some(d) = &self.diet {
            params.push(("diet", d.clone()));
        }
        if let Some(m) = self.max_calories {
            params.push(("maxCalories", m.to_string()));
        }
        params
    }
}

/// One entry of the search results, in the shape the list view needs.
///
/// Fields are private so a summary cannot change after it was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    id: i32,
    title: String,
    #[serde(rename = "image")]
    image_url: String,
}

impl RecipeSummary {
    pub fn new(id: i32, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// Response envelope of `GET /recipes/complexSearch`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RecipeSummary>,
    /// Total matches on the server side; informational only
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<i64>,
}
