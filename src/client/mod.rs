//! # Spoonacular HTTP Client
//!
//! This module provides a thin HTTP client for the Spoonacular recipe search
//! API: it turns [`SearchCriteria`] into a single GET request and parses the
//! response into [`RecipeSummary`] values.
//!
//! ## Modules
//!
//! - [`auth`] - API key wrapper that keeps the key out of logs
//! - [`client`] - HTTP client implementation
//! - [`types`] - Type definitions for API requests and responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use recipe_finder::client::{ApiKey, SearchCriteria, SpoonacularClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SpoonacularClient::new(
//!     "https://api.spoonacular.com",
//!     ApiKey::new("your-api-key"),
//!     Duration::from_secs(30),
//! )?;
//!
//! let recipes = client.search(&SearchCriteria::text("pasta")).await?;
//! println!("Found {} recipes", recipes.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use auth::ApiKey;
pub use client::SpoonacularClient;
pub use types::*;
