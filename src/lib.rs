//! # Recipe Finder Library
//!
//! Searches the Spoonacular recipe API and keeps the latest result list in an
//! observable store. It consists of these components:
//!
//! ## Client Module
//!
//! The [`client`] module builds the search request from [`SearchCriteria`],
//! attaches the API key and parses the response into [`RecipeSummary`] values.
//!
//! ## Store and Finder
//!
//! The [`store`] module holds the current results and notifies subscribers on
//! every replacement. The [`finder`] module runs a search and commits its
//! results, discarding responses that were overtaken by a newer search.
//!
//! ## Server Module
//!
//! The [`server`] module exposes the finder as MCP tools so an assistant or UI
//! can trigger searches and read the current list.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use recipe_finder::{FinderConfig, RecipeFinder, RecipeFinderMcpServer, SearchCriteria};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = FinderConfig::from_env()?;
//! let finder = Arc::new(RecipeFinder::from_config(&config)?);
//!
//! // Search directly
//! finder.user_requested_search(SearchCriteria::text("pasta")).await?;
//! println!("Showing {} recipes", finder.current().len());
//!
//! // Or serve it over MCP
//! let server = RecipeFinderMcpServer::new(finder.clone());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod finder;
pub mod server;
pub mod store;

pub use client::{ApiKey, RecipeSummary, SearchCriteria, SpoonacularClient};
pub use config::FinderConfig;
pub use error::{ConfigError, ErrorKind, SearchError};
pub use finder::{RecipeFinder, SearchOutcome};
pub use server::RecipeFinderMcpServer;
pub use store::{ResultStore, Snapshot};
