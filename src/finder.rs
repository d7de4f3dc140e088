//! The search flow: criteria in, store updated.
//!
//! [`RecipeFinder`] ties the [`SpoonacularClient`] to the [`ResultStore`].
//! Searches may overlap; each one takes a sequence number and its results are
//! only committed if no newer search has been issued in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::client::{RecipeSummary, SearchCriteria, SpoonacularClient};
use crate::config::FinderConfig;
use crate::error::{ConfigError, SearchError};
use crate::store::{ResultStore, Snapshot};

/// What happened to the results of a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The store now holds these results.
    Applied { sequence: u64, count: usize },
    /// A newer search was issued before this one resolved; results were dropped.
    Superseded { sequence: u64, count: usize },
}

impl SearchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SearchOutcome::Applied { .. })
    }

    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::Applied { count, .. } | SearchOutcome::Superseded { count, .. } => *count,
        }
    }
}

pub struct RecipeFinder {
    client: SpoonacularClient,
    store: ResultStore,
    issued: AtomicU64,
}

impl RecipeFinder {
    pub fn new(client: SpoonacularClient) -> Self {
        Self {
            client,
            store: ResultStore::new(),
            issued: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &FinderConfig) -> Result<Self, ConfigError> {
        let client = SpoonacularClient::new(config.base_url.clone(), config.api_key.clone(), config.timeout)?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &SpoonacularClient {
        &self.client
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn current(&self) -> Arc<[RecipeSummary]> {
        self.store.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.store.subscribe()
    }

    /// Runs one search and publishes its results.
    ///
    /// On failure the store keeps its previous contents and the error is
    /// returned for the caller to show.
    pub async fn user_requested_search(&self, criteria: SearchCriteria) -> Result<SearchOutcome, SearchError> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(
            "Search #{} started (query: {:?}, cuisine: {:?}, diet: {:?}, max calories: {:?})",
            sequence,
            criteria.free_text,
            criteria.cuisine,
            criteria.diet,
            criteria.max_calories
        );

        let recipes = match self.client.search(&criteria).await {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!("Search #{} failed ({}): {}", sequence, e.kind().as_str(), e);
                return Err(e);
            }
        };
        let count = recipes.len();

        let latest = self.issued.load(Ordering::SeqCst);
        if sequence != latest {
            tracing::info!("Search #{} superseded by #{}; dropping {} results", sequence, latest, count);
            return Ok(SearchOutcome::Superseded { sequence, count });
        }

        if self.store.commit(sequence, recipes) {
            tracing::info!("Search #{} applied {} results", sequence, count);
            Ok(SearchOutcome::Applied { sequence, count })
        } else {
            Ok(SearchOutcome::Superseded { sequence, count })
        }
    }
}
