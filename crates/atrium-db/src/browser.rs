//! Client-side browser state for the research portal.
//!
//! `ResearchBrowser` holds the active filter, the category and client option
//! lists, the current results, and a loading flag. Every filter change issues
//! a new query tagged with a sequence number; a response is applied only if
//! no newer query has been issued since, so overlapping requests settle on the
//! latest filter regardless of completion order.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use atrium_core::entities::ResearchDataView;
use atrium_core::filter::ResearchFilter;

use crate::error::DatabaseError;
use crate::service::ResearchService;

/// The gateway operations the browser depends on.
pub trait ResearchSource {
    fn list_categories(&self) -> impl Future<Output = Result<Vec<String>, DatabaseError>>;

    fn list_clients(&self) -> impl Future<Output = Result<Vec<String>, DatabaseError>>;

    fn query_research(
        &self,
        filter: &ResearchFilter,
    ) -> impl Future<Output = Result<Vec<ResearchDataView>, DatabaseError>>;
}

impl ResearchSource for ResearchService {
    async fn list_categories(&self) -> Result<Vec<String>, DatabaseError> {
        Self::list_categories(self).await
    }

    async fn list_clients(&self) -> Result<Vec<String>, DatabaseError> {
        Self::list_clients(self).await
    }

    async fn query_research(
        &self,
        filter: &ResearchFilter,
    ) -> Result<Vec<ResearchDataView>, DatabaseError> {
        Self::query_research(self, filter).await
    }
}

/// What happened to a refresh once its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was current and replaced the results.
    Applied(usize),
    /// A newer query was issued first; the response was discarded.
    Stale,
    /// The query failed; previous results are kept.
    Failed,
}

#[derive(Debug, Default)]
struct BrowserState {
    filter: ResearchFilter,
    categories: Vec<String>,
    clients: Vec<String>,
    results: Vec<ResearchDataView>,
    in_flight: usize,
    last_error: Option<String>,
    options_error: Option<String>,
}

pub struct ResearchBrowser<S> {
    source: S,
    state: Mutex<BrowserState>,
    issued: AtomicU64,
}

/// Decrements the in-flight count when a request settles, success or not.
struct LoadingGuard<'a> {
    state: &'a Mutex<BrowserState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a Mutex<BrowserState>) -> Self {
        lock(state).in_flight += 1;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

fn lock(state: &Mutex<BrowserState>) -> MutexGuard<'_, BrowserState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: ResearchSource> ResearchBrowser<S> {
    /// A browser with an unconstrained filter and nothing loaded yet.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(BrowserState::default()),
            issued: AtomicU64::new(0),
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Load the option lists, then run the initial unfiltered query.
    pub async fn enter(&self) -> RefreshOutcome {
        self.load_options().await;
        self.refresh().await
    }

    /// Fetch categories and clients. A failed list is logged, left empty,
    /// and reported through [`Self::options_error`].
    pub async fn load_options(&self) {
        let _loading = LoadingGuard::start(&self.state);
        let mut options_error = None;

        let categories = match self.source.list_categories().await {
            Ok(categories) => categories,
            Err(error) => {
                tracing::warn!(%error, "failed to load categories");
                options_error = Some(error.to_string());
                Vec::new()
            }
        };
        let clients = match self.source.list_clients().await {
            Ok(clients) => clients,
            Err(error) => {
                tracing::warn!(%error, "failed to load clients");
                options_error = Some(error.to_string());
                Vec::new()
            }
        };

        let mut state = lock(&self.state);
        state.categories = categories;
        state.clients = clients;
        state.options_error = options_error;
    }

    /// Replace the active filter and re-query.
    pub async fn set_filter(&self, filter: ResearchFilter) -> RefreshOutcome {
        let (seq, filter) = {
            let mut state = lock(&self.state);
            state.filter = filter;
            (self.next_seq(), state.filter.clone())
        };
        self.run_query(seq, filter).await
    }

    /// Change one or more dimensions of the active filter and re-query.
    pub async fn update_filter(&self, change: impl FnOnce(&mut ResearchFilter)) -> RefreshOutcome {
        let (seq, filter) = {
            let mut state = lock(&self.state);
            change(&mut state.filter);
            (self.next_seq(), state.filter.clone())
        };
        self.run_query(seq, filter).await
    }

    /// Re-run the query for the active filter.
    pub async fn refresh(&self) -> RefreshOutcome {
        let (seq, filter) = {
            let state = lock(&self.state);
            (self.next_seq(), state.filter.clone())
        };
        self.run_query(seq, filter).await
    }

    fn next_seq(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn run_query(&self, seq: u64, filter: ResearchFilter) -> RefreshOutcome {
        let _loading = LoadingGuard::start(&self.state);
        let response = self.source.query_research(&filter).await;

        let mut state = lock(&self.state);
        if seq != self.issued.load(Ordering::SeqCst) {
            tracing::debug!(seq, "discarding stale research response");
            return RefreshOutcome::Stale;
        }

        match response {
            Ok(results) => {
                let count = results.len();
                state.results = results;
                state.last_error = None;
                RefreshOutcome::Applied(count)
            }
            Err(error) => {
                tracing::warn!(%error, "research query failed");
                state.last_error = Some(error.to_string());
                RefreshOutcome::Failed
            }
        }
    }

    pub fn filter(&self) -> ResearchFilter {
        lock(&self.state).filter.clone()
    }

    pub fn results(&self) -> Vec<ResearchDataView> {
        lock(&self.state).results.clone()
    }

    pub fn categories(&self) -> Vec<String> {
        lock(&self.state).categories.clone()
    }

    pub fn clients(&self) -> Vec<String> {
        lock(&self.state).clients.clone()
    }

    /// True while any request is outstanding.
    pub fn is_loading(&self) -> bool {
        lock(&self.state).in_flight > 0
    }

    /// Message of the most recent query failure, cleared by the next applied query.
    pub fn last_error(&self) -> Option<String> {
        lock(&self.state).last_error.clone()
    }

    /// Message of the last option-list failure, cleared when both lists load.
    /// Query outcomes never touch it.
    pub fn options_error(&self) -> Option<String> {
        lock(&self.state).options_error.clone()
    }
}
