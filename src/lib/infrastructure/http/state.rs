//! Application state module

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::quotes::service::QuoteService;

/// Global application state
#[derive(Clone)]
pub struct AppState<Q: QuoteService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Quote service
    pub quotes: Arc<Q>,
}

impl<Q> AppState<Q>
where
    Q: QuoteService,
{
    /// Create a new application state
    pub fn new(quotes: Q) -> Self {
        Self {
            start_time: Utc::now(),
            quotes: Arc::new(quotes),
        }
    }
}

impl<Q> fmt::Debug for AppState<Q>
where
    Q: QuoteService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("quotes", &"QuoteService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::quotes::service::MockQuoteService;

#[cfg(test)]
pub fn test_state(quotes: Option<MockQuoteService>) -> AppState<MockQuoteService> {
    let quotes = quotes
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockQuoteService::new()));

    AppState {
        start_time: Utc::now(),
        quotes,
    }
}
