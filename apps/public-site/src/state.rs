//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::view;

/// Shared application state.
///
/// The landing page has no per-request inputs, so it is rendered once.
#[derive(Clone)]
pub struct AppState {
    pub home_page: Arc<str>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        let home_page: Arc<str> = view::render_home_page().into();

        tracing::info!(bytes = home_page.len(), "Landing page rendered");

        Self {
            home_page,
            started_at: Utc::now(),
        }
    }
}
