//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::AccessLogStore;
use crate::geocoding::Geocoder;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Handlers share nothing else:
/// the access log store hands out pooled connections and the geocoder is
/// stateless.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    access_logs: Arc<dyn AccessLogStore>,
    geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(access_logs: Arc<dyn AccessLogStore>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                access_logs,
                geocoder,
            }),
        }
    }

    /// Get a reference to the access log store.
    #[must_use]
    pub fn access_logs(&self) -> &dyn AccessLogStore {
        self.inner.access_logs.as_ref()
    }

    /// Get a reference to the geocoding client.
    #[must_use]
    pub fn geocoder(&self) -> &dyn Geocoder {
        self.inner.geocoder.as_ref()
    }
}
