//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ephemeris::Ephemeris;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ephemeris session opened at startup
    pub ephemeris: Arc<Ephemeris>,
}

impl AppState {
    /// Create a new application state around an open ephemeris session.
    pub fn new(ephemeris: Arc<Ephemeris>) -> Self {
        Self { ephemeris }
    }
}
