//! Shared application state.

use crate::catalog::{seed_properties, Property};
use crate::config::HubConfig;

/// Read-only state shared by every handler.
///
/// The catalog is seeded once and stays fixed for the process lifetime:
/// no handler adds, edits, or removes a property, so no lock is needed.
pub struct AppState {
    pub config: HubConfig,
    pub properties: Vec<Property>,
}

impl AppState {
    pub fn new(config: HubConfig) -> Self {
        Self {
            properties: seed_properties(),
            config,
        }
    }
}
