//! Application state management.
//!
//! State is organized into logical groupings that correspond to different
//! areas of functionality. Each controller owns its own state; the UI reads
//! them through `AppState`.

mod interaction;
mod selection;
pub mod url_state;
mod viewport;

pub use interaction::{
    InteractionContext, InteractionController, TooltipContent, TooltipState, TOUCH_RELEASE_DELAY,
};
pub use selection::{MapCategory, SelectionState};
pub use viewport::{MarkerTransform, ViewportController, ViewportTransform, MARKER_RADIUS};

use crate::data::DataStore;

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Loaded datasets
    pub store: DataStore,

    /// Month, category and passport selection
    pub selection: SelectionState,

    /// Zoom and pan of the map
    pub viewport: ViewportController,

    /// Hover/touch tooltip
    pub interaction: InteractionController,

    /// Application status message displayed in top bar
    pub status_message: String,
}

impl AppState {
    pub fn new() -> Self {
        let mut selection = SelectionState::default();
        url_state::parse_from_url().apply(&mut selection);

        Self {
            store: DataStore::new(),
            selection,
            viewport: ViewportController::new(),
            interaction: InteractionController::new(),
            status_message: "Loading data...".to_string(),
        }
    }

    /// Resolves a passport requested before data was available.
    pub fn resolve_pending_passport(&mut self) {
        let Some(raw) = self.selection.pending_passport.take() else {
            return;
        };
        match self.store.index().resolve_str(&raw) {
            Some(code) => self.selection.passport = Some(code),
            None => log::warn!("Unknown passport {:?} in URL", raw),
        }
    }
}
