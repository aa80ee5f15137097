//! Root Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by the root component and handed down as props; it is never
//! registered as ambient context.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, info};

use crate::goals::GoalList;
use crate::models::{Goal, GoalId};

/// State owned by the root container
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All goals in insertion order
    pub goals: GoalList,
    /// Whether the goal input overlay is shown
    pub form_visible: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub fn new_app_store() -> AppStore {
    Store::new(AppState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Show the goal input overlay
pub fn store_open_form(store: &AppStore) {
    debug!("opening goal form");
    *store.form_visible().write() = true;
}

/// Hide the goal input overlay
pub fn store_close_form(store: &AppStore) {
    debug!("closing goal form");
    *store.form_visible().write() = false;
}

/// Append a goal and hide the overlay
pub fn store_add_goal(store: &AppStore, text: String) -> GoalId {
    let len = text.len();
    let id = store.goals().write().push(text);
    info!(%id, len, "goal added");
    store_close_form(store);
    id
}

/// Remove a goal by ID; unknown IDs are ignored
pub fn store_remove_goal(store: &AppStore, id: GoalId) -> Option<Goal> {
    let removed = store.goals().write().remove(id);
    info!(%id, found = removed.is_some(), "goal deleted");
    removed
}
