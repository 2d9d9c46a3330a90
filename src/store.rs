//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::FilterSelection;

/// Page-level UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recipe shown on the detail page (None = landing page)
    pub selected_recipe: Option<String>,
    /// Hero search input; captured, not applied
    pub search_query: String,
    /// Whether the filter panel is shown on the landing page
    pub show_filters: bool,
    /// Filter panel selection; captured and logged, not applied
    pub filters: FilterSelection,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the detail page of a recipe
pub fn store_open_recipe(store: &AppStore, recipe_id: &str) {
    log::info!("[APP] Opening recipe {}", recipe_id);
    *store.selected_recipe().write() = Some(recipe_id.to_string());
}

/// Return to the landing page
pub fn store_close_recipe(store: &AppStore) {
    *store.selected_recipe().write() = None;
}

/// Apply a change to the filter selection and report the result
pub fn store_update_filters(store: &AppStore, change: impl FnOnce(&mut FilterSelection)) {
    change(&mut store.filters().write());
    let filters = store.filters().get_untracked();
    match serde_json::to_string(&filters) {
        Ok(json) => log::info!("[FILTERS] Changed: {}", json),
        Err(e) => log::warn!("[FILTERS] Could not encode filters: {}", e),
    }
}
