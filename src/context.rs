//! Favorites Context
//!
//! The favorites store shared with every component via Leptos Context API.

use leptos::prelude::*;
use recipe_core::FavoritesStore;

use crate::storage::BrowserStorage;

/// Reactive handle to the persisted favorites
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    store: RwSignal<FavoritesStore<BrowserStorage>>,
}

impl FavoritesContext {
    /// Load favorites from localStorage
    pub fn load() -> Self {
        Self {
            store: RwSignal::new(FavoritesStore::load(BrowserStorage)),
        }
    }

    /// Flip favorite state of a recipe
    pub fn toggle(&self, recipe_id: &str) {
        self.store.update(|store| {
            let added = store.toggle(recipe_id);
            log::info!("[FAVORITES] {} {}", if added { "Added" } else { "Removed" }, recipe_id);
        });
    }

    /// Reactive membership check
    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.store.with(|store| store.is_favorite(recipe_id))
    }

    /// Reactive favorites count
    pub fn count(&self) -> usize {
        self.store.with(|store| store.count())
    }
}

/// Get the favorites handle from context
pub fn use_favorites() -> FavoritesContext {
    expect_context::<FavoritesContext>()
}
