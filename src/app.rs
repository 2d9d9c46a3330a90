//! Recipes Frontend App
//!
//! Switches between the landing page and a recipe page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::FavoritesContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::components::{Header, IndexPage, RecipeDetail};

#[component]
pub fn App() -> impl IntoView {
    let favorites = FavoritesContext::load();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(favorites);
    provide_context(store);

    view! {
        <div class="app-layout">
            <Header />
            {move || match store.selected_recipe().get() {
                Some(recipe_id) => view! { <RecipeDetail recipe_id=recipe_id /> }.into_any(),
                None => view! { <IndexPage /> }.into_any(),
            }}
        </div>
    }
}
