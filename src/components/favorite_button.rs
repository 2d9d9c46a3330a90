//! Favorite Toggle Button Component

use leptos::prelude::*;

use crate::context::use_favorites;

/// Heart button bound to the favorites store
///
/// `with_label` adds "В избранное" / "В избранном" text next to the heart.
#[component]
pub fn FavoriteButton(
    recipe_id: &'static str,
    #[prop(optional)] with_label: bool,
    #[prop(into, default = "favorite-btn".to_string())] button_class: String,
) -> impl IntoView {
    let favorites = use_favorites();
    let is_favorite = move || favorites.is_favorite(recipe_id);

    view! {
        <button
            class=move || if is_favorite() { format!("{} active", button_class) } else { button_class.clone() }
            title=move || if is_favorite() { "Убрать из избранного" } else { "Добавить в избранное" }
            on:click=move |ev| {
                ev.stop_propagation();
                favorites.toggle(recipe_id);
            }
        >
            <span class="heart">{move || if is_favorite() { "♥" } else { "♡" }}</span>
            <Show when=move || with_label>
                <span class="favorite-label">
                    {move || if is_favorite() { "В избранном" } else { "В избранное" }}
                </span>
            </Show>
        </button>
    }
}
