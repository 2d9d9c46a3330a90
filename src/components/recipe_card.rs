//! Recipe Card Component
//!
//! Landing page tile for one featured recipe.

use leptos::prelude::*;

use crate::models::RecipeSummary;
use crate::components::{FavoriteButton, StarRating};

#[component]
pub fn RecipeCard(
    recipe: RecipeSummary,
    #[prop(into)] on_open: Callback<&'static str>,
) -> impl IntoView {
    let id = recipe.id;

    view! {
        <div class="recipe-card" on:click=move |_| on_open.run(id)>
            <div class="recipe-card-image">
                <img src=recipe.image alt=recipe.title />
                <span class="badge category-badge">{recipe.category}</span>
                <FavoriteButton recipe_id=id button_class="favorite-btn card-favorite" />
            </div>

            <div class="recipe-card-body">
                <h3 class="recipe-card-title">{recipe.title}</h3>
                <p class="recipe-card-description">{recipe.description}</p>

                <div class="recipe-card-meta">
                    <span class="meta-item">"⏱ " {recipe.cooking_time}</span>
                    <span class="meta-item">"👨‍🍳 " {recipe.difficulty}</span>
                </div>

                <div class="recipe-card-footer">
                    <div class="recipe-card-rating">
                        <StarRating rating=recipe.rating />
                        <span class="rating-value">{recipe.rating}</span>
                        <span class="reviews-count">{format!("({} отз.)", recipe.reviews_count)}</span>
                    </div>
                    <button
                        class="outline-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_open.run(id);
                        }
                    >
                        "Посмотреть"
                    </button>
                </div>
            </div>
        </div>
    }
}
