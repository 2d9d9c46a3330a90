//! Ingredient List Component
//!
//! Servings stepper and ingredient amounts scaled to the chosen servings.

use leptos::prelude::*;
use recipe_core::{decrement_servings, increment_servings, Ingredient, MIN_SERVINGS};

#[component]
pub fn IngredientList(
    ingredients: &'static [Ingredient<'static>],
    /// Serving count the amounts are authored for
    base_servings: u32,
) -> impl IntoView {
    let (servings, set_servings) = signal(base_servings.max(MIN_SERVINGS));

    view! {
        <div class="card ingredients-card">
            <div class="card-title ingredients-header">
                <span>"🛒 Ингредиенты"</span>
                <div class="servings-stepper">
                    <button
                        class="outline-btn small"
                        disabled=move || servings.get() <= MIN_SERVINGS
                        on:click=move |_| set_servings.update(|n| *n = decrement_servings(*n))
                    >
                        "−"
                    </button>
                    <span class="servings-value">{move || format!("{} порций", servings.get())}</span>
                    <button
                        class="outline-btn small"
                        on:click=move |_| set_servings.update(|n| *n = increment_servings(*n))
                    >
                        "+"
                    </button>
                </div>
            </div>

            <ul class="ingredient-list">
                {ingredients.iter().map(|ingredient| {
                    view! {
                        <li class="ingredient-row">
                            <span class="ingredient-name">{ingredient.name}</span>
                            <span class="ingredient-amount">
                                {move || ingredient.display(base_servings, servings.get())}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <button class="primary-btn wide">"🛒 Добавить в список покупок"</button>
        </div>
    }
}
