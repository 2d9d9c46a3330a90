//! Recipe Detail Component
//!
//! Full recipe page: header card, instructions, reviews and a sidebar with
//! scalable ingredients, notes and tags.

use leptos::prelude::*;

use crate::catalog::{find_detail, find_summary};
use crate::components::{FavoriteButton, IngredientList, ReviewSection, StarRating};
use crate::models::{initials, InstructionStep, RecipeDetail as Recipe};
use crate::store::{use_app_store, store_close_recipe};

#[component]
fn BackButton() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="back-bar">
            <button class="ghost-btn" on:click=move |_| store_close_recipe(&store)>
                "← Назад к рецептам"
            </button>
        </div>
    }
}

#[component]
fn RecipeHeader(recipe: &'static Recipe) -> impl IntoView {
    let summary = recipe.summary;
    let stats = [
        ("⏱", summary.cooking_time.to_string(), "Приготовление"),
        ("👥", format!("{} порций", recipe.servings), "Количество"),
        ("👨‍🍳", summary.difficulty.to_string(), "Сложность"),
        ("⚡", recipe.calories.to_string(), "Калорий"),
    ];

    view! {
        <div class="card recipe-header">
            <div class="recipe-header-top">
                <div class="recipe-header-text">
                    <div class="badges">
                        <span class="badge">{summary.category}</span>
                        <span class="badge outline">{recipe.cuisine}</span>
                        <span class="badge outline">{format!("Подготовка {}", recipe.prep_time)}</span>
                    </div>
                    <h1>{summary.title}</h1>
                    <p class="recipe-description">{summary.description}</p>
                </div>
                <FavoriteButton recipe_id=summary.id with_label=true button_class="outline-btn favorite-btn" />
            </div>

            <div class="recipe-stats">
                {stats.into_iter().map(|(icon, value, label)| view! {
                    <div class="recipe-stat">
                        <div class="recipe-stat-icon">{icon}</div>
                        <div class="recipe-stat-value">{value}</div>
                        <div class="recipe-stat-label">{label}</div>
                    </div>
                }).collect_view()}
            </div>

            <div class="recipe-header-bottom">
                <div class="author">
                    <div class="avatar">
                        <img src=recipe.author.avatar alt=recipe.author.name />
                        <span class="avatar-fallback">{initials(recipe.author.name)}</span>
                    </div>
                    <div>
                        <div class="author-name">{recipe.author.name}</div>
                        <div class="author-level">{recipe.author.level}</div>
                    </div>
                </div>
                <div class="recipe-rating">
                    <StarRating rating=summary.rating />
                    <span class="rating-value">{summary.rating}</span>
                    <span class="reviews-count">{format!("({} отзывов)", summary.reviews_count)}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn InstructionSteps(steps: &'static [InstructionStep]) -> impl IntoView {
    let (active_step, set_active_step) = signal(steps.first().map(|s| s.step).unwrap_or(1));

    view! {
        <div class="card instructions-card">
            <div class="card-title">"📋 Пошаговые инструкции"</div>
            {steps.iter().map(|step| {
                let number = step.step;
                let is_active = move || active_step.get() == number;
                view! {
                    <div class=move || if is_active() { "instruction-step active" } else { "instruction-step" }>
                        <div class="step-number">{number}</div>
                        <div class="step-body">
                            <div class="step-header">
                                <h3>{step.title}</h3>
                                <span class="badge outline small">{step.time}</span>
                            </div>
                            <p>{step.description}</p>
                            <img class="step-image" src=step.image alt=step.title />
                            <button
                                class=move || if is_active() { "primary-btn small" } else { "outline-btn small" }
                                on:click=move |_| set_active_step.set(number)
                            >
                                {move || if is_active() { "Текущий шаг" } else { "Перейти к шагу" }}
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn RecipeSidebar(recipe: &'static Recipe) -> impl IntoView {
    view! {
        <aside class="recipe-sidebar">
            <IngredientList ingredients=recipe.ingredients base_servings=recipe.servings />

            <div class="card notes-card">
                <div class="card-title">"💡 Полезные советы"</div>
                {recipe.notes.iter().map(|note| view! {
                    <div class="note">
                        <span class="note-icon">"ℹ"</span>
                        <span>{*note}</span>
                    </div>
                }).collect_view()}
            </div>

            <div class="card tags-card">
                <div class="card-title">"🏷 Теги"</div>
                <div class="tags">
                    {recipe.tags.iter().map(|tag| view! {
                        <span class="badge tag">{format!("#{}", tag)}</span>
                    }).collect_view()}
                </div>
            </div>
        </aside>
    }
}

/// Recipe page, or a not-found panel for unknown ids
#[component]
pub fn RecipeDetail(#[prop(into)] recipe_id: String) -> impl IntoView {
    let Some(recipe) = find_detail(&recipe_id) else {
        log::warn!("[APP] No recipe page for {}", recipe_id);
        return view! {
            <div class="recipe-page">
                <BackButton />
                <div class="card not-found">
                    <h2>"Рецепт не найден"</h2>
                    <p>{match find_summary(&recipe_id) {
                        Some(summary) => format!("Подробное описание рецепта «{}» пока недоступно.", summary.title),
                        None => "Подробное описание этого рецепта пока недоступно.".to_string(),
                    }}</p>
                </div>
            </div>
        }
        .into_any();
    };

    view! {
        <div class="recipe-page">
            <BackButton />
            <div class="recipe-layout">
                <div class="recipe-main">
                    <RecipeHeader recipe=recipe />
                    <div class="recipe-image">
                        <img src=recipe.summary.image alt=recipe.summary.title />
                    </div>
                    <InstructionSteps steps=recipe.instructions />
                    <ReviewSection recipe_id=recipe.summary.id />
                </div>
                <RecipeSidebar recipe=recipe />
            </div>
        </div>
    }
    .into_any()
}
