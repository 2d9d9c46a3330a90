//! Recipe Filters Component
//!
//! Category checkboxes plus an expandable panel with sliders, cuisines,
//! difficulties and diets. State lives in the app store.

use leptos::prelude::*;
use recipe_core::filters::{COOKING_TIME_RANGE, RATING_RANGE};
use recipe_core::FilterSelection;

use crate::catalog::{CATEGORIES, CUISINES, DIETS, DIFFICULTIES};
use crate::store::{use_app_store, store_update_filters, AppStateStoreFields};

/// One labelled checkbox bound to a filter group
#[component]
fn FilterCheckbox(
    id: &'static str,
    #[prop(into)] label: String,
    checked: Signal<bool>,
    on_toggle: impl Fn(bool) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="filter-checkbox">
            <input
                type="checkbox"
                id=id
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
pub fn RecipeFilters() -> impl IntoView {
    let store = use_app_store();
    let (expanded, set_expanded) = signal(false);

    let active_count = move || store.filters().with(|f| f.active_count());
    let selected = move |check: fn(&FilterSelection, &str) -> bool, value: &'static str| {
        Signal::derive(move || store.filters().with(|f| check(f, value)))
    };

    view! {
        <div class="filters-card">
            <div class="filters-header">
                <div class="filters-title">
                    <span>"⚙ Фильтры"</span>
                    <Show when=move || { active_count() > 0 }>
                        <span class="badge">{active_count}</span>
                    </Show>
                </div>
                <div class="filters-actions">
                    <Show when=move || { active_count() > 0 }>
                        <button
                            class="ghost-btn"
                            on:click=move |_| store_update_filters(&store, FilterSelection::clear)
                        >
                            "Очистить"
                        </button>
                    </Show>
                    <button class="ghost-btn" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                        {move || if expanded.get() { "▲" } else { "▼" }}
                    </button>
                </div>
            </div>

            <div class="filters-body">
                <div class="filter-group">
                    <h4>"Категории"</h4>
                    <div class="filter-grid four">
                        {CATEGORIES.iter().map(|category| {
                            let id = category.id;
                            view! {
                                <FilterCheckbox
                                    id=id
                                    label=format!("{} {}", category.icon, category.label)
                                    checked=selected(FilterSelection::is_category_selected, id)
                                    on_toggle=move |checked| store_update_filters(&store, |f| f.set_category(id, checked))
                                />
                            }
                        }).collect_view()}
                    </div>
                </div>

                <Show when=move || expanded.get()>
                    <div class="filter-group">
                        <h4>"Время приготовления"</h4>
                        <input
                            type="range"
                            min=COOKING_TIME_RANGE.0.to_string()
                            max=COOKING_TIME_RANGE.1.to_string()
                            step=COOKING_TIME_RANGE.2.to_string()
                            prop:value=move || store.filters().with(|f| f.max_cooking_minutes.to_string())
                            on:input=move |ev| {
                                if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                    store_update_filters(&store, |f| f.set_max_cooking_minutes(minutes));
                                }
                            }
                        />
                        <div class="range-labels">
                            <span>"5 мин"</span>
                            <span>{move || format!("До {} мин", store.filters().with(|f| f.max_cooking_minutes))}</span>
                            <span>"3 часа"</span>
                        </div>
                    </div>

                    <div class="filter-group">
                        <h4>"Минимальный рейтинг"</h4>
                        <input
                            type="range"
                            min=RATING_RANGE.0.to_string()
                            max=RATING_RANGE.1.to_string()
                            step=RATING_RANGE.2.to_string()
                            prop:value=move || store.filters().with(|f| f.min_rating.to_string())
                            on:input=move |ev| {
                                if let Ok(rating) = event_target_value(&ev).parse::<f32>() {
                                    store_update_filters(&store, |f| f.set_min_rating(rating));
                                }
                            }
                        />
                        <div class="range-labels">
                            <span>"1 ⭐"</span>
                            <span>{move || format!("От {} ⭐", store.filters().with(|f| f.min_rating))}</span>
                            <span>"5 ⭐"</span>
                        </div>
                    </div>

                    <div class="filter-group">
                        <h4>"Кухня"</h4>
                        <div class="filter-grid two">
                            {CUISINES.iter().map(|&cuisine| view! {
                                <FilterCheckbox
                                    id=cuisine
                                    label=cuisine
                                    checked=selected(FilterSelection::is_cuisine_selected, cuisine)
                                    on_toggle=move |checked| store_update_filters(&store, |f| f.set_cuisine(cuisine, checked))
                                />
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="filter-group">
                        <h4>"Сложность"</h4>
                        <div class="filter-row">
                            {DIFFICULTIES.iter().map(|difficulty| {
                                let id = difficulty.id;
                                view! {
                                    <FilterCheckbox
                                        id=id
                                        label=difficulty.label
                                        checked=selected(FilterSelection::is_difficulty_selected, id)
                                        on_toggle=move |checked| store_update_filters(&store, |f| f.set_difficulty(id, checked))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="filter-group">
                        <h4>"Диеты"</h4>
                        <div class="filter-grid two">
                            {DIETS.iter().map(|&diet| view! {
                                <FilterCheckbox
                                    id=diet
                                    label=diet
                                    checked=selected(FilterSelection::is_diet_selected, diet)
                                    on_toggle=move |checked| store_update_filters(&store, |f| f.set_diet(diet, checked))
                                />
                            }).collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
