//! Star Rating Components

use leptos::prelude::*;
use recipe_core::{clamp_user_rating, filled_stars, MAX_STARS};

/// Read-only row of five stars
#[component]
pub fn StarRating(rating: f32) -> impl IntoView {
    let filled = filled_stars(rating);

    view! {
        <span class="stars">
            {(0..MAX_STARS).map(|i| {
                view! {
                    <span class=if i < filled { "star filled" } else { "star" }>"★"</span>
                }
            }).collect_view()}
        </span>
    }
}

/// Clickable stars for the review form
#[component]
pub fn StarPicker(
    rating: ReadSignal<u8>,
    set_rating: WriteSignal<u8>,
) -> impl IntoView {
    view! {
        <span class="stars interactive">
            {(0..MAX_STARS).map(|i| {
                let value = clamp_user_rating(i as u8 + 1);
                view! {
                    <span
                        class={move || if usize::from(rating.get()) > i { "star filled" } else { "star" }}
                        on:click=move |_| set_rating.set(value)
                    >
                        "★"
                    </span>
                }
            }).collect_view()}
        </span>
    }
}
