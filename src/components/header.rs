//! Site Header Component
//!
//! Brand, navigation links and the favorites counter.

use leptos::prelude::*;

use crate::context::use_favorites;
use crate::store::{use_app_store, store_close_recipe};

const NAV_LINKS: &[&str] = &["Главная", "Каталог", "Избранное", "Профиль"];

/// Sticky site header
#[component]
pub fn Header() -> impl IntoView {
    let favorites = use_favorites();
    let store = use_app_store();

    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <button class="brand" on:click=move |_| store_close_recipe(&store)>
                    <span class="brand-icon">"👨‍🍳"</span>
                    <span class="brand-title">"Рецепты"</span>
                </button>

                <nav class="site-nav">
                    {NAV_LINKS.iter().enumerate().map(|(index, label)| {
                        view! {
                            <a href="#" class=if index == 0 { "nav-link active" } else { "nav-link" }>
                                {*label}
                            </a>
                        }
                    }).collect_view()}
                </nav>

                <div class="header-actions">
                    <button class="icon-btn" title="Поиск">"🔍"</button>
                    <button class="icon-btn favorites-btn" title="Избранное">
                        "♥"
                        <Show when=move || { favorites.count() > 0 }>
                            <span class="favorites-count">{move || favorites.count()}</span>
                        </Show>
                    </button>
                    <button class="login-btn">"👤 Вход"</button>
                </div>
            </div>
        </header>
    }
}
