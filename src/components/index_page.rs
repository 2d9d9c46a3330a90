//! Landing Page Component
//!
//! Hero with search, filter panel, featured recipes and site sections.

use leptos::prelude::*;

use crate::catalog::{FEATURED_RECIPES, QUICK_CATEGORIES};
use crate::components::{RecipeCard, RecipeFilters};
use crate::store::{use_app_store, store_open_recipe, AppStateStoreFields};

/// Features advertised in the "notes" section: (icon, title, text)
const FEATURES: &[(&str, &str, &str)] = &[
    ("♥", "Избранные рецепты", "Сохраняйте понравившиеся рецепты одним кликом"),
    ("📝", "Личные заметки", "Добавляйте свои комментарии и изменения к рецептам"),
    ("🛒", "Список покупок", "Автоматически создавайте списки ингредиентов"),
];

/// Site statistics: (value, label)
const STATS: &[(&str, &str)] = &[
    ("2,847", "Рецептов"),
    ("15,692", "Отзывов"),
    ("4.8", "Средний рейтинг"),
    ("8,542", "Пользователей"),
];

/// Footer link columns: (heading, links)
const FOOTER_LINKS: &[(&str, &[&str])] = &[
    ("Категории", &["Завтраки", "Обеды", "Ужины", "Десерты"]),
    ("Помощь", &["О нас", "Контакты", "Поддержка", "FAQ"]),
];

#[component]
fn HeroSection() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="hero">
            <span class="badge hero-badge">"🍳 Лучшие рецепты"</span>
            <h1 class="hero-title">
                "Откройте для себя"
                <span class="hero-accent">"мир вкусов"</span>
            </h1>
            <p class="hero-subtitle">
                "Тысячи проверенных рецептов с пошаговыми инструкциями, рейтингами и отзывами от настоящих кулинаров"
            </p>

            <div class="hero-search">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Поиск рецептов..."
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| *store.search_query().write() = event_target_value(&ev)
                />
            </div>

            <button
                class="outline-btn"
                on:click=move |_| {
                    let binding = store.show_filters();
                    let mut show = binding.write();
                    *show = !*show;
                }
            >
                {move || if store.show_filters().get() { "⚙ Скрыть фильтры" } else { "⚙ Показать фильтры" }}
            </button>

            <div class="quick-categories">
                {QUICK_CATEGORIES.iter().map(|category| view! {
                    <span class="badge outline">{*category}</span>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeaturedRecipes() -> impl IntoView {
    let store = use_app_store();
    let open_recipe = Callback::new(move |id: &'static str| store_open_recipe(&store, id));

    view! {
        <section class="featured">
            <div class="section-header">
                <div>
                    <h2>"Популярные рецепты"</h2>
                    <p>"Любимые блюда нашего сообщества"</p>
                </div>
                <button class="outline-btn">"Смотреть все →"</button>
            </div>

            <div class="recipe-grid">
                <For
                    each=move || FEATURED_RECIPES.iter().copied()
                    key=|recipe| recipe.id
                    children=move |recipe| view! { <RecipeCard recipe=recipe on_open=open_recipe /> }
                />
            </div>
        </section>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">"👨‍🍳 Рецепты"</div>
                    <p>"Лучшие рецепты от профессиональных поваров и любителей кулинарии."</p>
                </div>
                {FOOTER_LINKS.iter().map(|(heading, links)| view! {
                    <div>
                        <h3>{*heading}</h3>
                        <ul>
                            {links.iter().map(|link| view! { <li><a href="#">{*link}</a></li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
                <div>
                    <h3>"Соцсети"</h3>
                    <div class="social-links">
                        <a href="#">"Instagram"</a>
                        <a href="#">"YouTube"</a>
                        <a href="#">"Facebook"</a>
                    </div>
                </div>
            </div>
            <p class="copyright">"© 2024 Рецепты. Все права защищены."</p>
        </footer>
    }
}

#[component]
pub fn IndexPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <HeroSection />

        <Show when=move || store.show_filters().get()>
            <section class="filters-section">
                <RecipeFilters />
            </section>
        </Show>

        <FeaturedRecipes />

        <section class="notes-section">
            <h2>"Мои кулинарные заметки"</h2>
            <p>"Сохраняйте любимые рецепты, делайте заметки и создавайте собственную коллекцию"</p>
            <div class="feature-grid">
                {FEATURES.iter().map(|(icon, title, text)| view! {
                    <div class="feature-tile">
                        <div class="feature-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="stats-section">
            {STATS.iter().map(|(value, label)| view! {
                <div class="stat">
                    <div class="stat-value">{*value}</div>
                    <div class="stat-label">{*label}</div>
                </div>
            }).collect_view()}
        </section>

        <SiteFooter />
    }
}
