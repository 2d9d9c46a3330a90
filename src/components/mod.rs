//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod star_rating;
mod favorite_button;
mod recipe_card;
mod recipe_filters;
mod ingredient_list;
mod review_section;
mod index_page;
mod recipe_detail;

pub use header::Header;
pub use star_rating::{StarRating, StarPicker};
pub use favorite_button::FavoriteButton;
pub use recipe_card::RecipeCard;
pub use recipe_filters::RecipeFilters;
pub use ingredient_list::IngredientList;
pub use review_section::ReviewSection;
pub use index_page::IndexPage;
pub use recipe_detail::RecipeDetail;
