//! Recipe Core
//!
//! Browser-independent logic behind the recipes UI:
//! - storage: key-value persistence abstraction
//! - favorites: persisted set of favorite recipe ids
//! - scaling: serving-size driven ingredient amounts
//! - filters: filter panel selection model
//! - rating: star rating helpers

mod error;
pub mod storage;
pub mod favorites;
pub mod scaling;
pub mod filters;
pub mod rating;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use scaling::{scale_amount, increment_servings, decrement_servings, Ingredient, MIN_SERVINGS};
pub use filters::FilterSelection;
pub use rating::{filled_stars, clamp_user_rating, MAX_STARS};
