//! Filter Selection
//!
//! State of the recipe filter panel. Selections are captured and reported,
//! not applied to a dataset.

use serde::Serialize;

/// Cooking time slider: (min, max, step) in minutes
pub const COOKING_TIME_RANGE: (u32, u32, u32) = (5, 180, 5);
pub const DEFAULT_MAX_COOKING_MINUTES: u32 = 60;

/// Minimum rating slider: (min, max, step) in stars
pub const RATING_RANGE: (f32, f32, f32) = (1.0, 5.0, 0.5);
pub const DEFAULT_MIN_RATING: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub categories: Vec<String>,
    pub cuisines: Vec<String>,
    pub difficulties: Vec<String>,
    pub diets: Vec<String>,
    pub max_cooking_minutes: u32,
    pub min_rating: f32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            cuisines: Vec::new(),
            difficulties: Vec::new(),
            diets: Vec::new(),
            max_cooking_minutes: DEFAULT_MAX_COOKING_MINUTES,
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl FilterSelection {
    pub fn set_category(&mut self, id: &str, checked: bool) {
        set_checked(&mut self.categories, id, checked);
    }

    pub fn set_cuisine(&mut self, cuisine: &str, checked: bool) {
        set_checked(&mut self.cuisines, cuisine, checked);
    }

    pub fn set_difficulty(&mut self, id: &str, checked: bool) {
        set_checked(&mut self.difficulties, id, checked);
    }

    pub fn set_diet(&mut self, diet: &str, checked: bool) {
        set_checked(&mut self.diets, diet, checked);
    }

    pub fn is_category_selected(&self, id: &str) -> bool {
        contains(&self.categories, id)
    }

    pub fn is_cuisine_selected(&self, cuisine: &str) -> bool {
        contains(&self.cuisines, cuisine)
    }

    pub fn is_difficulty_selected(&self, id: &str) -> bool {
        contains(&self.difficulties, id)
    }

    pub fn is_diet_selected(&self, diet: &str) -> bool {
        contains(&self.diets, diet)
    }

    /// Clamp to the slider range and snap to its step
    pub fn set_max_cooking_minutes(&mut self, minutes: u32) {
        let (min, max, step) = COOKING_TIME_RANGE;
        let clamped = minutes.clamp(min, max);
        self.max_cooking_minutes = min + (clamped - min + step / 2) / step * step;
    }

    /// Clamp to the slider range and snap to its step
    pub fn set_min_rating(&mut self, rating: f32) {
        let (min, max, step) = RATING_RANGE;
        let clamped = if rating.is_nan() { min } else { rating.clamp(min, max) };
        self.min_rating = min + ((clamped - min) / step).round() * step;
    }

    /// Checked options across all groups; sliders are not counted
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.cuisines.len() + self.difficulties.len() + self.diets.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn set_checked(list: &mut Vec<String>, value: &str, checked: bool) {
    if checked {
        if !contains(list, value) {
            list.push(value.to_string());
        }
    } else {
        list.retain(|existing| existing != value);
    }
}

fn contains(list: &[String], value: &str) -> bool {
    list.iter().any(|existing| existing == value)
}
