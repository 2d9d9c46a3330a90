//! Frontend Models
//!
//! Recipe catalog records. All content is static mock data.

use recipe_core::Ingredient;

/// Card-level recipe data shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub cooking_time: &'static str,
    pub difficulty: &'static str,
    pub rating: f32,
    pub reviews_count: u32,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Author {
    pub name: &'static str,
    pub avatar: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstructionStep {
    pub step: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub image: &'static str,
}

/// Full recipe page data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeDetail {
    pub summary: RecipeSummary,
    pub prep_time: &'static str,
    /// Serving count the ingredient amounts are authored for
    pub servings: u32,
    pub cuisine: &'static str,
    pub calories: u32,
    pub author: Author,
    pub ingredients: &'static [Ingredient<'static>],
    pub instructions: &'static [InstructionStep],
    pub notes: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reviewer {
    pub name: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Review {
    pub id: &'static str,
    pub recipe_id: &'static str,
    pub user: Reviewer,
    pub rating: u8,
    /// ISO date, e.g. "2024-06-25"
    pub date: &'static str,
    pub text: &'static str,
    pub helpful: u32,
}

/// Filter panel option with an id and a display label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Initials for an avatar fallback: first letter of each word, at most two
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Анна Петрова"), "АП");
        assert_eq!(initials("Мария К."), "МК");
        assert_eq!(initials("Ёжик"), "Ё");
        assert_eq!(initials(""), "");
    }
}
