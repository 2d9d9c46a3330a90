//! Mock Recipe Catalog
//!
//! Hard-coded recipes, reviews and filter options.

use recipe_core::Ingredient;
use crate::models::{Author, FilterOption, InstructionStep, RecipeDetail, RecipeSummary, Review, Reviewer};

const PLACEHOLDER: &str = "/placeholder.svg";

const CARBONARA: RecipeSummary = RecipeSummary {
    id: "1",
    title: "Классическая паста Карбонара",
    description: "Нежная паста с кремовым соусом, беконом и пармезаном. Оригинальный рецепт из Италии.",
    image: PLACEHOLDER,
    cooking_time: "25 мин",
    difficulty: "Легко",
    rating: 4.8,
    reviews_count: 156,
    category: "Паста",
};

pub static FEATURED_RECIPES: [RecipeSummary; 6] = [
    CARBONARA,
    RecipeSummary {
        id: "2",
        title: "Шоколадный фондан",
        description: "Невероятно нежный десерт с жидким шоколадным центром. Идеально для романтического ужина.",
        image: PLACEHOLDER,
        cooking_time: "35 мин",
        difficulty: "Средне",
        rating: 4.9,
        reviews_count: 89,
        category: "Десерты",
    },
    RecipeSummary {
        id: "3",
        title: "Азиатский вок с курицей",
        description: "Яркое блюдо с овощами и курицей в ароматном соусе. Здорово, вкусно и быстро.",
        image: PLACEHOLDER,
        cooking_time: "20 мин",
        difficulty: "Легко",
        rating: 4.7,
        reviews_count: 203,
        category: "Азиатская",
    },
    RecipeSummary {
        id: "4",
        title: "Минестроне с базиликом",
        description: "Питательный овощной суп с бобовыми и макаронами. Классика итальянской кухни.",
        image: PLACEHOLDER,
        cooking_time: "45 мин",
        difficulty: "Легко",
        rating: 4.6,
        reviews_count: 124,
        category: "Супы",
    },
    RecipeSummary {
        id: "5",
        title: "Классический цезарь",
        description: "Хрустящие листья романо, анчоусы, пармезан и классическая заправка. Лучший салат всех времен.",
        image: PLACEHOLDER,
        cooking_time: "15 мин",
        difficulty: "Легко",
        rating: 4.5,
        reviews_count: 78,
        category: "Салаты",
    },
    RecipeSummary {
        id: "6",
        title: "Курица в медово-горчичной глазури",
        description: "Сочная курица с золотистой корочкой и невероятно ярким вкусом. Просто в приготовлении.",
        image: PLACEHOLDER,
        cooking_time: "50 мин",
        difficulty: "Средне",
        rating: 4.8,
        reviews_count: 167,
        category: "Мясо",
    },
];

static RECIPE_DETAILS: [RecipeDetail; 1] = [RecipeDetail {
    summary: CARBONARA,
    prep_time: "10 мин",
    servings: 4,
    cuisine: "Итальянская",
    calories: 520,
    author: Author {
        name: "Анна Петрова",
        avatar: PLACEHOLDER,
        level: "Шеф-повар",
    },
    ingredients: &[
        Ingredient { name: "Спагетти", amount: "400", unit: "г" },
        Ingredient { name: "Бекон", amount: "200", unit: "г" },
        Ingredient { name: "Яйца", amount: "3", unit: "шт" },
        Ingredient { name: "Пармезан тертый", amount: "100", unit: "г" },
        Ingredient { name: "Чеснок", amount: "2", unit: "зубчика" },
        Ingredient { name: "Оливковое масло", amount: "2", unit: "ст.л." },
        Ingredient { name: "Черный перец", amount: "по вкусу", unit: "" },
        Ingredient { name: "Соль", amount: "по вкусу", unit: "" },
    ],
    instructions: &[
        InstructionStep {
            step: 1,
            title: "Подготовка ингредиентов",
            description: "Нарежьте бекон небольшими кубиками. Натрите пармезан на мелкой терке. Разбейте яйца в миску и слегка взбейте вилкой.",
            time: "5 мин",
            image: PLACEHOLDER,
        },
        InstructionStep {
            step: 2,
            title: "Варим пасту",
            description: "Поставьте большую кастрюлю с подсоленной водой на огонь. Когда вода закипит, добавьте спагетти и варите согласно инструкции на упаковке до состояния аль денте.",
            time: "10 мин",
            image: PLACEHOLDER,
        },
        InstructionStep {
            step: 3,
            title: "Готовим бекон",
            description: "На сковороде без масла обжарьте кубики бекона до золотистого цвета. Добавьте измельченный чеснок и готовьте еще 1 минуту.",
            time: "7 мин",
            image: PLACEHOLDER,
        },
        InstructionStep {
            step: 4,
            title: "Соединяем ингредиенты",
            description: "Слейте воду с пасты, оставив немного воды для соуса. Быстро смешайте горячую пасту с беконом, затем снимите с огня и добавьте яичную смесь, постоянно перемешивая.",
            time: "3 мин",
            image: PLACEHOLDER,
        },
    ],
    notes: &[
        "Важно снять сковороду с огня перед добавлением яиц, чтобы они не свернулись",
        "Используйте только свежие яйца высокого качества",
        "Подавайте немедленно после приготовления",
    ],
    tags: &["быстро", "итальянская кухня", "паста", "бекон"],
}];

static REVIEWS: [Review; 3] = [
    Review {
        id: "1",
        recipe_id: "1",
        user: Reviewer { name: "Мария К.", avatar: PLACEHOLDER },
        rating: 5,
        date: "2024-06-25",
        text: "Потрясающий рецепт! Получилось с первого раза. Семья в восторге, теперь готовлю каждую неделю.",
        helpful: 12,
    },
    Review {
        id: "2",
        recipe_id: "1",
        user: Reviewer { name: "Дмитрий С.", avatar: PLACEHOLDER },
        rating: 4,
        date: "2024-06-20",
        text: "Хороший рецепт, но я добавил немного сливок для более кремовой текстуры. Рекомендую попробовать!",
        helpful: 8,
    },
    Review {
        id: "3",
        recipe_id: "1",
        user: Reviewer { name: "Елена М.", avatar: PLACEHOLDER },
        rating: 5,
        date: "2024-06-18",
        text: "Точно следовала инструкции - получилось идеально! Спасибо за подробное описание каждого шага.",
        helpful: 15,
    },
];

// ========================
// Filter Options
// ========================

pub const CATEGORIES: &[FilterOption] = &[
    FilterOption { id: "breakfast", label: "Завтраки", icon: "☕" },
    FilterOption { id: "lunch", label: "Обеды", icon: "🍴" },
    FilterOption { id: "dinner", label: "Ужины", icon: "👨‍🍳" },
    FilterOption { id: "desserts", label: "Десерты", icon: "🍰" },
    FilterOption { id: "snacks", label: "Закуски", icon: "🍪" },
    FilterOption { id: "drinks", label: "Напитки", icon: "☕" },
    FilterOption { id: "salads", label: "Салаты", icon: "🥗" },
    FilterOption { id: "soups", label: "Супы", icon: "🍲" },
];

pub const CUISINES: &[&str] = &[
    "Русская",
    "Итальянская",
    "Французская",
    "Азиатская",
    "Американская",
    "Мексиканская",
    "Греческая",
    "Индийская",
];

pub const DIFFICULTIES: &[FilterOption] = &[
    FilterOption { id: "easy", label: "Легко", icon: "" },
    FilterOption { id: "medium", label: "Средне", icon: "" },
    FilterOption { id: "hard", label: "Сложно", icon: "" },
];

pub const DIETS: &[&str] = &[
    "Вегетарианская",
    "Веганская",
    "Безглютеновая",
    "Низкокалорийная",
    "Кето",
    "Палео",
];

/// Quick category badges under the hero search box
pub const QUICK_CATEGORIES: &[&str] = &["Мясо", "Десерты", "Салаты", "Паста", "Азиатская"];

// ========================
// Lookups
// ========================

pub fn find_summary(id: &str) -> Option<&'static RecipeSummary> {
    FEATURED_RECIPES.iter().find(|recipe| recipe.id == id)
}

/// Full recipe by id; only some recipes have detail pages
pub fn find_detail(id: &str) -> Option<&'static RecipeDetail> {
    RECIPE_DETAILS.iter().find(|detail| detail.summary.id == id)
}

/// Reviews of one recipe, newest first
pub fn reviews_for(recipe_id: &str) -> Vec<&'static Review> {
    let mut reviews: Vec<_> = REVIEWS.iter().filter(|r| r.recipe_id == recipe_id).collect();
    reviews.sort_by(|a, b| b.date.cmp(a.date));
    reviews
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_featured_ids_unique() {
        let ids: HashSet<_> = FEATURED_RECIPES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), FEATURED_RECIPES.len());
    }

    #[test]
    fn test_detail_matches_featured_summary() {
        for detail in RECIPE_DETAILS.iter() {
            let summary = find_summary(detail.summary.id).expect("detail without featured card");
            assert_eq!(*summary, detail.summary);
        }
    }

    #[test]
    fn test_find_detail() {
        let carbonara = find_detail("1").expect("carbonara detail");
        assert_eq!(carbonara.servings, 4);
        assert_eq!(carbonara.ingredients.len(), 8);
        assert!(find_detail("2").is_none());
        assert!(find_detail("missing").is_none());
    }

    #[test]
    fn test_carbonara_scales_for_eight() {
        let carbonara = find_detail("1").unwrap();
        let scaled: Vec<String> = carbonara
            .ingredients
            .iter()
            .map(|ingredient| ingredient.display(carbonara.servings, 8))
            .collect();

        assert_eq!(scaled[0], "800.0 г");
        assert_eq!(scaled[2], "6.0 шт");
        assert_eq!(scaled[7], "по вкусу");
    }

    #[test]
    fn test_instruction_steps_are_sequential() {
        let carbonara = find_detail("1").unwrap();
        for (index, step) in carbonara.instructions.iter().enumerate() {
            assert_eq!(step.step as usize, index + 1);
        }
    }

    #[test]
    fn test_reviews_newest_first() {
        let reviews = reviews_for("1");
        assert_eq!(reviews.len(), 3);
        assert!(reviews.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert!(reviews_for("6").is_empty());
    }
}
