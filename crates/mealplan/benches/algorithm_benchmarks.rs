use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use mealwise_mealplan::{
    AutoFillPreferences, MealCalendar, MealPlanGenerator, PlanRequest, ScoredStrategy,
    SelectionPolicy, filter_recipes,
};
use mealwise_recipe::{
    DietaryInfo, Difficulty, NutritionInfo, Recipe, RecipeCatalog, RecipeCategory,
    RecipeIngredient,
};

/// Create a recipe with properties spread by `id`
fn create_bench_recipe(id: usize) -> Recipe {
    let category = match id % 4 {
        0 => RecipeCategory::Breakfast,
        1 => RecipeCategory::Lunch,
        2 => RecipeCategory::Dinner,
        _ => RecipeCategory::Snack,
    };

    Recipe {
        id: format!("recipe_{}", id),
        name: format!("Recipe {}", id),
        description: String::new(),
        category,
        difficulty: Difficulty::Medium,
        prep_time: 5 + (id as u32 % 20),
        cook_time: 10 + (id as u32 % 35),
        servings: 4,
        ingredients: (0..8)
            .map(|i| RecipeIngredient {
                name: format!("Ingredient {}", i),
                amount: 1.0 + i as f64,
                unit: "cup".to_string(),
                aisle: i,
                estimated_price: 0.75,
                notes: None,
            })
            .collect(),
        instructions: vec!["Prepare".to_string(), "Cook".to_string()],
        nutrition: NutritionInfo {
            calories: 1200 + (id as u32 % 10) * 100,
            protein: 40.0 + (id % 30) as f64,
            carbs: 150.0,
            fat: 40.0,
            fiber: Some(10.0),
            sugar: None,
            sodium: None,
        },
        tags: vec![],
        image: String::new(),
        rating: 3.0 + (id % 20) as f64 / 10.0,
        review_count: (id as u32 * 37) % 6000,
        dietary_info: DietaryInfo {
            vegetarian: id % 2 == 0,
            ..Default::default()
        },
        estimated_cost: 4.0 + (id % 12) as f64,
        cuisine: "American".to_string(),
        author: String::new(),
    }
}

fn bench_filter_500_recipes(c: &mut Criterion) {
    let recipes: Vec<Recipe> = (0..500).map(create_bench_recipe).collect();
    let preferences = AutoFillPreferences::default()
        .with_max_cooking_time(40)
        .with_dietary_restrictions(["vegetarian"]);

    c.bench_function("filter_500_recipes", |b| {
        b.iter(|| filter_recipes(black_box(&recipes), black_box(&preferences), 12.0))
    });
}

/// Full week, four meals a day, over a 500 recipe catalog
fn bench_generate_week(c: &mut Criterion) {
    let catalog = RecipeCatalog::new((0..500).map(create_bench_recipe).collect());
    let week_start = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
    let request = PlanRequest::new(week_start, 4, AutoFillPreferences::default());
    let calendar = MealCalendar::new();

    c.bench_function("generate_week_scored", |b| {
        b.iter(|| {
            MealPlanGenerator::new(&catalog, Box::new(ScoredStrategy))
                .generate(black_box(&request), black_box(&calendar))
        })
    });

    c.bench_function("generate_week_random", |b| {
        b.iter(|| {
            MealPlanGenerator::with_policy(&catalog, SelectionPolicy::Random, Some(42))
                .generate(black_box(&request), black_box(&calendar))
        })
    });
}

criterion_group!(benches, bench_filter_500_recipes, bench_generate_week);
criterion_main!(benches);
