use clap::Args;
use mealwise::Config;
use mealwise_recipe::{Recipe, RecipeCategory, RecipeSource};

#[derive(Args, Debug)]
pub struct RecipesArgs {
    /// Text found in the name or description
    #[arg(long)]
    pub search: Option<String>,

    /// Recipe category, e.g. breakfast or slow-cooker
    #[arg(long)]
    pub category: Option<RecipeCategory>,

    /// Dietary tag, e.g. vegan or gluten
    #[arg(long)]
    pub tag: Option<String>,

    /// Maximum total time in minutes
    #[arg(long)]
    pub max_minutes: Option<u32>,

    /// Maximum estimated cost
    #[arg(long)]
    pub max_cost: Option<f64>,

    /// Minimum rating
    #[arg(long)]
    pub min_rating: Option<f64>,
}

fn keep(recipes: &mut Vec<&Recipe>, subset: Vec<&Recipe>) {
    recipes.retain(|recipe| subset.iter().any(|kept| std::ptr::eq(*kept, *recipe)));
}

pub fn recipes(config: &Config, args: RecipesArgs) -> anyhow::Result<()> {
    let catalog = mealwise::load_catalog(config)?;

    let mut recipes: Vec<&Recipe> = match &args.search {
        Some(text) => catalog.search(text),
        None => catalog.recipes().iter().collect(),
    };

    if let Some(category) = args.category {
        keep(&mut recipes, catalog.by_category(category));
    }
    if let Some(tag) = &args.tag {
        keep(&mut recipes, catalog.by_dietary_tag(tag));
    }
    if let Some(minutes) = args.max_minutes {
        keep(&mut recipes, catalog.quick_meals(minutes));
    }
    if let Some(cost) = args.max_cost {
        keep(&mut recipes, catalog.budget_friendly(cost));
    }
    if let Some(rating) = args.min_rating {
        keep(&mut recipes, catalog.top_rated(rating));
    }

    if recipes.is_empty() {
        println!("No recipes match");
        return Ok(());
    }

    for recipe in &recipes {
        println!(
            "{:<28} {:<12} {:>4} min  ${:>5.2}  {:.1}*  {}",
            recipe.name,
            recipe.category.to_string(),
            recipe.total_time(),
            recipe.estimated_cost,
            recipe.rating,
            recipe.dietary_tags().join(", ")
        );
    }
    println!("{} of {} recipes", recipes.len(), catalog.len());

    Ok(())
}
