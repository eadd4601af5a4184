use chrono::NaiveDate;
use clap::Args;
use mealwise::Config;
use mealwise_mealplan::{
    CalendarStore, GeneratedPlan, MealPlanGenerator, PlanRequest, SelectionPolicy, commit,
};
use mealwise_shared::week_days;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// First day of the week to fill (YYYY-MM-DD)
    #[arg(long)]
    pub week: NaiveDate,

    /// Meals per day, 2 to 4 (overrides config file)
    #[arg(long)]
    pub meals_per_day: Option<u8>,

    /// Replace meals already planned for the week
    #[arg(long)]
    pub replace: bool,

    /// Print the plan without saving it
    #[arg(long)]
    pub dry_run: bool,

    /// Selection policy: scored or random (overrides config file)
    #[arg(long)]
    pub policy: Option<SelectionPolicy>,

    /// Seed for the random policy
    #[arg(long)]
    pub seed: Option<u64>,
}

#[tracing::instrument(skip(config))]
pub fn generate(config: &Config, args: GenerateArgs) -> anyhow::Result<()> {
    let catalog = mealwise::load_catalog(config)?;
    let store = super::open_store(config);
    let mut calendar = store.load()?;

    let request = PlanRequest::new(
        args.week,
        args.meals_per_day.unwrap_or(config.planner.meals_per_day),
        config.preferences.clone(),
    )
    .replace_existing(args.replace)
    .weekly_budget(config.planner.weekly_budget)
    .validated()?;

    let policy = args.policy.unwrap_or(config.planner.policy);
    let mut generator =
        MealPlanGenerator::with_policy(&catalog, policy, args.seed.or(config.planner.seed));
    let plan = generator.generate(&request, &calendar);

    print_plan(&plan);

    if args.dry_run {
        tracing::info!("Dry run, calendar left unchanged");
        return Ok(());
    }

    let ids = commit(&plan, &mut calendar);
    store.save(&calendar)?;

    tracing::info!(
        saved = ids.len(),
        path = %config.storage.calendar_path.display(),
        "Meal plan saved"
    );

    Ok(())
}

fn print_plan(plan: &GeneratedPlan) {
    println!(
        "Week of {}: {} meals planned, {} fallback, {} already planned",
        plan.week_start,
        plan.meals.len(),
        plan.fallback_count,
        plan.skipped.len()
    );

    for day in week_days(plan.week_start) {
        println!();
        println!("{}", day.format("%A %Y-%m-%d"));

        for meal in plan.meals_on(day) {
            match &meal.recipe {
                Some(recipe) => println!(
                    "  {:<10} {} ({} servings, {} min, ${:.2})",
                    meal.meal_type.to_string(),
                    meal.display_name(),
                    meal.servings,
                    recipe.total_time(),
                    recipe.estimated_cost
                ),
                None => println!(
                    "  {:<10} {} (fallback)",
                    meal.meal_type.to_string(),
                    meal.display_name()
                ),
            }
        }

        for (_, meal_type) in plan.skipped.iter().filter(|(d, _)| *d == day) {
            println!("  {:<10} (kept existing)", meal_type.to_string());
        }
    }

    println!();
    println!("Estimated cost: ${:.2}", plan.total_cost());
}
