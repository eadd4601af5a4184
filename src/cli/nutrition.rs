use chrono::NaiveDate;
use mealwise::Config;
use mealwise_mealplan::{CalendarStore, compare_to_goals, nutrition_for_week, weekly_average};
use mealwise_recipe::NutritionData;

pub fn nutrition(config: &Config, week: NaiveDate) -> anyhow::Result<()> {
    let calendar = super::open_store(config).load()?;
    let days = nutrition_for_week(&calendar, week);

    if days.is_empty() {
        println!("No meals planned for the week of {}", week);
        return Ok(());
    }

    println!("Nutrition for the week of {}", week);
    for (day, nutrition) in &days {
        print_row(&day.format("%a %Y-%m-%d").to_string(), nutrition);
    }

    let average = weekly_average(&days);
    println!();
    print_row("Average", &average);

    let progress = compare_to_goals(&average, &config.goals);
    println!();
    println!(
        "Goal progress: calories {:.0}%, protein {:.0}%, carbs {:.0}%, fat {:.0}%",
        progress.calories, progress.protein, progress.carbs, progress.fat
    );

    Ok(())
}

fn print_row(label: &str, nutrition: &NutritionData) {
    println!(
        "  {:<16} {:>5} kcal  protein {:>6.1}g  carbs {:>6.1}g  fat {:>6.1}g",
        label, nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
    );
}
