use chrono::NaiveDate;
use mealwise::Config;
use mealwise_mealplan::CalendarStore;
use mealwise_shopping::GroceryList;

pub fn grocery(config: &Config, week: NaiveDate) -> anyhow::Result<()> {
    let calendar = super::open_store(config).load()?;
    let list = GroceryList::for_week(&calendar, week);

    print!("{}", list);

    Ok(())
}
