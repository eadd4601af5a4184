use chrono::NaiveDate;
use clap::Subcommand;
use mealwise::Config;
use mealwise_mealplan::CalendarStore;

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    /// Remove a planned meal
    Remove {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        id: String,
    },
    /// Mark a planned meal as cooked
    Complete {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        id: String,
        /// Mark as not cooked instead
        #[arg(long)]
        undo: bool,
    },
}

pub fn meal(config: &Config, command: MealCommand) -> anyhow::Result<()> {
    let store = super::open_store(config);
    let mut calendar = store.load()?;

    match command {
        MealCommand::Remove { date, id } => {
            let Some(meal) = calendar.remove(date, &id) else {
                tracing::error!("meal {id} not found on {date}");
                return Ok(());
            };

            tracing::info!("removed {} from {date}", meal.display_name());
        }
        MealCommand::Complete { date, id, undo } => {
            if !calendar.set_completed(date, &id, !undo) {
                tracing::error!("meal {id} not found on {date}");
                return Ok(());
            }

            tracing::info!(completed = !undo, "meal {id} updated");
        }
    }

    store.save(&calendar)?;

    Ok(())
}
