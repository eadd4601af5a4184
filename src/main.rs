use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod cli;

/// mealwise - weekly meal planning
#[derive(Parser)]
#[command(name = "mealwise")]
#[command(about = "Auto-fill weekly meal plans from a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a week with meals
    Generate(cli::generate::GenerateArgs),
    /// Print the categorized grocery list for a week
    Grocery {
        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        week: NaiveDate,
    },
    /// Print daily nutrition, the weekly average and goal progress
    Nutrition {
        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        week: NaiveDate,
    },
    /// Search the recipe catalog
    Recipes(cli::recipes::RecipesArgs),
    /// Edit a planned meal
    Meal {
        #[command(subcommand)]
        command: cli::meal::MealCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealwise::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealwise::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Generate(args) => cli::generate::generate(&config, args),
        Commands::Grocery { week } => cli::grocery::grocery(&config, week),
        Commands::Nutrition { week } => cli::nutrition::nutrition(&config, week),
        Commands::Recipes(args) => cli::recipes::recipes(&config, args),
        Commands::Meal { command } => cli::meal::meal(&config, command),
    }
}
