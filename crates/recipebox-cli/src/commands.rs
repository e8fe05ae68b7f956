//! Command-line interface definition and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;
use thiserror::Error;

use recipebox_application::ApplicationError;
use recipebox_domain::MealId;

use crate::bootstrap::InMemoryMealService;

#[derive(Parser, Debug)]
#[command(name = "recipebox")]
#[command(about = "Browse meals and ingredients, scale recipes and convert units")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List meals ordered by id
    Meals {
        /// Page size (defaults to the configured page size)
        #[arg(short, long)]
        count: Option<usize>,

        /// Number of meals to skip
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
    /// Show one meal, optionally scaled
    Meal {
        /// Meal id
        id: u64,

        /// Scale quantities to feed this many people
        #[arg(short, long)]
        feeds: Option<u32>,
    },
    /// List ingredients ordered by name
    Ingredients {
        #[arg(short, long)]
        count: Option<usize>,

        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
    /// Show one ingredient
    Ingredient {
        /// Ingredient name
        name: String,
    },
    /// Convert a quantity between units
    Convert {
        value: f64,
        from: String,
        to: String,
    },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Run one command against the service and return its JSON output
pub async fn execute(
    service: &InMemoryMealService,
    command: Command,
) -> Result<Value, CommandError> {
    let output = match command {
        Command::Meals { count, offset } => {
            serde_json::to_value(service.list_meals(count, offset).await?)?
        }
        Command::Meal { id, feeds } => {
            let id = MealId::new(id);
            let meal = match feeds {
                Some(feeds) => service.get_meal_for(id, feeds).await?,
                None => service.get_meal(id).await?,
            };
            let meal = meal.ok_or_else(|| CommandError::NotFound(format!("Meal {}", id)))?;
            serde_json::to_value(meal)?
        }
        Command::Ingredients { count, offset } => {
            serde_json::to_value(service.list_ingredients(count, offset).await?)?
        }
        Command::Ingredient { name } => {
            let ingredient = service
                .get_ingredient(&name)
                .await?
                .ok_or_else(|| CommandError::NotFound(format!("Ingredient '{}'", name)))?;
            serde_json::to_value(ingredient)?
        }
        Command::Convert { value, from, to } => {
            serde_json::to_value(service.convert_quantity(value, &from, &to)?)?
        }
    };
    Ok(output)
}
