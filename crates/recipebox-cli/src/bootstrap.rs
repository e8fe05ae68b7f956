//! Wiring of repositories, converter and service

use std::sync::Arc;

use tracing::info;

use recipebox_application::MealService;
use recipebox_domain::DomainResult;
use recipebox_persistence::{
    seed, InMemoryIngredientRepository, InMemoryMealRepository, TableUnitConverter,
};

use crate::config::AppConfig;

/// Service type used by the binary
pub type InMemoryMealService = MealService<InMemoryMealRepository, InMemoryIngredientRepository>;

/// Everything a command needs, built once per process
pub struct AppContext {
    pub config: AppConfig,
    pub service: InMemoryMealService,
}

impl AppContext {
    /// Build the in-memory stores, seeding them when configured
    pub fn build(config: AppConfig) -> DomainResult<Self> {
        let (meals, ingredients) = if config.seed_demo_data {
            seed::seeded_repositories()?
        } else {
            info!("Starting with empty repositories");
            (
                InMemoryMealRepository::new(),
                InMemoryIngredientRepository::new(),
            )
        };

        let service = MealService::new(
            Arc::new(meals),
            Arc::new(ingredients),
            Arc::new(TableUnitConverter::demo()),
        )
        .with_page_limits(config.page_limits());

        Ok(Self { config, service })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_seeded() {
        let context = AppContext::build(AppConfig::default()).unwrap();
        let page = context.service.list_meals(None, 0).await.unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[tokio::test]
    async fn test_build_empty_with_limits() {
        let config = AppConfig {
            seed_demo_data: false,
            default_page_size: 3,
            max_page_size: 7,
            ..Default::default()
        };
        let context = AppContext::build(config).unwrap();

        assert_eq!(context.service.page_limits().max_page_size, 7);
        let page = context.service.list_ingredients(None, 0).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
