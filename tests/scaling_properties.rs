//! Property tests for scaling through the application service

use std::sync::Arc;

use proptest::prelude::*;

use recipebox_application::services::MealService;
use recipebox_domain::MealId;
use recipebox_persistence::{seed, TableUnitConverter};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Scaling a seeded meal for n people multiplies every line by n / feeds
    /// and never changes what is stored
    #[test]
    fn test_scaled_reads_leave_store_untouched(id in 1u64..=2, feeds in 1u32..500) {
        let rt = runtime();
        rt.block_on(async {
            let (meals, ingredients) = seed::seeded_repositories().unwrap();
            let service = MealService::new(
                Arc::new(meals),
                Arc::new(ingredients),
                Arc::new(TableUnitConverter::demo()),
            );

            let stored = service.get_meal(MealId::new(id)).await.unwrap().unwrap();
            let scaled = service.get_meal_for(MealId::new(id), feeds).await.unwrap().unwrap();
            let ratio = f64::from(feeds) / f64::from(stored.serving_size().feeds_num_people());

            for (before, after) in stored.ingredients().iter().zip(scaled.ingredients()) {
                prop_assert_eq!(after.quantity().value(), before.quantity().value() * ratio);
                prop_assert_eq!(after.quantity().unit(), before.quantity().unit());
            }

            let again = service.get_meal(MealId::new(id)).await.unwrap().unwrap();
            prop_assert_eq!(again, stored);
            Ok(())
        })?;
    }
}
