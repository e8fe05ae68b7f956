//! RecipeBox Persistence Layer
//!
//! Infrastructure layer providing the implementations of the interfaces
//! defined in `recipebox-domain`.
//!
//! ## Features
//!
//! - **In-Memory Repositories**: thread-safe, volatile storage for meals and
//!   ingredients with atomic id allocation and live counts
//! - **Unit Conversion Table**: `TableUnitConverter`, a direct-pair lookup
//!   implementing `UnitConverter`
//! - **Demo Data**: the seed catalogue loaded at process start
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                        │  conversion   │  seed          │
//! │  InMemoryMealRepository         │  TableUnit-   │  demo_meals    │
//! │  InMemoryIngredientRepository   │  Converter    │  demo_ingred.  │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │     MealRepository, IngredientRepository, UnitConverter          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use recipebox_persistence::{seed, InMemoryMealRepository};
//! use recipebox_domain::{MealId, MealRepository};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> recipebox_domain::DomainResult<()> {
//! let repo: Arc<dyn MealRepository> = Arc::new(InMemoryMealRepository::with_meals(seed::demo_meals()?));
//!
//! let bread = repo.try_get_meal(MealId::new(1)).await?;
//! assert_eq!(bread.map(|m| m.name().to_string()), Some("Bread".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod conversion;
pub mod memory;
pub mod seed;

pub use conversion::TableUnitConverter;
pub use memory::{InMemoryIngredientRepository, InMemoryMealRepository};
