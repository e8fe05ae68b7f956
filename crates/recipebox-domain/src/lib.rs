//! RecipeBox Domain Layer
//!
//! Meals and ingredients built from small, self-validating value objects.
//! Every constructor returns a [`DomainResult`], so an invalid value can never
//! be observed: a `Quantity` is never negative, a `ServingSize` always feeds at
//! least one person, an `ImageUri` always points at a supported image file.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  entities         Meal, Ingredient (aggregates)              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  value_objects    IngredientId, MealName, CookingInstructions│
//! │                   ServingSize, Unit, Quantity, ImageUri,     │
//! │                   MealIngredient                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │  services         UnitConverter (capability, implemented by  │
//! │                   infrastructure)                            │
//! │  repositories     MealRepository, IngredientRepository       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::{Ingredient, Meal, MealId};
pub use errors::{DomainError, DomainResult};
pub use repositories::{IngredientRepository, MealRepository, Page};
pub use services::UnitConverter;
pub use value_objects::*;
