//! Application Services
//!
//! Services orchestrate use cases by coordinating domain aggregates,
//! repositories and the unit converter.

mod meal_service;

pub use meal_service::{MealService, PageLimits};
