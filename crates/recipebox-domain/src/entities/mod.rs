//! Domain aggregates
//!
//! `Meal` and `Ingredient` are the two aggregate roots. Both own their value
//! objects outright; callers get clones and persist changes through a
//! repository.

mod ingredient;
mod meal;

pub use ingredient::Ingredient;
pub use meal::{Meal, MealId};
