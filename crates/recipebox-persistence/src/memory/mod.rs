//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Each table sits behind a `parking_lot::RwLock`; the live count is an
//! atomic that is only written while the table's write lock is held, so it
//! never drifts from the table population, and readers load it without
//! taking the lock.

mod ingredient_repository;
mod meal_repository;

pub use ingredient_repository::InMemoryIngredientRepository;
pub use meal_repository::InMemoryMealRepository;
