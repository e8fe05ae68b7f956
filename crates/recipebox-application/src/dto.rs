//! Commands accepted by the application services
//!
//! Commands carry raw caller input (plain strings and numbers). Turning them
//! into domain values is the only place validation errors originate.

pub mod ingredient;
pub mod meal;

// Re-export commonly used commands
pub use ingredient::*;
pub use meal::*;
