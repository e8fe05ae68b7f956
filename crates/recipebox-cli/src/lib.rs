//! RecipeBox command-line front end
//!
//! Composition root: loads configuration, installs logging, seeds the
//! in-memory repositories and wires them into a [`MealService`]. The binary
//! in `main.rs` is a thin shell over [`commands::execute`].
//!
//! [`MealService`]: recipebox_application::MealService

pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod logging;

pub use crate::bootstrap::AppContext;
pub use crate::commands::{execute, Cli, Command, CommandError};
pub use crate::config::{AppConfig, ConfigError, ConfigLoader};
