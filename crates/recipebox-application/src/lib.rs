//! RecipeBox Application Layer
//!
//! Implements the meal and ingredient use cases on top of the domain
//! repositories. This is the surface a transport layer (HTTP handlers, CLI
//! commands) talks to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Services              │ Commands                   │ Errors            │
//! │  ─────────             │ ────────                   │ ──────            │
//! │  MealService           │ CreateMealCommand          │ ApplicationError  │
//! │  PageLimits            │ UpdateMealCommand          │                   │
//! │                        │ CreateIngredientCommand    │                   │
//! │                        │ UpdateIngredientCommand    │                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                     │
//! │  Aggregates, Value Objects, Repository Traits, UnitConverter            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Input Mapping**: turn raw caller input into validated value objects
//! - **Use Case Orchestration**: read, mutate and save aggregates
//! - **Error Mapping**: translate domain errors to application-level errors
//!
//! Unknown ids and taken names are reported as `Option`/`bool`, never as
//! errors; what status code they become is the transport layer's call.

pub mod dto;
pub mod errors;
pub mod services;

// Re-export commonly used types
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::*;
