//! Repository interfaces for meal and ingredient storage
//!
//! Infrastructure implements these traits. Implementations own the canonical
//! copy of every aggregate: reads hand out clones, and a caller's changes only
//! become visible through `save_*`.
//!
//! Missing or already-taken keys are ordinary outcomes (`Option`/`bool`), not
//! errors. `Err` is reserved for backends that can fail.

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    entities::{Ingredient, Meal, MealId},
    errors::DomainResult,
};

/// One page of a listing plus the live total at the time of the call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, offset: usize, total_count: usize) -> Self {
        Self {
            items,
            offset,
            total_count,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Storage for meals, keyed by an allocated integer id
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Up to `count` meals after skipping `offset`, in a stable order
    async fn get_meals(&self, count: usize, offset: usize) -> DomainResult<Page<Meal>>;

    /// Find a meal by id
    async fn try_get_meal(&self, id: MealId) -> DomainResult<Option<Meal>>;

    /// Store `candidate` under a freshly allocated id
    ///
    /// The candidate's own id is ignored. Returns the stored copy and whether
    /// it was stored; ids are never handed out twice.
    async fn add_meal(&self, candidate: Meal) -> DomainResult<(Meal, bool)>;

    /// Insert or replace by `meal.id()`
    async fn save_meal(&self, meal: Meal) -> DomainResult<Meal>;

    /// Replace by `meal.id()` only if that id is stored
    ///
    /// Returns `None`, and stores nothing, when the meal is absent.
    async fn try_replace_meal(&self, meal: Meal) -> DomainResult<Option<Meal>>;

    /// Remove a meal, returning whether it existed
    async fn try_delete_meal(&self, id: MealId) -> DomainResult<bool>;
}

/// Storage for ingredients, keyed by ingredient name
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Up to `count` ingredients after skipping `offset`, in a stable order
    async fn get_ingredients(&self, count: usize, offset: usize) -> DomainResult<Page<Ingredient>>;

    /// Find an ingredient by name
    async fn try_get_ingredient(&self, name: &str) -> DomainResult<Option<Ingredient>>;

    /// Insert only if no ingredient with the same name exists
    async fn add_ingredient(&self, ingredient: Ingredient) -> DomainResult<bool>;

    /// Insert or replace by name
    async fn save_ingredient(&self, ingredient: Ingredient) -> DomainResult<Ingredient>;

    /// Replace by name only if that name is stored
    async fn try_replace_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> DomainResult<Option<Ingredient>>;

    /// Remove an ingredient, returning whether it existed
    async fn try_delete_ingredient(&self, name: &str) -> DomainResult<bool>;
}
