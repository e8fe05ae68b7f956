//! Meal Application Service
//!
//! Orchestrates the meal and ingredient use cases. Stateless apart from its
//! paging limits: everything mutable lives in the repositories.

use std::sync::Arc;

use tracing::{debug, info};

use recipebox_domain::{
    Ingredient, IngredientRepository, Meal, MealId, MealRepository, Page, Quantity,
    ServingSize, Unit, UnitConverter,
};

use crate::dto::{
    CreateIngredientCommand, CreateMealCommand, UpdateIngredientCommand, UpdateMealCommand,
};
use crate::errors::{ApplicationError, ApplicationResult};

/// Page size used when a caller does not ask for one, and the hard cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl PageLimits {
    /// Resolve a requested page size against the limits
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

fn repository_error(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::RepositoryError(err.to_string())
}

/// Meal Application Service
///
/// Generic over the repositories so any backend can be plugged in; the unit
/// converter is shared as a trait object.
pub struct MealService<M, I>
where
    M: MealRepository,
    I: IngredientRepository,
{
    meals: Arc<M>,
    ingredients: Arc<I>,
    converter: Arc<dyn UnitConverter>,
    limits: PageLimits,
}

impl<M, I> MealService<M, I>
where
    M: MealRepository,
    I: IngredientRepository,
{
    /// Create a new MealService with injected dependencies
    pub fn new(meals: Arc<M>, ingredients: Arc<I>, converter: Arc<dyn UnitConverter>) -> Self {
        Self {
            meals,
            ingredients,
            converter,
            limits: PageLimits::default(),
        }
    }

    /// Replace the paging limits
    pub fn with_page_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn page_limits(&self) -> PageLimits {
        self.limits
    }

    // ========================================================================
    // Meals
    // ========================================================================

    /// One page of meals, ordered by id
    pub async fn list_meals(
        &self,
        count: Option<usize>,
        offset: usize,
    ) -> ApplicationResult<Page<Meal>> {
        let count = self.limits.resolve(count);
        debug!(count, offset, "Listing meals");
        self.meals
            .get_meals(count, offset)
            .await
            .map_err(repository_error)
    }

    pub async fn get_meal(&self, id: MealId) -> ApplicationResult<Option<Meal>> {
        self.meals.try_get_meal(id).await.map_err(repository_error)
    }

    /// A meal with quantities scaled to feed `feeds_num_people`
    ///
    /// Only the returned copy is scaled; the stored meal is unchanged.
    pub async fn get_meal_for(
        &self,
        id: MealId,
        feeds_num_people: u32,
    ) -> ApplicationResult<Option<Meal>> {
        let serving_size = ServingSize::new(feeds_num_people)?;
        let Some(mut meal) = self.get_meal(id).await? else {
            return Ok(None);
        };
        meal.scale_to(serving_size)?;
        debug!(meal_id = %id, feeds_num_people, "Scaled meal");
        Ok(Some(meal))
    }

    /// Validate and store a new meal under a freshly allocated id
    pub async fn create_meal(&self, cmd: CreateMealCommand) -> ApplicationResult<(Meal, bool)> {
        let draft = cmd.to_draft()?;
        let (meal, added) = self.meals.add_meal(draft).await.map_err(repository_error)?;
        if added {
            info!(meal_id = %meal.id(), name = %meal.name(), "Created meal");
        }
        Ok((meal, added))
    }

    /// Apply a partial update to a stored meal
    ///
    /// Returns `None` when no meal has that id, including when it is deleted
    /// between the read and the write. Validation failures leave the stored
    /// meal untouched.
    pub async fn update_meal(
        &self,
        id: MealId,
        cmd: UpdateMealCommand,
    ) -> ApplicationResult<Option<Meal>> {
        let Some(current) = self.get_meal(id).await? else {
            return Ok(None);
        };
        if cmd.is_empty() {
            return Ok(Some(current));
        }

        let updated = cmd.apply_to(&current)?;
        let saved = self
            .meals
            .try_replace_meal(updated)
            .await
            .map_err(repository_error)?;
        if saved.is_some() {
            info!(meal_id = %id, "Updated meal");
        }
        Ok(saved)
    }

    /// Returns whether a meal was removed
    pub async fn delete_meal(&self, id: MealId) -> ApplicationResult<bool> {
        let removed = self.meals.try_delete_meal(id).await.map_err(repository_error)?;
        if removed {
            info!(meal_id = %id, "Deleted meal");
        }
        Ok(removed)
    }

    // ========================================================================
    // Ingredients
    // ========================================================================

    /// One page of ingredients, ordered by name
    pub async fn list_ingredients(
        &self,
        count: Option<usize>,
        offset: usize,
    ) -> ApplicationResult<Page<Ingredient>> {
        let count = self.limits.resolve(count);
        debug!(count, offset, "Listing ingredients");
        self.ingredients
            .get_ingredients(count, offset)
            .await
            .map_err(repository_error)
    }

    pub async fn get_ingredient(&self, name: &str) -> ApplicationResult<Option<Ingredient>> {
        self.ingredients
            .try_get_ingredient(name)
            .await
            .map_err(repository_error)
    }

    /// Store a new ingredient; `false` when the name is already taken
    pub async fn create_ingredient(
        &self,
        cmd: CreateIngredientCommand,
    ) -> ApplicationResult<(Ingredient, bool)> {
        let ingredient = cmd.to_domain()?;
        let added = self
            .ingredients
            .add_ingredient(ingredient.clone())
            .await
            .map_err(repository_error)?;
        if added {
            info!(ingredient = %ingredient.id(), "Created ingredient");
        } else {
            debug!(ingredient = %ingredient.id(), "Ingredient name already taken");
        }
        Ok((ingredient, added))
    }

    /// Replace the description and image of an existing ingredient
    ///
    /// Returns `None` when no ingredient has that name, including when it is
    /// deleted between the read and the write.
    pub async fn update_ingredient(
        &self,
        name: &str,
        cmd: UpdateIngredientCommand,
    ) -> ApplicationResult<Option<Ingredient>> {
        let Some(current) = self.get_ingredient(name).await? else {
            return Ok(None);
        };

        let replacement = cmd.to_domain(current.id().clone())?;
        let saved = self
            .ingredients
            .try_replace_ingredient(replacement)
            .await
            .map_err(repository_error)?;
        if let Some(ingredient) = &saved {
            info!(ingredient = %ingredient.id(), "Updated ingredient");
        }
        Ok(saved)
    }

    /// Returns whether an ingredient was removed
    pub async fn delete_ingredient(&self, name: &str) -> ApplicationResult<bool> {
        let removed = self
            .ingredients
            .try_delete_ingredient(name)
            .await
            .map_err(repository_error)?;
        if removed {
            info!(ingredient = name, "Deleted ingredient");
        }
        Ok(removed)
    }

    // ========================================================================
    // Units
    // ========================================================================

    /// Convert `value` from one unit to another by name
    pub fn convert_quantity(&self, value: f64, from: &str, to: &str) -> ApplicationResult<Quantity> {
        let quantity = Quantity::new(Unit::parse(from)?, value)?;
        let converted = quantity.convert_to(Unit::parse(to)?, self.converter.as_ref())?;
        Ok(converted)
    }
}
