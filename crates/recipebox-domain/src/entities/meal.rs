//! Meal Aggregate Root
//!
//! - Identity assigned once by a repository, never reassigned
//! - Every mutator rebuilds the value object it replaces, so validation
//!   always re-runs and a failed call leaves the meal untouched
//! - Exclusive ownership of the ingredient list

use std::fmt;

use serde::Serialize;

use crate::errors::DomainResult;
use crate::value_objects::{CookingInstructions, MealIngredient, MealName, ServingSize};

/// Repository-assigned meal identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MealId(u64);

impl MealId {
    /// Id carried by a meal that has not been stored yet
    pub const UNASSIGNED: MealId = MealId(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        *self != Self::UNASSIGNED
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Meal Aggregate Root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    id: MealId,
    name: MealName,
    instructions: CookingInstructions,
    /// Ordered; duplicates are the caller's responsibility
    ingredients: Vec<MealIngredient>,
    serving_size: ServingSize,
}

impl Meal {
    pub fn new(
        id: MealId,
        name: MealName,
        ingredients: Vec<MealIngredient>,
        instructions: CookingInstructions,
        serving_size: ServingSize,
    ) -> Self {
        Self {
            id,
            name,
            instructions,
            ingredients,
            serving_size,
        }
    }

    /// A meal that has not been given an identity yet
    pub fn draft(
        name: MealName,
        ingredients: Vec<MealIngredient>,
        instructions: CookingInstructions,
        serving_size: ServingSize,
    ) -> Self {
        Self::new(MealId::UNASSIGNED, name, ingredients, instructions, serving_size)
    }

    /// Copy of this meal carrying `id`; used by repositories when storing a draft
    pub fn with_id(&self, id: MealId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &MealName {
        &self.name
    }

    pub fn instructions(&self) -> &CookingInstructions {
        &self.instructions
    }

    pub fn ingredients(&self) -> &[MealIngredient] {
        &self.ingredients
    }

    pub fn serving_size(&self) -> ServingSize {
        self.serving_size
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = MealName::new(name)?;
        Ok(())
    }

    pub fn change_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = CookingInstructions::new(instructions);
    }

    /// Replace the whole ingredient list
    pub fn set_ingredients(&mut self, ingredients: Vec<MealIngredient>) {
        self.ingredients = ingredients;
    }

    /// Change how many people the meal feeds without touching quantities
    pub fn change_serving_size(&mut self, feeds_num_people: u32) -> DomainResult<()> {
        self.serving_size = ServingSize::new(feeds_num_people)?;
        Ok(())
    }

    /// Scale every ingredient so the meal feeds `new_serving_size`
    ///
    /// Quantities are multiplied by `new / current`. All lines are scaled
    /// before anything is installed.
    pub fn scale_to(&mut self, new_serving_size: ServingSize) -> DomainResult<()> {
        let ratio = new_serving_size.size_ratio_versus(&self.serving_size);
        let scaled = self
            .ingredients
            .iter()
            .map(|line| line.scale_quantity(ratio))
            .collect::<DomainResult<Vec<_>>>()?;

        self.ingredients = scaled;
        self.serving_size = new_serving_size;
        Ok(())
    }
}
