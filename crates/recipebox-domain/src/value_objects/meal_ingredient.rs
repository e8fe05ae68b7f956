//! An ingredient line of a meal

use serde::Serialize;

use crate::errors::DomainResult;
use crate::services::UnitConverter;

use super::{IngredientId, Quantity, Unit};

/// Reference to an ingredient together with how much of it a meal needs
///
/// Value-equal by ingredient, quantity and preparation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealIngredient {
    ingredient: IngredientId,
    quantity: Quantity,
    preparation: Option<String>,
}

impl MealIngredient {
    pub fn new(ingredient: IngredientId, quantity: Quantity, preparation: Option<String>) -> Self {
        Self {
            ingredient,
            quantity,
            preparation,
        }
    }

    pub fn ingredient(&self) -> &IngredientId {
        &self.ingredient
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn preparation(&self) -> Option<&str> {
        self.preparation.as_deref()
    }

    /// Same line with the quantity multiplied by `ratio`
    pub fn scale_quantity(&self, ratio: f64) -> DomainResult<Self> {
        Ok(self.with_quantity(self.quantity.scale_by(ratio)?))
    }

    /// Same line with `quantity` in place of the current one
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            ingredient: self.ingredient.clone(),
            quantity,
            preparation: self.preparation.clone(),
        }
    }

    /// Same line with the quantity expressed in `unit`
    pub fn convert_quantity<C>(&self, unit: Unit, converter: &C) -> DomainResult<Self>
    where
        C: UnitConverter + ?Sized,
    {
        Ok(self.with_quantity(self.quantity.convert_to(unit, converter)?))
    }
}
