//! Value objects representing immutable domain concepts
//!
//! Each value object validates its input once, at construction. There are no
//! setters: changing a value means building a new one.

use std::fmt;

use serde::Serialize;

use crate::errors::{DomainError, DomainResult};

mod image_uri;
mod meal_ingredient;
mod quantity;
mod unit;

pub use image_uri::ImageUri;
pub use meal_ingredient::MealIngredient;
pub use quantity::Quantity;
pub use unit::Unit;

/// Natural key of an ingredient, e.g. "flour"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    /// Maximum number of characters in an ingredient name
    pub const MAX_LEN: usize = 200;

    /// Create an ingredient id, rejecting blank names and names over 200 characters
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                "ingredient",
                "Ingredient name cannot be empty",
            ));
        }
        if name.chars().count() > Self::MAX_LEN {
            return Err(DomainError::validation(
                "ingredient",
                format!("Name can't be longer than {} characters", Self::MAX_LEN),
            ));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a meal, at most 100 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealName(String);

impl MealName {
    pub const MAX_LEN: usize = 100;

    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.chars().count() > Self::MAX_LEN {
            return Err(DomainError::validation(
                "name",
                format!("Meal name can be at most {} characters long", Self::MAX_LEN),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text cooking instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CookingInstructions(String);

impl CookingInstructions {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Number of people a meal feeds, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServingSize(u32);

impl ServingSize {
    pub fn new(feeds_num_people: u32) -> DomainResult<Self> {
        if feeds_num_people < 1 {
            return Err(DomainError::validation(
                "feeds_num_people",
                "Serving size has to feed more than 0 people",
            ));
        }
        Ok(Self(feeds_num_people))
    }

    pub fn feeds_num_people(&self) -> u32 {
        self.0
    }

    /// Ratio of this serving size versus `other`, in people fed
    ///
    /// Never divides by zero: both sides feed at least one person.
    pub fn size_ratio_versus(&self, other: &ServingSize) -> f64 {
        f64::from(self.0) / f64::from(other.0)
    }
}

impl fmt::Display for ServingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feeds {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_id_rejects_blank() {
        assert!(IngredientId::new("").is_err());
        assert!(IngredientId::new(" ").is_err());
        assert!(IngredientId::new("\t\n").is_err());
    }

    #[test]
    fn test_ingredient_id_length_limit() {
        assert!(IngredientId::new("a".repeat(200)).is_ok());
        let err = IngredientId::new("a".repeat(201)).unwrap_err();
        assert_eq!(err.field(), "ingredient");
    }

    #[test]
    fn test_ingredient_id_keeps_name_verbatim() {
        let id = IngredientId::new("chili peppers").unwrap();
        assert_eq!(id.name(), "chili peppers");
        assert_eq!(id.to_string(), "chili peppers");
    }

    #[test]
    fn test_meal_name_limit() {
        assert!(MealName::new("").is_ok());
        assert!(MealName::new("b".repeat(100)).is_ok());
        assert!(MealName::new("b".repeat(101)).is_err());
    }

    #[test]
    fn test_meal_name_counts_characters_not_bytes() {
        // 100 two-byte characters
        assert!(MealName::new("é".repeat(100)).is_ok());
    }

    #[test]
    fn test_serving_size_rejects_zero() {
        let err = ServingSize::new(0).unwrap_err();
        assert_eq!(err.field(), "feeds_num_people");
        assert_eq!(ServingSize::new(1).unwrap().feeds_num_people(), 1);
    }

    #[test]
    fn test_serving_size_ratio() {
        let eight = ServingSize::new(8).unwrap();
        let four = ServingSize::new(4).unwrap();
        assert_eq!(eight.size_ratio_versus(&four), 2.0);
        assert_eq!(four.size_ratio_versus(&eight), 0.5);
    }
}
