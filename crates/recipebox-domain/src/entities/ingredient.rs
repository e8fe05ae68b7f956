//! Ingredient aggregate

use serde::Serialize;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{ImageUri, IngredientId};

/// Something a meal can be made from, keyed by its name
///
/// Description and image are replaced wholesale: build a new `Ingredient`
/// with the same id and save it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    id: IngredientId,
    description: String,
    image: Option<ImageUri>,
}

impl Ingredient {
    /// Maximum number of characters in a description
    pub const MAX_DESCRIPTION_LEN: usize = 10_000;

    pub fn new(
        id: IngredientId,
        description: impl Into<String>,
        image: Option<ImageUri>,
    ) -> DomainResult<Self> {
        let description = description.into();
        if description.chars().count() > Self::MAX_DESCRIPTION_LEN {
            return Err(DomainError::ValidationError {
                field: "description".to_string(),
                reason: format!(
                    "Description can be at most {} characters long",
                    Self::MAX_DESCRIPTION_LEN
                ),
            });
        }

        Ok(Self {
            id,
            description,
            image,
        })
    }

    pub fn id(&self) -> &IngredientId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&ImageUri> {
        self.image.as_ref()
    }
}
