//! Ingredient-related commands

use serde::{Deserialize, Serialize};

use recipebox_domain::{errors::DomainResult, ImageUri, Ingredient, IngredientId};

fn parse_image(image_url: Option<&str>) -> DomainResult<Option<ImageUri>> {
    image_url.map(ImageUri::new).transpose()
}

/// Command to create a new ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIngredientCommand {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateIngredientCommand {
    pub fn to_domain(&self) -> DomainResult<Ingredient> {
        Ingredient::new(
            IngredientId::new(self.name.as_str())?,
            self.description.as_str(),
            parse_image(self.image_url.as_deref())?,
        )
    }
}

/// Command to replace the description and image of an ingredient
///
/// The name is the key and cannot change. `description` is required; a
/// missing `image_url` clears the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIngredientCommand {
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UpdateIngredientCommand {
    /// Build the replacement ingredient stored under `id`
    pub fn to_domain(&self, id: IngredientId) -> DomainResult<Ingredient> {
        Ingredient::new(
            id,
            self.description.as_str(),
            parse_image(self.image_url.as_deref())?,
        )
    }
}
