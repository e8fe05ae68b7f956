//! Meal-related commands

use serde::{Deserialize, Serialize};

use recipebox_domain::{
    errors::DomainResult, CookingInstructions, IngredientId, Meal, MealIngredient, MealName,
    Quantity, ServingSize, Unit,
};

/// One ingredient line as supplied by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredientInput {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub preparation: Option<String>,
}

impl MealIngredientInput {
    /// Validate into a domain ingredient line
    pub fn to_domain(&self) -> DomainResult<MealIngredient> {
        let ingredient = IngredientId::new(self.ingredient.as_str())?;
        let unit = Unit::parse(&self.unit)?;
        let quantity = Quantity::new(unit, self.quantity)?;
        Ok(MealIngredient::new(
            ingredient,
            quantity,
            self.preparation.clone(),
        ))
    }
}

fn ingredient_lines(inputs: &[MealIngredientInput]) -> DomainResult<Vec<MealIngredient>> {
    inputs.iter().map(MealIngredientInput::to_domain).collect()
}

/// Command to create a new meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMealCommand {
    pub name: String,
    pub instructions: String,
    pub feeds_num_people: u32,
    pub ingredients: Vec<MealIngredientInput>,
}

impl CreateMealCommand {
    /// Build an unsaved meal; the repository assigns its id
    pub fn to_draft(&self) -> DomainResult<Meal> {
        Ok(Meal::draft(
            MealName::new(self.name.as_str())?,
            ingredient_lines(&self.ingredients)?,
            CookingInstructions::new(self.instructions.as_str()),
            ServingSize::new(self.feeds_num_people)?,
        ))
    }
}

/// Command to change some fields of an existing meal
///
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMealCommand {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub feeds_num_people: Option<u32>,
    #[serde(default)]
    pub ingredients: Option<Vec<MealIngredientInput>>,
}

impl UpdateMealCommand {
    /// True when the command would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.instructions.is_none()
            && self.feeds_num_people.is_none()
            && self.ingredients.is_none()
    }

    /// Apply the present fields to a copy of `meal`
    ///
    /// Either every present field is applied or `meal` is left untouched.
    pub fn apply_to(&self, meal: &Meal) -> DomainResult<Meal> {
        let ingredients = match &self.ingredients {
            Some(inputs) => Some(ingredient_lines(inputs)?),
            None => None,
        };

        let mut updated = meal.clone();
        if let Some(name) = &self.name {
            updated.change_name(name.as_str())?;
        }
        if let Some(feeds) = self.feeds_num_people {
            updated.change_serving_size(feeds)?;
        }
        if let Some(instructions) = &self.instructions {
            updated.change_instructions(instructions.as_str());
        }
        if let Some(lines) = ingredients {
            updated.set_ingredients(lines);
        }
        Ok(updated)
    }
}
