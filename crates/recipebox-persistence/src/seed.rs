//! Demo catalogue loaded at process start

use recipebox_domain::{
    errors::DomainResult, CookingInstructions, ImageUri, Ingredient, IngredientId, Meal,
    MealId, MealIngredient, MealName, Quantity, ServingSize, Unit,
};
use tracing::info;

use crate::memory::{InMemoryIngredientRepository, InMemoryMealRepository};

const FLOUR_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/6/64/All-Purpose_Flour_%284107895947%29.jpg";
const WATER_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/2/24/Cat_drinking_water_%28ubt%29.jpeg";

fn ingredient(name: &str, description: &str, image: Option<&str>) -> DomainResult<Ingredient> {
    let image = image.map(ImageUri::new).transpose()?;
    Ingredient::new(IngredientId::new(name)?, description, image)
}

fn line(name: &str, unit: Unit, value: f64, preparation: Option<&str>) -> DomainResult<MealIngredient> {
    Ok(MealIngredient::new(
        IngredientId::new(name)?,
        Quantity::new(unit, value)?,
        preparation.map(str::to_string),
    ))
}

/// Seven demo ingredients
pub fn demo_ingredients() -> DomainResult<Vec<Ingredient>> {
    Ok(vec![
        ingredient("flour", "bake it", Some(FLOUR_IMAGE))?,
        ingredient("water", "drink it", Some(WATER_IMAGE))?,
        ingredient("yeast", "bake it", None)?,
        ingredient("chili peppers", "cook it", None)?,
        ingredient("beans", "cook it", None)?,
        ingredient("tomatoes", "cook it", None)?,
        ingredient("ground beef", "85% lean", None)?,
    ])
}

/// Bread (id 1, feeds 4) and Chili (id 2, feeds 60)
pub fn demo_meals() -> DomainResult<Vec<Meal>> {
    let bread = Meal::new(
        MealId::new(1),
        MealName::new("Bread")?,
        vec![
            line("flour", Unit::Grams, 500.0, Some("fluffed"))?,
            line("water", Unit::Milliliters, 100.0, None)?,
            line("yeast", Unit::Grams, 10.0, None)?,
        ],
        CookingInstructions::new("bake it"),
        ServingSize::new(4)?,
    );

    let chili = Meal::new(
        MealId::new(2),
        MealName::new("Chili")?,
        vec![
            line("chili peppers", Unit::Kilograms, 10.0, Some("chopped"))?,
            line("beans", Unit::Kilograms, 10.0, Some("rinsed and drained"))?,
            line("tomatoes", Unit::Kilograms, 10.0, Some("chopped"))?,
            line("ground beef", Unit::Kilograms, 10.0, None)?,
            line("water", Unit::Liters, 10.0, None)?,
        ],
        CookingInstructions::new("cook it"),
        ServingSize::new(60)?,
    );

    Ok(vec![bread, chili])
}

/// Both repositories filled with the demo catalogue
pub fn seeded_repositories() -> DomainResult<(InMemoryMealRepository, InMemoryIngredientRepository)> {
    let meals = InMemoryMealRepository::with_meals(demo_meals()?);
    let ingredients = InMemoryIngredientRepository::with_ingredients(demo_ingredients()?);
    info!(
        meals = meals.count(),
        ingredients = ingredients.count(),
        "Seeded demo data"
    );
    Ok((meals, ingredients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_domain::{IngredientRepository, MealRepository};

    #[test]
    fn test_demo_data_is_valid() {
        assert_eq!(demo_ingredients().unwrap().len(), 7);
        assert_eq!(demo_meals().unwrap().len(), 2);
    }

    #[test]
    fn test_every_meal_line_refers_to_a_seeded_ingredient() {
        let ingredients = demo_ingredients().unwrap();
        for meal in demo_meals().unwrap() {
            for line in meal.ingredients() {
                assert!(
                    ingredients.iter().any(|i| i.id() == line.ingredient()),
                    "{} is not seeded",
                    line.ingredient()
                );
            }
        }
    }

    #[tokio::test]
    async fn test_seeded_repositories() {
        let (meals, ingredients) = seeded_repositories().unwrap();
        assert_eq!(meals.count(), 2);
        assert_eq!(ingredients.count(), 7);

        let bread = meals.try_get_meal(MealId::new(1)).await.unwrap().unwrap();
        assert_eq!(bread.name().as_str(), "Bread");
        assert_eq!(bread.serving_size().feeds_num_people(), 4);
        assert_eq!(bread.ingredients()[0].preparation(), Some("fluffed"));

        let water = ingredients.try_get_ingredient("water").await.unwrap().unwrap();
        assert!(water.image().is_some());

        let (next, _) = meals.add_meal(bread.clone()).await.unwrap();
        assert_eq!(next.id().value(), 3);
    }
}
