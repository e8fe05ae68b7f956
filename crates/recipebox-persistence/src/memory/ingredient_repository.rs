//! In-Memory Ingredient Repository Implementation

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use recipebox_domain::{
    errors::DomainResult,
    repositories::{IngredientRepository, Page},
    Ingredient,
};

/// Thread-safe in-memory implementation of IngredientRepository
///
/// Keyed by ingredient name. Ids are supplied by callers, so `add_ingredient`
/// refuses a name that is already taken instead of allocating one. Listings
/// are ordered by name.
#[derive(Debug, Default)]
pub struct InMemoryIngredientRepository {
    ingredients: RwLock<BTreeMap<String, Ingredient>>,
    live_count: AtomicUsize,
}

impl InMemoryIngredientRepository {
    /// Create a new empty in-memory ingredient repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial ingredients; a later duplicate name wins
    pub fn with_ingredients(ingredients: Vec<Ingredient>) -> Self {
        let map: BTreeMap<String, Ingredient> = ingredients
            .into_iter()
            .map(|i| (i.id().name().to_string(), i))
            .collect();
        let count = map.len();

        Self {
            ingredients: RwLock::new(map),
            live_count: AtomicUsize::new(count),
        }
    }

    /// Live number of stored ingredients
    pub fn count(&self) -> usize {
        self.live_count.load(Ordering::Acquire)
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn get_ingredients(&self, count: usize, offset: usize) -> DomainResult<Page<Ingredient>> {
        let total_count = self.count();
        let ingredients = self.ingredients.read();
        let items = ingredients
            .values()
            .skip(offset)
            .take(count)
            .cloned()
            .collect();
        Ok(Page::new(items, offset, total_count))
    }

    async fn try_get_ingredient(&self, name: &str) -> DomainResult<Option<Ingredient>> {
        let ingredients = self.ingredients.read();
        Ok(ingredients.get(name).cloned())
    }

    async fn add_ingredient(&self, ingredient: Ingredient) -> DomainResult<bool> {
        let mut ingredients = self.ingredients.write();
        match ingredients.entry(ingredient.id().name().to_string()) {
            Entry::Occupied(_) => {
                debug!(ingredient = %ingredient.id(), "Ingredient already exists");
                Ok(false)
            }
            Entry::Vacant(slot) => {
                debug!(ingredient = %ingredient.id(), "Added ingredient");
                slot.insert(ingredient);
                self.live_count.fetch_add(1, Ordering::AcqRel);
                Ok(true)
            }
        }
    }

    async fn save_ingredient(&self, ingredient: Ingredient) -> DomainResult<Ingredient> {
        let mut ingredients = self.ingredients.write();
        let key = ingredient.id().name().to_string();
        if ingredients.insert(key, ingredient.clone()).is_none() {
            self.live_count.fetch_add(1, Ordering::AcqRel);
        }
        debug!(ingredient = %ingredient.id(), "Saved ingredient");
        Ok(ingredient)
    }

    async fn try_replace_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> DomainResult<Option<Ingredient>> {
        let mut ingredients = self.ingredients.write();
        let Some(slot) = ingredients.get_mut(ingredient.id().name()) else {
            debug!(ingredient = %ingredient.id(), "Ingredient to replace is gone");
            return Ok(None);
        };
        *slot = ingredient.clone();
        debug!(ingredient = %ingredient.id(), "Replaced ingredient");
        Ok(Some(ingredient))
    }

    async fn try_delete_ingredient(&self, name: &str) -> DomainResult<bool> {
        let mut ingredients = self.ingredients.write();
        let removed = ingredients.remove(name).is_some();
        if removed {
            self.live_count.fetch_sub(1, Ordering::AcqRel);
            debug!(ingredient = name, "Deleted ingredient");
        }
        Ok(removed)
    }
}
