//! In-Memory Meal Repository Implementation

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};

use recipebox_domain::{
    errors::DomainResult,
    repositories::{MealRepository, Page},
    Meal, MealId,
};

#[derive(Debug, Default)]
struct MealTable {
    meals: BTreeMap<MealId, Meal>,
    /// Highest id ever allocated or stored; the next allocation is `last_id + 1`
    last_id: u64,
}

/// Thread-safe in-memory implementation of MealRepository
///
/// Id allocation, insertion and the live-count increment happen under one
/// write lock, so two concurrent `add_meal` calls can never observe the same
/// id and the count always matches the table. Listings are ordered by id.
///
/// # Example
///
/// ```
/// use recipebox_persistence::memory::InMemoryMealRepository;
/// use recipebox_domain::{CookingInstructions, Meal, MealName, MealRepository, ServingSize};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> recipebox_domain::DomainResult<()> {
/// let repo = InMemoryMealRepository::new();
/// let draft = Meal::draft(
///     MealName::new("Porridge")?,
///     Vec::new(),
///     CookingInstructions::new("Simmer oats in milk."),
///     ServingSize::new(1)?,
/// );
///
/// let (stored, added) = repo.add_meal(draft).await?;
/// assert!(added);
/// assert_eq!(stored.id().value(), 1);
/// assert_eq!(repo.count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryMealRepository {
    table: RwLock<MealTable>,
    live_count: AtomicUsize,
}

impl InMemoryMealRepository {
    /// Create a new empty in-memory meal repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial meals, keyed by their current ids
    pub fn with_meals(meals: Vec<Meal>) -> Self {
        let meals: BTreeMap<MealId, Meal> = meals.into_iter().map(|m| (m.id(), m)).collect();
        let last_id = meals.keys().map(|id| id.value()).max().unwrap_or(0);
        let count = meals.len();

        Self {
            table: RwLock::new(MealTable { meals, last_id }),
            live_count: AtomicUsize::new(count),
        }
    }

    /// Live number of stored meals
    pub fn count(&self) -> usize {
        self.live_count.load(Ordering::Acquire)
    }
}

#[async_trait]
impl MealRepository for InMemoryMealRepository {
    async fn get_meals(&self, count: usize, offset: usize) -> DomainResult<Page<Meal>> {
        let total_count = self.count();
        let table = self.table.read();
        let items = table
            .meals
            .values()
            .skip(offset)
            .take(count)
            .cloned()
            .collect();
        Ok(Page::new(items, offset, total_count))
    }

    async fn try_get_meal(&self, id: MealId) -> DomainResult<Option<Meal>> {
        let table = self.table.read();
        Ok(table.meals.get(&id).cloned())
    }

    async fn add_meal(&self, candidate: Meal) -> DomainResult<(Meal, bool)> {
        let mut table = self.table.write();

        let Some(next_id) = table.last_id.checked_add(1) else {
            warn!(last_id = table.last_id, "Meal id space exhausted");
            return Ok((candidate, false));
        };

        let stored = candidate.with_id(MealId::new(next_id));
        table.last_id = next_id;
        table.meals.insert(stored.id(), stored.clone());
        self.live_count.fetch_add(1, Ordering::AcqRel);

        debug!(meal_id = next_id, name = %stored.name(), "Added meal");
        Ok((stored, true))
    }

    async fn save_meal(&self, meal: Meal) -> DomainResult<Meal> {
        let mut table = self.table.write();

        table.last_id = table.last_id.max(meal.id().value());
        if table.meals.insert(meal.id(), meal.clone()).is_none() {
            self.live_count.fetch_add(1, Ordering::AcqRel);
            debug!(meal_id = %meal.id(), "Inserted meal via save");
        } else {
            debug!(meal_id = %meal.id(), "Replaced meal");
        }
        Ok(meal)
    }

    async fn try_replace_meal(&self, meal: Meal) -> DomainResult<Option<Meal>> {
        let mut table = self.table.write();
        match table.meals.get_mut(&meal.id()) {
            Some(slot) => {
                *slot = meal.clone();
                debug!(meal_id = %meal.id(), "Replaced meal");
                Ok(Some(meal))
            }
            None => {
                debug!(meal_id = %meal.id(), "Meal to replace is gone");
                Ok(None)
            }
        }
    }

    async fn try_delete_meal(&self, id: MealId) -> DomainResult<bool> {
        let mut table = self.table.write();
        let removed = table.meals.remove(&id).is_some();
        if removed {
            self.live_count.fetch_sub(1, Ordering::AcqRel);
            debug!(meal_id = %id, "Deleted meal");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_domain::{CookingInstructions, MealName, ServingSize};

    fn create_test_meal(name: &str) -> Meal {
        Meal::draft(
            MealName::new(name).unwrap(),
            Vec::new(),
            CookingInstructions::new("cook it"),
            ServingSize::new(2).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let repo = InMemoryMealRepository::new();

        let (first, added) = repo.add_meal(create_test_meal("first")).await.unwrap();
        assert!(added);
        let (second, _) = repo.add_meal(create_test_meal("second")).await.unwrap();

        assert_eq!(first.id().value(), 1);
        assert_eq!(second.id().value(), 2);
        assert_eq!(repo.count(), 2);
    }

    #[tokio::test]
    async fn test_add_ignores_candidate_id() {
        let repo = InMemoryMealRepository::new();
        let candidate = create_test_meal("soup").with_id(MealId::new(42));

        let (stored, _) = repo.add_meal(candidate).await.unwrap();
        assert_eq!(stored.id().value(), 1);
        assert!(repo.try_get_meal(MealId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryMealRepository::new();
        let (first, _) = repo.add_meal(create_test_meal("a")).await.unwrap();
        assert!(repo.try_delete_meal(first.id()).await.unwrap());

        let (second, _) = repo.add_meal(create_test_meal("b")).await.unwrap();
        assert_eq!(second.id().value(), 2);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryMealRepository::new();
        assert!(repo.try_get_meal(MealId::new(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_count() {
        let repo = InMemoryMealRepository::new();
        repo.add_meal(create_test_meal("a")).await.unwrap();

        assert!(!repo.try_delete_meal(MealId::new(99)).await.unwrap());
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice_decrements_once() {
        let repo = InMemoryMealRepository::new();
        let (meal, _) = repo.add_meal(create_test_meal("a")).await.unwrap();

        assert!(repo.try_delete_meal(meal.id()).await.unwrap());
        assert!(!repo.try_delete_meal(meal.id()).await.unwrap());
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryMealRepository::new();
        let (mut meal, _) = repo.add_meal(create_test_meal("old")).await.unwrap();

        meal.change_name("new").unwrap();
        repo.save_meal(meal.clone()).await.unwrap();

        let found = repo.try_get_meal(meal.id()).await.unwrap().unwrap();
        assert_eq!(found.name().as_str(), "new");
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_save_inserts_missing_and_raises_id_floor() {
        let repo = InMemoryMealRepository::new();
        repo.save_meal(create_test_meal("imported").with_id(MealId::new(10)))
            .await
            .unwrap();
        assert_eq!(repo.count(), 1);

        let (next, _) = repo.add_meal(create_test_meal("fresh")).await.unwrap();
        assert_eq!(next.id().value(), 11);
    }

    #[tokio::test]
    async fn test_replace_only_touches_stored_meals() {
        let repo = InMemoryMealRepository::new();
        let (mut meal, _) = repo.add_meal(create_test_meal("old")).await.unwrap();

        meal.change_name("new").unwrap();
        let replaced = repo.try_replace_meal(meal.clone()).await.unwrap();
        assert_eq!(replaced, Some(meal.clone()));

        assert!(repo.try_delete_meal(meal.id()).await.unwrap());
        assert!(repo.try_replace_meal(meal.clone()).await.unwrap().is_none());
        assert!(repo.try_get_meal(meal.id()).await.unwrap().is_none());
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_reads_are_snapshots() {
        let repo = InMemoryMealRepository::new();
        let (meal, _) = repo.add_meal(create_test_meal("stew")).await.unwrap();

        let mut copy = repo.try_get_meal(meal.id()).await.unwrap().unwrap();
        copy.change_name("changed locally").unwrap();

        let stored = repo.try_get_meal(meal.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().as_str(), "stew");
    }

    #[tokio::test]
    async fn test_paging() {
        let repo = InMemoryMealRepository::new();
        for i in 0..5 {
            repo.add_meal(create_test_meal(&format!("meal-{}", i))).await.unwrap();
        }

        let page = repo.get_meals(2, 1).await.unwrap();
        assert_eq!(page.total_count, 5);
        assert_eq!(page.offset, 1);
        let ids: Vec<u64> = page.items.iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![2, 3]);

        let tail = repo.get_meals(10, 4).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail.total_count, 5);

        let past_end = repo.get_meals(10, 50).await.unwrap();
        assert!(past_end.is_empty());
        assert_eq!(past_end.total_count, 5);
    }

    #[tokio::test]
    async fn test_paging_is_stable() {
        let repo = InMemoryMealRepository::new();
        for i in 0..4 {
            repo.add_meal(create_test_meal(&format!("meal-{}", i))).await.unwrap();
        }
        let first = repo.get_meals(4, 0).await.unwrap();
        let second = repo.get_meals(4, 0).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_with_initial_meals() {
        let repo = InMemoryMealRepository::with_meals(vec![
            create_test_meal("one").with_id(MealId::new(1)),
            create_test_meal("two").with_id(MealId::new(2)),
        ]);
        assert_eq!(repo.count(), 2);

        let (third, _) = repo.add_meal(create_test_meal("three")).await.unwrap();
        assert_eq!(third.id().value(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_id_space_reports_not_added() {
        let repo = InMemoryMealRepository::with_meals(vec![
            create_test_meal("last").with_id(MealId::new(u64::MAX))
        ]);

        let (returned, added) = repo.add_meal(create_test_meal("overflow")).await.unwrap();
        assert!(!added);
        assert!(!returned.id().is_assigned());
        assert_eq!(repo.count(), 1);
    }
}
