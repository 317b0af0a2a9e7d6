use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{CreateFruit, Fruit, FruitId};

/// In-memory owner of every fruit record.
///
/// - `fruits`  → `indexmap::IndexMap` keyed by id: O(1) lookup, listing
///               follows insertion order
/// - `names`   → names currently taken, for the uniqueness check
/// - `next_id` → starts at 1, only advances on a successful create
///
/// The store does no locking of its own; callers serialize `create` by
/// holding the write half of the `RwLock` in `AppState`.
#[derive(Debug)]
pub struct FruitStore {
    fruits: IndexMap<FruitId, Fruit>,
    names: HashSet<String>,
    next_id: FruitId,
}

impl Default for FruitStore {
    fn default() -> Self {
        Self {
            fruits: IndexMap::new(),
            names: HashSet::new(),
            next_id: 1,
        }
    }
}

impl FruitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    /// All records in creation order.
    pub fn list(&self) -> Vec<Fruit> {
        self.fruits.values().cloned().collect()
    }

    /// Look up a record by the raw id taken from the request path.
    pub fn get(&self, raw_id: &str) -> AppResult<Fruit> {
        let id: FruitId = raw_id
            .parse()
            .map_err(|_| AppError::InvalidIdentifier(format!("Invalid fruit id '{}'", raw_id)))?;

        self.fruits
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Fruit {} not found", id)))
    }

    /// Validate, check for a name clash, then append. Nothing is mutated
    /// unless every check passes.
    pub fn create(&mut self, candidate: CreateFruit) -> AppResult<Fruit> {
        candidate.validate()?;

        if self.names.contains(&candidate.name) {
            return Err(AppError::Conflict(format!(
                "Fruit {} already exists",
                candidate.name
            )));
        }

        let id = self.next_id;
        self.next_id += 1;

        let fruit = Fruit {
            id,
            name: candidate.name,
            price: candidate.price,
        };
        self.names.insert(fruit.name.clone());
        self.fruits.insert(id, fruit.clone());

        Ok(fruit)
    }
}
