use crate::item::{Item, ItemAttributes, ItemId, ItemUpdate};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Owns every ranked item and keeps their ranks consistent with their ratings.
///
/// Not synchronised on its own; a [`Repository`](crate::Repository) guards it.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items by ascending id
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// All items. Callers must not rely on the order.
    pub fn list_all(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    /// All items ordered by rank, unranked items last by id
    pub fn ranked(&self) -> Vec<Item> {
        let mut items = self.list_all();
        items.sort_by_key(|item| (item.rank.unwrap_or(u32::MAX), item.id));
        items
    }

    pub fn get(&self, id: ItemId) -> Result<&Item> {
        self.items.get(&id).ok_or(Error::NotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn list_by<F>(&self, predicate: F) -> Vec<Item>
    where
        F: Fn(&Item) -> bool,
    {
        self.items.values().filter(|item| predicate(item)).cloned().collect()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Item> {
        self.list_by(|item| item.in_category(category))
    }

    /// Insert a new item at the initial rating, then rerank everything.
    pub fn create(&mut self, attributes: ItemAttributes) -> Result<Item> {
        let id = self.insert(attributes)?;
        self.recompute_ranks();
        self.get(id).cloned()
    }

    /// Insert without reranking; used for batch seeding.
    pub(crate) fn insert(&mut self, attributes: ItemAttributes) -> Result<ItemId> {
        validate_name(&attributes.name)?;

        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(id, Item::from_attributes(id, attributes));
        Ok(id)
    }

    /// Merge `update` into an existing item. A rating change reranks every item.
    pub fn apply_update(&mut self, id: ItemId, update: ItemUpdate) -> Result<Item> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }

        let item = self.items.get_mut(&id).ok_or(Error::NotFound(id))?;
        let rating_changed = update.rating.is_some();

        if let Some(rating) = update.rating {
            item.rating = rating;
        }
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(metadata) = update.metadata {
            item.metadata = Some(metadata);
        }

        if rating_changed {
            self.recompute_ranks();
        }

        self.get(id).cloned()
    }

    /// Overwrite a rating without reranking; the caller reranks once afterwards.
    pub(crate) fn set_rating(&mut self, id: ItemId, rating: i32) -> Result<()> {
        let item = self.items.get_mut(&id).ok_or(Error::NotFound(id))?;
        item.rating = rating;
        Ok(())
    }

    /// Assign dense ranks 1..=N by descending rating, ties by ascending id.
    pub fn recompute_ranks(&mut self) {
        let mut order: Vec<(i32, ItemId)> = self
            .items
            .values()
            .map(|item| (item.rating, item.id))
            .collect();
        order.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        for (position, (_, id)) in order.into_iter().enumerate() {
            if let Some(item) = self.items.get_mut(&id) {
                item.rank = Some(position as u32 + 1);
            }
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput("item name must not be empty".to_string()));
    }
    Ok(())
}
