//! Item catalog and item placements.
//!
//! The catalog holds one immutable [`ItemKind`] per item id. Rooms and the
//! player's inventory hold [`Item`] placements: owned values that share their
//! kind but are moved, never aliased, between holders.

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use wayfare_data::ItemDef;

use crate::error::{EngineError, Result};
use crate::world::WorldObject;

/// Immutable catalog entry for one kind of item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKind {
    pub id: String,
    pub name: String,
    pub is_edible: bool,
    pub can_drop: bool,
}

impl From<&ItemDef> for ItemKind {
    fn from(def: &ItemDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            is_edible: def.is_edible,
            can_drop: def.can_drop,
        }
    }
}

/// A single physical instance of an item, sitting in a room or an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    kind: Arc<ItemKind>,
}

impl Item {
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }
    pub fn is_edible(&self) -> bool {
        self.kind.is_edible
    }
    pub fn can_drop(&self) -> bool {
        self.kind.can_drop
    }
}

impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.kind.id
    }
    fn name(&self) -> &str {
        &self.kind.name
    }
}

/// Anything that holds an ordered collection of item placements.
pub trait ItemHolder {
    fn items(&self) -> &[Item];
    fn add_item(&mut self, item: Item);
    /// Detach and return exactly one placement with the given id (the first one held).
    ///
    /// # Errors
    /// - `NotFound` if no placement with that id is held
    fn remove_item(&mut self, item_id: &str) -> Result<Item>;

    fn contains_item(&self, item_id: &str) -> bool {
        self.items().iter().any(|item| item.id() == item_id)
    }

    fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.id() == item_id)
    }

    /// Names of held items in holding order.
    fn item_names(&self) -> Vec<String> {
        self.items().iter().map(|item| item.name().to_string()).collect()
    }
}

/// Detach the first placement with `item_id` from a vector of items.
pub(crate) fn take_first(items: &mut Vec<Item>, item_id: &str) -> Result<Item> {
    let index = items
        .iter()
        .position(|item| item.id() == item_id)
        .ok_or_else(|| EngineError::item_not_found(item_id))?;
    Ok(items.remove(index))
}

/// Read-only lookup of item definitions by id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    kinds: HashMap<String, Arc<ItemKind>>,
    order: Vec<String>,
}

impl ItemCatalog {
    /// Build the catalog from dataset entries. Later duplicates replace earlier ones;
    /// datasets are validated for duplicates before this is called.
    pub fn from_defs(defs: &[ItemDef]) -> Self {
        let mut catalog = Self::default();
        for def in defs {
            if catalog.kinds.insert(def.id.clone(), Arc::new(ItemKind::from(def))).is_none() {
                catalog.order.push(def.id.clone());
            }
        }
        if catalog.is_empty() {
            warn!("item catalog is empty: no room will hold anything");
        } else {
            info!("{} item kinds added to catalog", catalog.len());
        }
        catalog
    }

    /// Look up an item definition.
    ///
    /// # Errors
    /// - `NotFound` if the id is not in the catalog
    pub fn get(&self, item_id: &str) -> Result<&ItemKind> {
        self.kinds
            .get(item_id)
            .map(|kind| &**kind)
            .ok_or_else(|| EngineError::item_not_found(item_id))
    }

    /// Create a fresh placement of a catalog item.
    ///
    /// # Errors
    /// - `NotFound` if the id is not in the catalog
    pub fn instantiate(&self, item_id: &str) -> Result<Item> {
        self.kinds
            .get(item_id)
            .map(|kind| Item { kind: Arc::clone(kind) })
            .ok_or_else(|| EngineError::item_not_found(item_id))
    }

    /// Item kinds in dataset order.
    pub fn kinds(&self) -> impl Iterator<Item = &ItemKind> {
        self.order.iter().filter_map(|id| self.kinds.get(id).map(|kind| &**kind))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
