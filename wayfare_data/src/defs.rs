use serde::{Deserialize, Serialize};

/// Stable identifier used across `WorldDef` references.
pub type Id = String;

/// Top-level declarative world data consumed by the engine.
///
/// Rooms are kept in declared order; the engine relies on that order when it
/// lists starting rooms.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WorldDef {
    /// Room a new player is offered by default.
    pub start_room: Id,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    /// Item ids initially placed in the room. Repeats place several copies.
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// A directed exit from one room to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Item catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub is_edible: bool,
    #[serde(default = "default_can_drop")]
    pub can_drop: bool,
}

fn default_can_drop() -> bool {
    true
}

impl RoomDef {
    /// Convenience constructor for a room with no items or exits.
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Add an exit, builder style.
    #[must_use]
    pub fn with_exit(mut self, direction: impl Into<String>, to: impl Into<Id>) -> Self {
        self.exits.push(ExitDef {
            direction: direction.into(),
            to: to.into(),
        });
        self
    }

    /// Place an item, builder style.
    #[must_use]
    pub fn with_item(mut self, item_id: impl Into<Id>) -> Self {
        self.items.push(item_id.into());
        self
    }
}

impl ItemDef {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, is_edible: bool, can_drop: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_edible,
            can_drop,
        }
    }
}
