//! Rooms and exits.
//!
//! A room owns the item placements currently inside it and a list of
//! directed exits. Exit targets are room ids resolved through the
//! [`World`](crate::world::World); the room never holds references to its
//! neighbors.

use crate::error::{EngineError, Result};
use crate::item::{Item, ItemHolder, take_first};
use crate::view::ExitLine;
use crate::world::{World, WorldObject};

/// A directed exit to a neighboring room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: String,
}

impl Exit {
    pub fn new(direction: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            to: to.into(),
        }
    }

    /// True if the first character of `request` is the first character of this
    /// exit's direction. "n", "north" and "nope" all match "north"; "N" does not.
    pub fn matches(&self, request: &str) -> bool {
        match (request.chars().next(), self.direction.chars().next()) {
            (Some(wanted), Some(ours)) => wanted == ours,
            _ => false,
        }
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub exits: Vec<Exit>,
    pub contents: Vec<Item>,
}

impl WorldObject for Room {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl ItemHolder for Room {
    fn items(&self) -> &[Item] {
        &self.contents
    }

    fn add_item(&mut self, item: Item) {
        self.contents.push(item);
    }

    fn remove_item(&mut self, item_id: &str) -> Result<Item> {
        take_first(&mut self.contents, item_id)
    }
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exits: Vec::new(),
            contents: Vec::new(),
        }
    }

    /// Names of the items currently in the room, in placement order.
    pub fn describe_items(&self) -> Vec<String> {
        self.item_names()
    }

    /// Direction labels paired with the names of the rooms they lead to, in declared order.
    ///
    /// # Errors
    /// - `NotFound` if an exit leads to a room that is not part of `world`
    pub fn describe_exits(&self, world: &World) -> Result<Vec<ExitLine>> {
        self.exits
            .iter()
            .map(|exit| -> Result<ExitLine> {
                let target = world.get_room(&exit.to).map_err(|_| EngineError::NotFound {
                    kind: "room",
                    id: format!("{} ({} exit from {})", exit.to, exit.direction, self.id),
                })?;
                Ok(ExitLine {
                    direction: exit.direction.clone(),
                    room_id: target.id.clone(),
                    room_name: target.name.clone(),
                })
            })
            .collect()
    }

    /// The first declared exit matching the requested direction, if any.
    pub fn exit_matching(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.matches(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCatalog;
    use wayfare_data::{ItemDef, RoomDef, WorldDef};

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_defs(&[
            ItemDef::new("torch", "torch", false, true),
            ItemDef::new("bread", "loaf of bread", true, true),
        ])
    }

    fn test_room() -> Room {
        let catalog = catalog();
        let mut room = Room::new("cellar", "Damp Cellar");
        room.add_item(catalog.instantiate("torch").unwrap());
        room.add_item(catalog.instantiate("bread").unwrap());
        room.add_item(catalog.instantiate("torch").unwrap());
        room
    }

    #[test]
    fn describe_items_lists_names_in_order() {
        assert_eq!(test_room().describe_items(), ["torch", "loaf of bread", "torch"]);
        assert!(Room::new("empty", "Empty").describe_items().is_empty());
    }

    #[test]
    fn remove_item_detaches_only_one_duplicate() {
        let mut room = test_room();
        let removed = room.remove_item("torch").unwrap();
        assert_eq!(removed.id(), "torch");
        assert_eq!(room.describe_items(), ["loaf of bread", "torch"]);
        assert!(room.contains_item("torch"));
    }

    #[test]
    fn remove_missing_item_is_not_found() {
        let mut room = test_room();
        let err = room.remove_item("sword").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(room.contents.len(), 3);
    }

    #[test]
    fn add_item_allows_duplicates() {
        let mut room = Room::new("hall", "Hall");
        let catalog = catalog();
        room.add_item(catalog.instantiate("bread").unwrap());
        room.add_item(catalog.instantiate("bread").unwrap());
        assert_eq!(room.describe_items(), ["loaf of bread", "loaf of bread"]);
    }

    #[test]
    fn exit_matches_on_first_letter() {
        let exit = Exit::new("north", "attic");
        assert!(exit.matches("n"));
        assert!(exit.matches("north"));
        assert!(exit.matches("nonsense"));
        assert!(!exit.matches("N"));
        assert!(!exit.matches(" n"));
        assert!(!exit.matches("s"));
        assert!(!exit.matches(""));
    }

    #[test]
    fn exit_matching_prefers_first_declared() {
        let mut room = Room::new("hall", "Hall");
        room.exits.push(Exit::new("north", "attic"));
        room.exits.push(Exit::new("northeast", "tower"));
        assert_eq!(room.exit_matching("n").map(|e| e.to.as_str()), Some("attic"));
        assert!(room.exit_matching("w").is_none());
    }

    #[test]
    fn describe_exits_resolves_neighbor_names() {
        let def = WorldDef {
            start_room: "a".into(),
            rooms: vec![
                RoomDef::new("a", "Room A").with_exit("north", "b").with_exit("east", "c"),
                RoomDef::new("b", "Room B"),
                RoomDef::new("c", "Room C"),
            ],
            items: Vec::new(),
        };
        let world = World::build_from_def(&def).unwrap();
        let lines = world.get_room("a").unwrap().describe_exits(&world).unwrap();
        let pairs: Vec<_> = lines
            .iter()
            .map(|l| (l.direction.as_str(), l.room_name.as_str()))
            .collect();
        assert_eq!(pairs, [("north", "Room B"), ("east", "Room C")]);
    }

    #[test]
    fn describe_exits_fails_for_foreign_world() {
        let def = WorldDef {
            start_room: "x".into(),
            rooms: vec![RoomDef::new("x", "X")],
            items: Vec::new(),
        };
        let world = World::build_from_def(&def).unwrap();
        let mut stray = Room::new("stray", "Stray");
        stray.exits.push(Exit::new("up", "loft"));
        assert!(stray.describe_exits(&world).unwrap_err().is_not_found());
    }
}
