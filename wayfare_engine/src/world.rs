//! Data structures representing the game world.
//!
//! [`World`] owns every room and the item catalog. It is built once from a
//! [`WorldDef`] and its topology never changes afterwards; only the item
//! placements inside rooms move, and only through player actions.

use std::collections::HashMap;

use log::info;
use serde::Serialize;
use wayfare_data::{RoomDef, WorldDef, validate_world};

use crate::error::{EngineError, Result};
use crate::item::{ItemCatalog, ItemHolder};
use crate::room::{Exit, Room};

/// Methods common to any named object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A room offered as a starting point before a player exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomListing {
    pub id: String,
    pub name: String,
}

/// The room graph and item catalog for one game.
#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<String, Room>,
    order: Vec<String>,
    catalog: ItemCatalog,
    start_room: String,
}

impl World {
    /// Build a world from a declarative dataset.
    ///
    /// This is the only way to construct a `World`.
    ///
    /// # Errors
    /// - `Configuration` listing every dangling reference or duplicate id in `def`
    pub fn build_from_def(def: &WorldDef) -> Result<World> {
        let errors = validate_world(def);
        if !errors.is_empty() {
            let details = errors
                .into_iter()
                .map(|err| format!("- {err}"))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(EngineError::Configuration(details));
        }

        let catalog = ItemCatalog::from_defs(&def.items);
        let mut rooms = HashMap::new();
        let mut order = Vec::new();
        for room_def in &def.rooms {
            let room = room_from_def(room_def, &catalog)?;
            order.push(room.id.clone());
            rooms.insert(room.id.clone(), room);
        }

        let world = World {
            rooms,
            order,
            catalog,
            start_room: def.start_room.clone(),
        };
        info!("{} rooms added to World", world.rooms.len());
        info!(
            "{} item placements seeded",
            world.rooms.values().map(|r| r.contents.len()).sum::<usize>()
        );
        Ok(world)
    }

    /// Look up a room by id.
    ///
    /// # Errors
    /// - `NotFound` if no room has that id
    pub fn get_room(&self, room_id: &str) -> Result<&Room> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| EngineError::room_not_found(room_id))
    }

    /// Look up a room by id for mutation of its contents.
    ///
    /// # Errors
    /// - `NotFound` if no room has that id
    pub fn get_room_mut(&mut self, room_id: &str) -> Result<&mut Room> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| EngineError::room_not_found(room_id))
    }

    /// Find the id under which this world stores `room`.
    ///
    /// Both id and name must match, so a room taken from a different world is rejected.
    ///
    /// # Errors
    /// - `NotFound` if `room` is not part of this world
    pub fn room_id_of(&self, room: &Room) -> Result<&str> {
        self.rooms
            .get_key_value(&room.id)
            .filter(|(_, ours)| ours.name == room.name)
            .map(|(id, _)| id.as_str())
            .ok_or_else(|| EngineError::room_not_found(format!("{} ({})", room.id, room.name)))
    }

    /// Rooms available as starting points, in dataset order.
    pub fn list_available_rooms(&self) -> Vec<RoomListing> {
        self.rooms_in_order()
            .map(|room| RoomListing {
                id: room.id.clone(),
                name: room.name.clone(),
            })
            .collect()
    }

    /// All rooms in dataset order.
    pub fn rooms_in_order(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// The dataset's default start room id.
    pub fn start_room(&self) -> &str {
        &self.start_room
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

fn room_from_def(def: &RoomDef, catalog: &ItemCatalog) -> Result<Room> {
    let mut room = Room::new(def.id.clone(), def.name.clone());
    room.exits = def
        .exits
        .iter()
        .map(|exit| Exit::new(exit.direction.clone(), exit.to.clone()))
        .collect();
    for item_id in &def.items {
        room.add_item(catalog.instantiate(item_id)?);
    }
    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_data::{ExitDef, ItemDef};

    fn scenario_def() -> WorldDef {
        WorldDef {
            start_room: "a".into(),
            rooms: vec![
                RoomDef::new("a", "Room A").with_exit("north", "b"),
                RoomDef::new("b", "Room B").with_exit("south", "a").with_item("torch"),
            ],
            items: vec![ItemDef::new("torch", "torch", false, true)],
        }
    }

    #[test]
    fn build_seeds_rooms_and_items() {
        let world = World::build_from_def(&scenario_def()).unwrap();
        assert_eq!(world.room_count(), 2);
        assert_eq!(world.start_room(), "a");
        assert_eq!(world.get_room("b").unwrap().describe_items(), ["torch"]);
        assert!(world.get_room("a").unwrap().describe_items().is_empty());
        assert_eq!(world.catalog().len(), 1);
    }

    #[test]
    fn every_exit_target_resolves() {
        let world = World::build_from_def(&scenario_def()).unwrap();
        for room in world.rooms_in_order() {
            for exit in &room.exits {
                assert!(world.get_room(&exit.to).is_ok());
            }
        }
    }

    #[test]
    fn dangling_exit_is_a_configuration_error() {
        let mut def = scenario_def();
        def.rooms[1].exits.push(ExitDef {
            direction: "west".into(),
            to: "void".into(),
        });
        let err = World::build_from_def(&def).unwrap_err();
        assert!(matches!(&err, EngineError::Configuration(msg) if msg.contains("void")));
    }

    #[test]
    fn unknown_start_room_is_a_configuration_error() {
        let mut def = scenario_def();
        def.start_room = "z".into();
        assert!(matches!(
            World::build_from_def(&def),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn configuration_error_lists_every_problem() {
        let mut def = scenario_def();
        def.start_room = "z".into();
        def.rooms[0].exits.push(ExitDef {
            direction: "down".into(),
            to: "pit".into(),
        });
        let Err(EngineError::Configuration(msg)) = World::build_from_def(&def) else {
            panic!("expected configuration error");
        };
        assert_eq!(msg.lines().count(), 2);
    }

    #[test]
    fn get_room_unknown_is_not_found() {
        let world = World::build_from_def(&scenario_def()).unwrap();
        assert_eq!(
            world.get_room("q").unwrap_err(),
            EngineError::NotFound {
                kind: "room",
                id: "q".into()
            }
        );
    }

    #[test]
    fn room_id_of_round_trips_and_rejects_strangers() {
        let world = World::build_from_def(&scenario_def()).unwrap();
        let room = world.get_room("b").unwrap();
        assert_eq!(world.room_id_of(room).unwrap(), "b");

        let impostor = Room::new("b", "Some Other B");
        assert!(world.room_id_of(&impostor).unwrap_err().is_not_found());
        let stranger = Room::new("zz", "Nowhere");
        assert!(world.room_id_of(&stranger).is_err());
    }

    #[test]
    fn available_rooms_follow_dataset_order() {
        let mut def = scenario_def();
        def.rooms.insert(0, RoomDef::new("gate", "Iron Gate"));
        let world = World::build_from_def(&def).unwrap();
        let listing = world.list_available_rooms();
        let ids: Vec<_> = listing.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["gate", "a", "b"]);
        assert_eq!(listing[0].name, "Iron Gate");
    }
}
