//! Player -- position, inventory, and the transitions that change them.
//!
//! Every gameplay miss (no matching exit, item not here, item that can't be
//! dropped or eaten) leaves state untouched and is not reported to the caller.
//! The only errors returned are lookups of the player's own room failing,
//! which means the player was paired with the wrong world.

use log::{debug, info};

use crate::error::Result;
use crate::item::{Item, ItemHolder, take_first};
use crate::room::Room;
use crate::world::{World, WorldObject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    location: String,
    inventory: Vec<Item>,
}

impl ItemHolder for Player {
    fn items(&self) -> &[Item] {
        &self.inventory
    }

    fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    fn remove_item(&mut self, item_id: &str) -> Result<Item> {
        take_first(&mut self.inventory, item_id)
    }
}

impl Player {
    /// Create a player standing in `starting_room` with nothing in hand.
    ///
    /// The room id is trusted; use [`Game::register`](crate::game::Game::register) to
    /// have it checked against a world.
    pub fn new(name: impl Into<String>, starting_room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: starting_room.into(),
            inventory: Vec::new(),
        }
    }

    /// Id of the room the player occupies.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The room the player occupies.
    ///
    /// # Errors
    /// - `NotFound` if the player's room is not part of `world`
    pub fn current_room<'w>(&self, world: &'w World) -> Result<&'w Room> {
        world.get_room(&self.location)
    }

    /// Move through the first exit whose direction starts with the same letter as
    /// `direction`. With no such exit the player stays put.
    ///
    /// Returns the room the player ends up in.
    ///
    /// # Errors
    /// - `NotFound` if the player's room, or the exit's target, is not part of `world`
    pub fn move_to<'w>(&mut self, world: &'w World, direction: &str) -> Result<&'w Room> {
        let here = self.current_room(world)?;
        let Some(exit) = here.exit_matching(direction) else {
            debug!("{} found no exit matching '{direction}' in {}", self.name, here.id());
            return Ok(here);
        };
        let there = world.get_room(&exit.to)?;
        info!(
            "{} moved {} from {} to {} ({})",
            self.name,
            exit.direction,
            here.id(),
            there.name(),
            there.id()
        );
        self.location = there.id.clone();
        Ok(there)
    }

    /// Pick up one `item_id` from the current room. Does nothing if it isn't there.
    ///
    /// # Errors
    /// - `NotFound` if the player's room is not part of `world`
    pub fn take_item(&mut self, world: &mut World, item_id: &str) -> Result<()> {
        let room = world.get_room_mut(&self.location)?;
        match room.remove_item(item_id) {
            Ok(item) => {
                info!("{} took the {} ({}) from {}", self.name, item.name(), item.id(), room.id());
                self.add_item(item);
            },
            Err(_) => debug!("{} tried to take absent item '{item_id}' in {}", self.name, room.id()),
        }
        Ok(())
    }

    /// Put one carried `item_id` down in the current room, unless the item can't be dropped.
    /// Does nothing if the item isn't carried.
    ///
    /// # Errors
    /// - `NotFound` if the player's room is not part of `world`
    pub fn drop_item(&mut self, world: &mut World, item_id: &str) -> Result<()> {
        let room = world.get_room_mut(&self.location)?;
        match self.find_item(item_id) {
            None => {
                debug!("{} tried to drop '{item_id}' but isn't carrying it", self.name);
            },
            Some(item) if !item.can_drop() => {
                debug!("{} can't drop the {} ({})", self.name, item.name(), item.id());
            },
            Some(_) => {
                let item = self.remove_item(item_id)?;
                info!("{} dropped the {} ({}) in {}", self.name, item.name(), item.id(), room.id());
                room.add_item(item);
            },
        }
        Ok(())
    }

    /// Eat one carried `item_id`. Edible items are consumed for good; anything else
    /// stays in the inventory. Does nothing if the item isn't carried.
    pub fn eat_item(&mut self, item_id: &str) {
        match self.find_item(item_id) {
            None => debug!("{} tried to eat '{item_id}' but isn't carrying it", self.name),
            Some(item) if !item.is_edible() => {
                debug!("{} can't eat the {} ({})", self.name, item.name(), item.id());
            },
            Some(_) => {
                if let Ok(item) = self.remove_item(item_id) {
                    info!("{} ate the {} ({})", self.name, item.name(), item.id());
                }
            },
        }
    }

    /// Names of the carried items, in the order they were picked up.
    pub fn describe_inventory(&self) -> Vec<String> {
        self.item_names()
    }
}
