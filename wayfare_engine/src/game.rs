//! Game session: one world plus the lifecycle of its single player.
//!
//! A [`Game`] starts out with no player. Registration binds one, and from then
//! on a [`Session`] is the only handle through which the player can act, so
//! movement and item actions can't be reached before registration.

use log::{info, warn};

use crate::action::ItemAction;
use crate::error::Result;
use crate::item::ItemHolder;
use crate::player::Player;
use crate::room::Room;
use crate::view::{ItemLine, RoomView};
use crate::world::World;

/// Whether a player has registered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSlot {
    Unregistered,
    Active(Player),
}

impl PlayerSlot {
    fn activate(&mut self, player: Player) -> &mut Player {
        *self = PlayerSlot::Active(player);
        match self {
            PlayerSlot::Active(player) => player,
            PlayerSlot::Unregistered => unreachable!("slot was just activated"),
        }
    }
}

/// Everything one game needs: the world and the (eventual) player.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    slot: PlayerSlot,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            slot: PlayerSlot::Unregistered,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_registered(&self) -> bool {
        matches!(self.slot, PlayerSlot::Active(_))
    }

    /// The registered player, if any.
    pub fn player(&self) -> Option<&Player> {
        match &self.slot {
            PlayerSlot::Active(player) => Some(player),
            PlayerSlot::Unregistered => None,
        }
    }

    /// Register the player in `room_id`.
    ///
    /// A game only ever has one player: once registered, further calls leave the
    /// existing player as it is and hand back a session for it.
    ///
    /// # Errors
    /// - `NotFound` if `room_id` is not a room of this world (only checked on first registration)
    pub fn register(&mut self, name: &str, room_id: &str) -> Result<Session<'_>> {
        let player = match &mut self.slot {
            PlayerSlot::Active(player) => {
                warn!(
                    "registration as \"{name}\" ignored: \"{}\" is already playing",
                    player.name
                );
                player
            },
            slot @ PlayerSlot::Unregistered => {
                let room = self.world.get_room(room_id)?;
                info!("player \"{name}\" registered in {} ({})", room.name, room.id);
                slot.activate(Player::new(name, room.id.clone()))
            },
        };
        Ok(Session {
            world: &mut self.world,
            player,
        })
    }

    /// A session for the registered player, or `None` before registration.
    pub fn session(&mut self) -> Option<Session<'_>> {
        match &mut self.slot {
            PlayerSlot::Active(player) => Some(Session {
                world: &mut self.world,
                player,
            }),
            PlayerSlot::Unregistered => None,
        }
    }
}

/// Mutable access to a registered player and their world.
#[derive(Debug)]
pub struct Session<'g> {
    world: &'g mut World,
    player: &'g mut Player,
}

impl Session<'_> {
    pub fn player(&self) -> &Player {
        self.player
    }

    /// The room the player occupies.
    ///
    /// # Errors
    /// - `NotFound` if the player's room is missing from the world
    pub fn current_room(&self) -> Result<&Room> {
        self.player.current_room(self.world)
    }

    /// Id of the player's room, re-derived from the world.
    ///
    /// # Errors
    /// - `NotFound` if the player's room is missing from the world
    pub fn current_room_id(&self) -> Result<&str> {
        let room = self.current_room()?;
        self.world.room_id_of(room)
    }

    /// Move the player; see [`Player::move_to`].
    ///
    /// # Errors
    /// - `NotFound` if the player's room is missing from the world
    pub fn move_to(&mut self, direction: &str) -> Result<&Room> {
        self.player.move_to(self.world, direction)
    }

    /// Carry out one item action. Misses are silent.
    ///
    /// # Errors
    /// - `NotFound` if the player's room is missing from the world
    pub fn perform(&mut self, action: ItemAction, item_id: &str) -> Result<()> {
        match action {
            ItemAction::Take => self.take(item_id),
            ItemAction::Drop => self.drop(item_id),
            ItemAction::Eat => {
                self.eat(item_id);
                Ok(())
            },
        }
    }

    /// # Errors
    /// - `NotFound` if the player's room is missing from the world
    pub fn take(&mut self, item_id: &str) -> Result<()> {
        self.player.take_item(self.world, item_id)
    }

    /// # Errors
    /// - `NotFound` if the player's room is missing from the world
    pub fn drop(&mut self, item_id: &str) -> Result<()> {
        self.player.drop_item(self.world, item_id)
    }

    pub fn eat(&mut self, item_id: &str) {
        self.player.eat_item(item_id);
    }

    /// Names of the carried items.
    pub fn inventory(&self) -> Vec<String> {
        self.player.describe_inventory()
    }

    /// Build the page model for the player's current room.
    ///
    /// # Errors
    /// - `NotFound` if the player's room or one of its exit targets is missing from the world
    pub fn view(&self) -> Result<RoomView> {
        let room = self.current_room()?;
        Ok(RoomView {
            room_id: self.world.room_id_of(room)?.to_string(),
            room_name: room.name.clone(),
            player_name: self.player.name.clone(),
            items: room.items().iter().map(ItemLine::from).collect(),
            exits: room.describe_exits(self.world)?,
            inventory: self.player.items().iter().map(ItemLine::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_data::{ItemDef, RoomDef, WorldDef};

    fn scenario_game() -> Game {
        let world = World::build_from_def(&WorldDef {
            start_room: "a".into(),
            rooms: vec![
                RoomDef::new("a", "Room A").with_exit("north", "b"),
                RoomDef::new("b", "Room B").with_exit("south", "a").with_item("torch"),
            ],
            items: vec![ItemDef::new("torch", "torch", false, true)],
        })
        .unwrap();
        Game::new(world)
    }

    #[test]
    fn new_game_is_unregistered() {
        let mut game = scenario_game();
        assert!(!game.is_registered());
        assert!(game.player().is_none());
        assert!(game.session().is_none());
    }

    #[test]
    fn register_binds_player_to_room() {
        let mut game = scenario_game();
        let session = game.register("Ada", "b").unwrap();
        assert_eq!(session.current_room_id().unwrap(), "b");
        assert!(game.is_registered());
        assert_eq!(game.player().unwrap().name, "Ada");
    }

    #[test]
    fn register_in_unknown_room_fails_and_stays_unregistered() {
        let mut game = scenario_game();
        assert!(game.register("Ada", "nowhere").unwrap_err().is_not_found());
        assert!(!game.is_registered());
    }

    #[test]
    fn second_registration_keeps_first_player() {
        let mut game = scenario_game();
        game.register("Ada", "a").unwrap();
        let session = game.register("Bob", "b").unwrap();
        assert_eq!(session.player().name, "Ada");
        assert_eq!(session.current_room_id().unwrap(), "a");
    }

    #[test]
    fn perform_dispatches_each_action() {
        let mut game = scenario_game();
        let mut session = game.register("Ada", "b").unwrap();
        session.perform(ItemAction::Take, "torch").unwrap();
        assert_eq!(session.player().describe_inventory(), ["torch"]);
        session.perform(ItemAction::Eat, "torch").unwrap();
        assert_eq!(session.player().describe_inventory(), ["torch"]);
        session.perform(ItemAction::Drop, "torch").unwrap();
        assert!(session.player().describe_inventory().is_empty());
        assert_eq!(session.current_room().unwrap().describe_items(), ["torch"]);
    }

    #[test]
    fn take_then_drop_returns_item_to_room() {
        let mut game = scenario_game();
        let mut session = game.register("Ada", "b").unwrap();
        session.take("torch").unwrap();
        assert_eq!(session.inventory(), ["torch"]);
        session.eat("torch");
        session.drop("torch").unwrap();
        assert!(session.inventory().is_empty());
        assert_eq!(session.current_room().unwrap().describe_items(), ["torch"]);
    }

    #[test]
    fn view_reflects_room_and_inventory() {
        let mut game = scenario_game();
        let mut session = game.register("Ada", "b").unwrap();
        session.perform(ItemAction::Take, "torch").unwrap();
        let view = session.view().unwrap();
        assert_eq!(view.room_id, "b");
        assert_eq!(view.room_name, "Room B");
        assert_eq!(view.player_name, "Ada");
        assert!(view.items.is_empty());
        assert_eq!(view.inventory.len(), 1);
        assert_eq!(view.inventory[0].id, "torch");
        assert_eq!(view.exits.len(), 1);
        assert_eq!(view.exits[0].room_name, "Room A");
    }

    #[test]
    fn independent_games_do_not_share_state() {
        let mut first = scenario_game();
        let mut second = scenario_game();
        first
            .register("Ada", "b")
            .unwrap()
            .perform(ItemAction::Take, "torch")
            .unwrap();
        assert!(!second.is_registered());
        let session = second.register("Bob", "b").unwrap();
        assert_eq!(session.current_room().unwrap().describe_items(), ["torch"]);
    }
}
