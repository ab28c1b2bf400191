#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WAYFARE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod error;
pub mod game;
pub mod item;
pub mod player;
pub mod room;
pub mod world;

// Around the core
pub mod command;
pub mod data_paths;
pub mod loader;
pub mod repl;
pub mod router;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use action::ItemAction;
pub use error::EngineError;
pub use game::{Game, PlayerSlot, Session};
pub use item::{Item, ItemCatalog, ItemHolder, ItemKind};
pub use loader::load_world;
pub use player::Player;
pub use repl::run_repl;
pub use room::{Exit, Room};
pub use router::{Method, Page, Request, Response, route};
pub use world::{RoomListing, World, WorldObject};
