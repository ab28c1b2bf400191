#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wayfare **
//! Room-graph text adventure

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use wayfare_engine::data_paths::world_path;
use wayfare_engine::{Game, load_world, run_repl};

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args().nth(1).map_or_else(world_path, PathBuf::from);
    info!("Start: loading Wayfare world from '{}'...", path.display());
    let world = load_world(&path).with_context(|| format!("while loading world from '{}'", path.display()))?;
    info!("World loaded successfully.");

    println!("{:^60}", "WAYFARE".bright_yellow().underline());
    let mut game = Game::new(world);
    run_repl(&mut game)
}
