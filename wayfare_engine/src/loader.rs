//! Loader utilities for building a [`World`] from a dataset file.
//!
//! Datasets are RON by default; TOML is accepted for hand-edited worlds.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use wayfare_data::WorldDef;

use crate::world::World;

/// Load a `WorldDef` from a `.ron` or `.toml` file.
///
/// # Errors
/// - on IO failure, parse failure, or an unsupported file extension
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display())),
        Some("toml") => toml::from_str(&text).with_context(|| format!("parsing worlddef TOML from '{}'", path.display())),
        _ => bail!("unsupported worlddef format: '{}' (expected .ron or .toml)", path.display()),
    }
}

/// Load and build the `World` described by the dataset at `path`.
///
/// # Errors
/// - if the file can't be read or parsed, or describes an inconsistent world
pub fn load_world(path: &Path) -> Result<World> {
    let def = load_worlddef(path).context("while loading worlddef from file")?;
    info!("worlddef loaded from '{}'", path.display());
    let world = World::build_from_def(&def).context("while building world from worlddef")?;
    Ok(world)
}
