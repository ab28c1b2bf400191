//! Location of the runtime data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_ENV: &str = "WAYFARE_DATA_DIR";
/// Environment variable naming the world file inside the data directory.
pub const WORLD_FILE_ENV: &str = "WAYFARE_WORLD";
/// World file used when `WAYFARE_WORLD` is not set.
pub const DEFAULT_WORLD_FILE: &str = "world.ron";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Path of the world dataset to load at startup.
pub fn world_path() -> PathBuf {
    let file = env::var(WORLD_FILE_ENV).unwrap_or_else(|_| DEFAULT_WORLD_FILE.to_string());
    data_path(file)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let mut candidates = vec![PathBuf::from("wayfare_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("wayfare_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("wayfare_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("wayfare_engine/data"))
}
