//! JSON session snapshot for the CLI.
//!
//! The CLI is stateless between invocations, so it parks the serialized
//! [`TravelStore`] in the data directory and restores it on the next run.
//! This is caller-side convenience only: the file can be deleted at any
//! time and the store rebuilds from the seed catalogs. The engines make no
//! durability promises.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::Result;
use crate::store::TravelStore;

/// Default session snapshot location.
pub fn default_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("session.json"))
}

/// Load a store from the default location, fresh if absent.
pub fn load() -> Result<TravelStore> {
    load_from(&default_path()?)
}

/// Load a store from an explicit path, fresh if absent or unreadable as
/// JSON from an older build.
pub fn load_from(path: &Path) -> Result<TravelStore> {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(store) => Ok(store),
            Err(_) => Ok(TravelStore::new()),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TravelStore::new()),
        Err(e) => Err(e.into()),
    }
}

/// Persist a store to the default location.
pub fn save(store: &TravelStore) -> Result<()> {
    save_to(&default_path()?, store)
}

/// Persist a store to an explicit path.
pub fn save_to(path: &Path, store: &TravelStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    std::fs::write(path, json)?;
    Ok(())
}
