//! Database location resolution.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default database filename, created in the user's home directory.
const DB_FILE_NAME: &str = ".todo.db";

/// Resolve the default database path (`~/.todo.db`).
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::Home)?;
    Ok(home.join(DB_FILE_NAME))
}
