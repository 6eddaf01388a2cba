//! SQLite-backed record store (lightweight wrapper for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct Store {
    pub conn: Connection,
}

impl Store {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
