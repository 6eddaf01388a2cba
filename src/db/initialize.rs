use crate::errors::AppResult;
use crate::models::settings::Settings;
use rusqlite::Connection;

/// Create the schema and seed the default settings.
/// Safe to run repeatedly: tables use IF NOT EXISTS, seeding uses OR IGNORE.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS events (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            pos       INTEGER NOT NULL,
            timestamp TEXT NOT NULL,
            kind      TEXT NOT NULL,
            amount    REAL NOT NULL
        );
        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
        CREATE TABLE IF NOT EXISTS employees (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            total_due REAL NOT NULL
        );
        CREATE TABLE IF NOT EXISTS employee_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL,
            timestamp   TEXT NOT NULL,
            kind        TEXT NOT NULL,
            amount      REAL NOT NULL
        );",
    )?;

    seed_default_settings(conn)?;
    Ok(())
}

/// Insert the default settings without touching keys already present.
pub fn seed_default_settings(conn: &Connection) -> AppResult<()> {
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)")?;
    for (key, value) in Settings::default().to_raw() {
        stmt.execute([&key, &value])?;
    }
    Ok(())
}
