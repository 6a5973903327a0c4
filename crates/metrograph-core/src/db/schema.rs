use rusqlite::Connection;

use crate::error::{MetroError, Result};

/// Create the stop and connection tables if they do not exist.
///
/// `position` records connection load order; `list_connections` replays
/// it so neighbor order in the graph matches the dataset exactly.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS stops (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS connections (
            position INTEGER PRIMARY KEY AUTOINCREMENT,
            source_id INTEGER NOT NULL,
            target_id INTEGER NOT NULL
        );",
    )
    .map_err(|e| MetroError::Other(format!("failed to create database schema: {}", e)))?;
    Ok(())
}
