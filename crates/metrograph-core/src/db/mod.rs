//! SQLite stop repository.

mod schema;

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{MetroError, Result};
use crate::repository::StopRepository;
use crate::stop::Stop;

pub use schema::create_schema;

/// SQLite database holding the stop and connection tables.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing database.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MetroError::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }
        let conn = Connection::open(path).map_err(|e| {
            MetroError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Database { conn })
    }

    /// Create a database and install the schema.
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            MetroError::Other(format!(
                "failed to create database at {}: {}",
                path.display(),
                e
            ))
        })?;
        create_schema(&conn)?;
        Ok(Database { conn })
    }

    pub fn insert_stop(&self, stop: &Stop) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO stops (id, name) VALUES (?1, ?2)",
                params![stop.id, stop.name],
            )
            .map_err(|e| MetroError::Other(format!("failed to insert stop {}: {}", stop.id, e)))?;
        Ok(())
    }

    pub fn insert_connection(&self, from: i64, to: i64) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO connections (source_id, target_id) VALUES (?1, ?2)",
                params![from, to],
            )
            .map_err(|e| {
                MetroError::Other(format!(
                    "failed to insert connection {} -> {}: {}",
                    from, to, e
                ))
            })?;
        Ok(())
    }

    /// All stops, ordered by id.
    pub fn list_stops(&self) -> Result<Vec<Stop>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM stops ORDER BY id")
            .map_err(|e| MetroError::Other(format!("failed to prepare stops query: {}", e)))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| MetroError::Other(format!("failed to execute stops query: {}", e)))?;

        let mut stops = Vec::new();

        while let Some(row) = rows
            .next()
            .map_err(|e| MetroError::Other(format!("failed to read stop: {}", e)))?
        {
            let id: i64 = row
                .get(0)
                .map_err(|e| MetroError::Other(format!("failed to get id: {}", e)))?;
            let name: String = row
                .get(1)
                .map_err(|e| MetroError::Other(format!("failed to get name: {}", e)))?;
            stops.push(Stop { id, name });
        }

        Ok(stops)
    }

    /// All connected pairs, in load order.
    ///
    /// Replays the `position` column so neighbor order in the graph
    /// matches the dataset exactly.
    pub fn list_connections(&self) -> Result<Vec<(i64, i64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT source_id, target_id FROM connections ORDER BY position")
            .map_err(|e| {
                MetroError::Other(format!("failed to prepare connections query: {}", e))
            })?;

        let mut rows = stmt
            .query([])
            .map_err(|e| MetroError::Other(format!("failed to execute connections query: {}", e)))?;

        let mut pairs = Vec::new();

        while let Some(row) = rows
            .next()
            .map_err(|e| MetroError::Other(format!("failed to read connection: {}", e)))?
        {
            let source_id: i64 = row
                .get(0)
                .map_err(|e| MetroError::Other(format!("failed to get source_id: {}", e)))?;
            let target_id: i64 = row
                .get(1)
                .map_err(|e| MetroError::Other(format!("failed to get target_id: {}", e)))?;
            pairs.push((source_id, target_id));
        }

        Ok(pairs)
    }
}

impl StopRepository for Database {
    fn list_stops(&self) -> Result<Vec<Stop>> {
        self.list_stops()
    }

    fn list_connections(&self) -> Result<Vec<(i64, i64)>> {
        self.list_connections()
    }
}
