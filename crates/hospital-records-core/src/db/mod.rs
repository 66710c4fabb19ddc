//! Storage projection: SQLite tables and record operations.

pub mod registry;

mod hospitals;
mod patients;
mod pharmacy;
mod physicians;
mod rooms;
mod staff;

pub use registry::{hospital_schema, SchemaRegistry, TableDef};

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

/// Database errors.
///
/// Constraint violations (NOT NULL, foreign key) are not translated; they
/// surface as the underlying SQLite error.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl DbError {
    /// Whether the underlying SQLite error was a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a database at `path`, applying `schema`.
    pub fn open<P: AsRef<Path>>(path: P, schema: &SchemaRegistry) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        schema.apply(&conn)?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory(schema: &SchemaRegistry) -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema.apply(&conn)?;
        Ok(Self { conn })
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begin a transaction.
    pub fn transaction(&mut self) -> DbResult<rusqlite::Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }
}
