//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use crate::{Error, Result};
use crate::user::User;
use super::schema;

/// SQLite-backed storage for user records
pub struct UserStore {
    conn: Connection,
}

impl UserStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::info!("Opened user database at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Release the connection, surfacing any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        tracing::info!("Closed user database");
        Ok(())
    }

    // ========== User Operations ==========

    /// Insert a new user and return its assigned id
    pub fn create_user(&self, name: &str, age: i64) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO users (name, age) VALUES (?1, ?2)",
                params![name, age],
            )
            .map_err(|e| constraint_error(e, name))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, age, "Created user");
        Ok(id)
    }

    /// All users in storage order
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare("SELECT id, name, age FROM users")?;

        let users = stmt
            .query_map([], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(users)
    }

    /// Get a user by id
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .query_row(
                "SELECT id, name, age FROM users WHERE id = ?1",
                [id],
                row_to_user,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Rewrite name and age of an existing user.
    ///
    /// Returns `false` when no row has the given id.
    pub fn update_user(&self, id: i64, name: &str, age: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE users SET name = ?1, age = ?2 WHERE id = ?3",
                params![name, age, id],
            )
            .map_err(|e| constraint_error(e, name))?;

        tracing::debug!(id, changed, "Updated user");
        Ok(changed > 0)
    }

    /// Delete a user. Returns `false` when no row has the given id.
    pub fn delete_user(&self, id: i64) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
        tracing::debug!(id, changed, "Deleted user");
        Ok(changed > 0)
    }

    /// Find users whose name is exactly `name`
    pub fn search_users(&self, name: &str) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age FROM users WHERE name = ?1")?;

        let users = stmt
            .query_map([name], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(users)
    }

    /// Find users whose name contains `query` (LIKE query, case-insensitive for ASCII)
    pub fn search_users_by_pattern(&self, query: &str) -> Result<Vec<User>> {
        let pattern = format!("%{}%", escape_like(query));
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age FROM users WHERE name LIKE ?1 ESCAPE '\\'")?;

        let users = stmt
            .query_map([pattern], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(users)
    }

    /// Count all users
    pub fn count_users(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Transactions ==========

    /// Begin a transaction spanning several operations
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
    })
}

/// Map a UNIQUE(name) failure to `Error::ConstraintViolation`
fn constraint_error(err: rusqlite::Error, name: &str) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            tracing::debug!(name, "Rejected duplicate user name");
            Error::ConstraintViolation(format!("a user named '{}' already exists", name))
        }
        other => Error::Storage(other),
    }
}

fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
