//! User model

use std::fmt;

/// A single row of the `users` table.
///
/// `id` is assigned by SQLite on insert and never changes afterwards;
/// `name` is unique across the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}', {})", self.id, self.name, self.age)
    }
}
