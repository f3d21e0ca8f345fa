//! # Userdb - User Record Manager
//!
//! A small SQLite-backed store for user records, driven by an interactive menu.
//!
//! Userdb provides:
//! - `UserStore`, which owns the connection and every SQL statement
//! - `Menu`, a console adapter that works over any reader/writer pair
//! - Optional TOML configuration for the database location

pub mod user;
pub mod storage;
pub mod menu;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use user::User;
pub use storage::UserStore;
pub use menu::{Menu, MenuChoice};

/// Result type alias for Userdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Userdb operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
