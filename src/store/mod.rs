pub mod prescriptions;
pub mod sqlite;

pub use prescriptions::PrescriptionStore;
pub use sqlite::{open_database, open_memory_database};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("medication payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}
