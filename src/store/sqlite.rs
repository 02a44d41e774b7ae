use std::path::Path;

use rusqlite::Connection;

use super::StoreError;

/// Open a SQLite connection to the given path and run migrations.
pub fn open_database(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing).
pub fn open_memory_database() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![(
        1,
        include_str!("../../resources/migrations/001_initial.sql"),
    )];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| StoreError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Current schema version (0 if no schema exists yet).
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, i64>(0)
    })
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_initializes_prescriptions_table() {
        let conn = open_memory_database().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='prescriptions'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn schema_version_is_current() {
        let conn = open_memory_database().unwrap();
        let version: i64 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn migration_idempotent() {
        let conn = open_memory_database().unwrap();
        assert!(run_migrations(&conn).is_ok());
    }

    #[test]
    fn on_disk_database_reopens() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("digimeds.db");
        {
            let conn = open_database(&path).unwrap();
            conn.execute(
                "INSERT INTO prescriptions (id, owner_id, medications, created_at)
                 VALUES ('p1', 'u1', '[]', '2026-01-01T00:00:00.000000Z')",
                [],
            )
            .unwrap();
        }
        let conn = open_database(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM prescriptions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
