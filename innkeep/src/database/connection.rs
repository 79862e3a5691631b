//! Database connection management.
//!
//! This module provides the main database connection type with the PRAGMA
//! settings the booking manager relies on (WAL, busy timeout, enforced
//! foreign keys).

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// # Examples
///
/// ```no_run
/// use innkeep::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/innkeep.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    #[allow(dead_code)]
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode and the busy timeout
    /// - Enable foreign key enforcement
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file or parent directory cannot be created,
    /// PRAGMA settings cannot be applied, or schema initialization or
    /// verification fails.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        // Ensure parent directory exists if auto-creating
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a result row, so query it
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn, config })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns a mutable reference to the underlying `SQLite` connection,
    /// as required for transactions.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot run or detects corruption.
    pub fn verify_integrity(&mut self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(crate::error::Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig::new(&path);

        let db = Database::open(config).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");

        let foreign_keys: i32 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");
        let config = DatabaseConfig::new(&path);

        assert!(!path.parent().unwrap().exists());

        let _db = Database::open(config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_database_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        // Create database first
        {
            let config = DatabaseConfig::new(&path);
            Database::open(config).unwrap();
        }

        let config = DatabaseConfig::new(&path).read_only();
        let db = Database::open(config).unwrap();

        let result = db.connection().execute("CREATE TABLE test (id INTEGER)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_integrity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        db.verify_integrity().unwrap();
    }
}
