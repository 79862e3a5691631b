//! Database schema management and migrations.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CUSTOMERS_TABLE, CREATE_CUSTOMER_EMAIL_INDEX, CREATE_CUSTOMER_PHONE_INDEX,
    CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE, CREATE_RESERVATION_CHECK_IN_INDEX,
    CREATE_RESERVATION_CUSTOMER_INDEX, CREATE_RESERVATION_ROOM_INDEX, CREATE_ROOMS_TABLE,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// Creates all tables, indices, and metadata for a fresh database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use innkeep::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    conn.execute(CREATE_CUSTOMERS_TABLE, [])?;
    conn.execute(CREATE_ROOMS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_CUSTOMER_EMAIL_INDEX, [])?;
    conn.execute(CREATE_CUSTOMER_PHONE_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_ROOM_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_CUSTOMER_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_CHECK_IN_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// table or row.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" means an uninitialized database
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized; an older database would
/// need a migration this client does not carry; a newer database needs a
/// newer client.
///
/// # Errors
///
/// Returns an error if the version is incompatible or initialization
/// fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
