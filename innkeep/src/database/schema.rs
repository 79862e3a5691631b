//! Database schema definitions and SQL constants.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on open to ensure the client
/// and database agree on the schema shape.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the customers table.
///
/// Email and phone are looked up for customer dedup but are deliberately
/// not UNIQUE: the lookup happens before insert in the booking flow.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        customer_id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        id_proof TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// Prices are stored in minor currency units; status and type are stored
/// as their closed-enum text representations.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        room_id INTEGER PRIMARY KEY,
        room_number TEXT NOT NULL UNIQUE,
        room_type TEXT NOT NULL,
        price_per_night INTEGER NOT NULL,
        status TEXT NOT NULL,
        floor_number INTEGER NOT NULL,
        max_occupancy INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Dates are ISO-8601 text (lexicographic order is chronological);
/// cancellation keeps the row and flips status.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        reservation_id INTEGER PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customers(customer_id),
        room_id INTEGER NOT NULL REFERENCES rooms(room_id),
        check_in_date TEXT NOT NULL,
        check_out_date TEXT NOT NULL,
        total_amount INTEGER NOT NULL,
        status TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// Index for customer lookup by email during dedup.
pub const CREATE_CUSTOMER_EMAIL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_customers_email ON customers(email)";

/// Index for customer lookup by phone during dedup.
pub const CREATE_CUSTOMER_PHONE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_customers_phone ON customers(phone_number)";

/// Index backing the availability check (per-room active reservations).
pub const CREATE_RESERVATION_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room_status ON reservations(room_id, status)";

/// Index backing per-customer reservation listings.
pub const CREATE_RESERVATION_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_customer ON reservations(customer_id)";

/// Index backing soonest-first orderings.
pub const CREATE_RESERVATION_CHECK_IN_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_check_in ON reservations(check_in_date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
