//! Database CRUD operations for customers.

use std::time::SystemTime;

use rusqlite::{params, Connection};

use crate::customer::{Customer, GuestProfile};
use crate::error::Result;

use super::connection::Database;
use super::{systemtime_to_unix_secs, unix_secs_to_systemtime};

const INSERT_CUSTOMER: &str = r"
    INSERT INTO customers (first_name, last_name, email, phone_number, id_proof, created_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = r"
    SELECT customer_id, first_name, last_name, email, phone_number, id_proof, created_at
    FROM customers
    WHERE customer_id = ?
";

const SELECT_BY_EMAIL: &str = r"
    SELECT customer_id, first_name, last_name, email, phone_number, id_proof, created_at
    FROM customers
    WHERE email = ?
    ORDER BY customer_id
    LIMIT 1
";

const SELECT_BY_PHONE: &str = r"
    SELECT customer_id, first_name, last_name, email, phone_number, id_proof, created_at
    FROM customers
    WHERE phone_number = ?
    ORDER BY customer_id
    LIMIT 1
";

const LIST_CUSTOMERS: &str = r"
    SELECT customer_id, first_name, last_name, email, phone_number, id_proof, created_at
    FROM customers
    ORDER BY created_at DESC, customer_id DESC
";

const UPDATE_CUSTOMER: &str = r"
    UPDATE customers
    SET first_name = ?, last_name = ?, email = ?, phone_number = ?, id_proof = ?
    WHERE customer_id = ?
";

const DELETE_CUSTOMER: &str = "DELETE FROM customers WHERE customer_id = ?";

/// Deserializes a customer from a database row.
///
/// Expects columns in this order: `customer_id`, `first_name`,
/// `last_name`, `email`, `phone_number`, `id_proof`, `created_at`.
fn row_to_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    let customer_id: i64 = row.get(0)?;
    let first_name: String = row.get(1)?;
    let last_name: String = row.get(2)?;
    let email: String = row.get(3)?;
    let phone_number: String = row.get(4)?;
    let id_proof: String = row.get(5)?;
    let created_secs: i64 = row.get(6)?;

    let profile = GuestProfile::new(&first_name, &last_name, &email, &phone_number, &id_proof)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Customer::new(
        customer_id,
        profile,
        unix_secs_to_systemtime(created_secs),
    ))
}

impl Database {
    /// Inserts a new customer and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_customer(conn: &Connection, profile: &GuestProfile) -> Result<i64> {
        let created_secs = systemtime_to_unix_secs(SystemTime::now())?;
        conn.execute(
            INSERT_CUSTOMER,
            params![
                profile.first_name(),
                profile.last_name(),
                profile.email(),
                profile.phone_number(),
                profile.id_proof(),
                created_secs,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn customer_by_id(conn: &Connection, customer_id: i64) -> Result<Option<Customer>> {
        optional_row(conn, SELECT_BY_ID, params![customer_id])
    }

    /// Retrieves a customer by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn customer_by_email(conn: &Connection, email: &str) -> Result<Option<Customer>> {
        optional_row(conn, SELECT_BY_EMAIL, params![email])
    }

    /// Retrieves a customer by phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn customer_by_phone(conn: &Connection, phone_number: &str) -> Result<Option<Customer>> {
        optional_row(conn, SELECT_BY_PHONE, params![phone_number])
    }

    /// Lists all customers, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_customers(conn: &Connection) -> Result<Vec<Customer>> {
        let mut stmt = conn.prepare(LIST_CUSTOMERS)?;
        let customers = stmt
            .query_map([], row_to_customer)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(customers)
    }

    /// Updates a customer's stored profile.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the customer was found and updated
    /// - `Ok(false)` if the customer was not found
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_customer(conn: &Connection, customer: &Customer) -> Result<bool> {
        let profile = customer.profile();
        let rows_affected = conn.execute(
            UPDATE_CUSTOMER,
            params![
                profile.first_name(),
                profile.last_name(),
                profile.email(),
                profile.phone_number(),
                profile.id_proof(),
                customer.customer_id(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Deletes a customer row. Administrative operation; the booking flow
    /// never deletes customers.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the customer was found and deleted
    /// - `Ok(false)` if the customer was not found
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails (e.g. reservations still
    /// reference the customer).
    pub fn delete_customer(conn: &Connection, customer_id: i64) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_CUSTOMER, params![customer_id])?;
        Ok(rows_affected > 0)
    }
}

fn optional_row(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Option<Customer>> {
    let mut stmt = conn.prepare(sql)?;
    match stmt.query_row(params, row_to_customer) {
        Ok(customer) => Ok(Some(customer)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
