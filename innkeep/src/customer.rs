//! Customer types and guest input validation.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// Validated guest details, as collected by the booking flow.
///
/// Construction enforces the input contract: names and id-proof are
/// required (non-empty after trimming), the email must match a simple
/// `local-part@domain` shape, and the phone number must be exactly ten
/// digits.
///
/// # Examples
///
/// ```
/// use innkeep::GuestProfile;
///
/// let guest = GuestProfile::new(
///     "  Asha ",
///     "Rao",
///     "asha.rao@example.com",
///     "9876543210",
///     "passport X123",
/// )
/// .unwrap();
/// assert_eq!(guest.first_name(), "Asha");
/// assert_eq!(guest.full_name(), "Asha Rao");
///
/// assert!(GuestProfile::new("Asha", "Rao", "not-an-email", "9876543210", "id").is_err());
/// assert!(GuestProfile::new("Asha", "Rao", "a@b.com", "12345", "id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestProfile {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    id_proof: String,
}

impl GuestProfile {
    /// Creates a validated guest profile.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
        id_proof: &str,
    ) -> Result<Self, ValidationError> {
        let first_name = required_trimmed("first_name", first_name)?;
        let last_name = required_trimmed("last_name", last_name)?;

        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError {
                field: "email".into(),
                message: format!("'{email}' must look like local-part@domain"),
            });
        }

        let phone_number = phone_number.trim();
        if !is_valid_phone(phone_number) {
            return Err(ValidationError {
                field: "phone_number".into(),
                message: "must be exactly 10 digits".into(),
            });
        }

        let id_proof = required_trimmed("id_proof", id_proof)?;

        Ok(Self {
            first_name,
            last_name,
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            id_proof,
        })
    }

    /// Returns the guest's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the guest's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the guest's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the guest's phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns the guest's id-proof string.
    #[must_use]
    pub fn id_proof(&self) -> &str {
        &self.id_proof
    }

    /// Returns the full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    customer_id: i64,
    #[serde(flatten)]
    profile: GuestProfile,
    created_at: SystemTime,
}

impl Customer {
    /// Assembles a customer record from its parts (used by the record
    /// access layer when loading rows).
    #[must_use]
    pub const fn new(customer_id: i64, profile: GuestProfile, created_at: SystemTime) -> Self {
        Self {
            customer_id,
            profile,
            created_at,
        }
    }

    /// Returns the server-assigned customer id.
    #[must_use]
    pub const fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Returns the guest profile.
    #[must_use]
    pub const fn profile(&self) -> &GuestProfile {
        &self.profile
    }

    /// Returns the full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.profile.full_name()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

fn required_trimmed(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: "must be non-empty".into(),
        });
    }
    Ok(trimmed.to_string())
}

/// Simple `local-part@domain` check: a non-empty local part of word
/// characters, `+`, `.` or `-`, then `@`, then a non-empty domain.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && local
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'_' | b'.' | b'-'))
        }
        None => false,
    }
}

/// Exactly ten ASCII digits.
fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}
