//! Monetary amounts in minor currency units.
//!
//! SQLite has no decimal column type, so nightly prices and frozen totals
//! are stored as integer minor units (e.g. paise or cents). Keeping the
//! arithmetic in integers makes `nights x price` exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A non-negative monetary amount in minor currency units.
///
/// # Examples
///
/// ```
/// use innkeep::Money;
///
/// let price: Money = "2500.50".parse().unwrap();
/// assert_eq!(price.minor_units(), 250_050);
/// assert_eq!(price.to_string(), "2500.50");
///
/// // Three nights at that price, exactly.
/// let total = price.checked_mul(3).unwrap();
/// assert_eq!(total.to_string(), "7501.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a monetary amount from minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if `units` is negative.
    pub fn from_minor_units(units: i64) -> Result<Self, InvalidMoneyError> {
        if units < 0 {
            return Err(InvalidMoneyError {
                reason: format!("amount must not be negative, got {units}"),
            });
        }
        Ok(Self(units))
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Returns true for a strictly positive amount.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiplies the amount by a night count, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns an error if `nights` is not positive or the product
    /// overflows.
    pub fn checked_mul(self, nights: i64) -> Result<Self, InvalidMoneyError> {
        if nights <= 0 {
            return Err(InvalidMoneyError {
                reason: format!("night count must be positive, got {nights}"),
            });
        }
        self.0
            .checked_mul(nights)
            .map(Self)
            .ok_or_else(|| InvalidMoneyError {
                reason: format!("amount overflow multiplying {self} by {nights}"),
            })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = InvalidMoneyError;

    /// Parses `"2500"` or `"2500.50"` into minor units.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMoneyError {
            reason: format!("'{s}' is not a valid amount"),
        };

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = if frac.is_empty() {
            0
        } else if frac.len() == 1 {
            frac.parse::<i64>().map_err(|_| invalid())? * 10
        } else {
            frac.parse().map_err(|_| invalid())?
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Error type for invalid monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMoneyError {
    /// A description of why the amount is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidMoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount: {}", self.reason)
    }
}

impl std::error::Error for InvalidMoneyError {}
