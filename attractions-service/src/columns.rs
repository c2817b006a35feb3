//! Column allowlist for the single-field accessor endpoint
//!
//! SQL cannot bind an identifier as a parameter, so the column name in
//! `SELECT <column> FROM attractions WHERE id = ?` has to be part of the
//! statement text. Callers never supply that text: a requested name is
//! checked against a closed allowlist and turned into a [`Field`], and each
//! variant owns a fixed statement.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A column that may be read through `/attractions/{id}/{column}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Location,
    Address,
}

impl Field {
    /// Every allowlisted field
    pub const ALL: [Field; 2] = [Field::Location, Field::Address];

    /// Validate a caller-supplied column name
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            "location" => Ok(Field::Location),
            "address" => Ok(Field::Address),
            _ => {
                tracing::warn!(column = name, "Invalid column name requested");
                Err(Error::BadRequest("Invalid column name".to_string()))
            }
        }
    }

    /// Column identifier, also used as the response key
    pub const fn column(self) -> &'static str {
        match self {
            Field::Location => "location",
            Field::Address => "address",
        }
    }

    /// The statement reading this column for one id
    pub(crate) const fn select_by_id(self) -> &'static str {
        match self {
            Field::Location => "SELECT location FROM attractions WHERE id = ?",
            Field::Address => "SELECT address FROM attractions WHERE id = ?",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Whether `column` is on the allowlist
///
/// Matching is exact and case-sensitive.
pub fn is_allowed(column: &str) -> bool {
    Field::ALL.iter().any(|field| field.column() == column)
}
