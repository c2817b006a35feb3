//! Attraction record model

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

/// Columns selected for a full attraction, in struct order
pub(crate) const ATTRACTION_COLUMNS: &str =
    "id, title, location, detail_link, page, address, phone, description";

/// One row of the `attractions` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub detail_link: String,
    pub page: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Attraction {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            location: row.try_get("location")?,
            detail_link: row.try_get("detail_link")?,
            page: row.try_get("page")?,
            address: present(row.try_get("address")?),
            phone: present(row.try_get("phone")?),
            description: present(row.try_get("description")?),
        })
    }
}

/// The loader writes "" for missing details; treat it like NULL.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
