//! Query execution against the attractions table
//!
//! Every data value (ids, search text) is bound as a parameter. The only
//! statement text that varies is the single-column read, and that text comes
//! from a [`Field`] variant rather than from the request.

use futures::TryStreamExt;
use sqlx::{sqlite::SqliteRow, FromRow, SqlitePool};

use crate::{
    columns::Field,
    error::{DatabaseError, DatabaseOperation, Result},
    model::{Attraction, ATTRACTION_COLUMNS},
};

/// Escape character used in search `LIKE` patterns
const LIKE_ESCAPE: char = '\\';

/// Executes the read queries the HTTP layer needs
///
/// Cloning is cheap; the pool is a shared handle.
#[derive(Debug, Clone)]
pub struct AttractionQueries {
    pool: SqlitePool,
}

impl AttractionQueries {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every attraction, in storage order
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Attraction>> {
        let sql = format!("SELECT {ATTRACTION_COLUMNS} FROM attractions");
        let rows = sqlx::query(&sql).fetch(&self.pool);
        collect_attractions(rows, "list_all").await
    }

    /// The attraction with `id`, or a not-found database error
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Attraction> {
        let sql = format!("SELECT {ATTRACTION_COLUMNS} FROM attractions WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(e).add_context("get_by_id"))?
            .ok_or_else(|| {
                DatabaseError::not_found(
                    DatabaseOperation::Query,
                    format!("Attraction {} not found", id),
                )
            })?;

        let attraction = Attraction::from_row(&row)
            .map_err(|e| DatabaseError::from(e).add_context(format!("attraction {}", id)))?;
        Ok(attraction)
    }

    /// Attractions whose title, location or description contains `text`,
    /// ignoring ASCII case
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, text: &str) -> Result<Vec<Attraction>> {
        let sql = format!(
            "SELECT {ATTRACTION_COLUMNS} FROM attractions \
             WHERE title LIKE ?1 ESCAPE '{LIKE_ESCAPE}' \
             OR location LIKE ?1 ESCAPE '{LIKE_ESCAPE}' \
             OR description LIKE ?1 ESCAPE '{LIKE_ESCAPE}'"
        );
        let pattern = like_pattern(text);
        let rows = sqlx::query(&sql).bind(pattern).fetch(&self.pool);
        collect_attractions(rows, "search").await
    }

    /// The value of one allowlisted column for `id`
    ///
    /// The stored text is returned as is; SQL NULL reads as `""`.
    #[tracing::instrument(skip(self))]
    pub async fn get_field(&self, id: i64, field: Field) -> Result<String> {
        let value: Option<String> = sqlx::query_scalar(field.select_by_id())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(e).add_context(format!("column {}", field)))?
            .ok_or_else(|| {
                DatabaseError::not_found(
                    DatabaseOperation::Query,
                    format!("Attraction {} not found", id),
                )
            })?;

        Ok(value.unwrap_or_default())
    }
}

/// Drain a row stream into attractions, skipping rows that fail to decode
///
/// The stream (and its statement handle) is dropped on every return path.
async fn collect_attractions<S>(mut rows: S, intent: &'static str) -> Result<Vec<Attraction>>
where
    S: futures::Stream<Item = std::result::Result<SqliteRow, sqlx::Error>> + Unpin,
{
    let mut attractions = Vec::new();

    while let Some(row) = rows
        .try_next()
        .await
        .map_err(|e| DatabaseError::from(e).add_context(intent))?
    {
        match Attraction::from_row(&row) {
            Ok(attraction) => attractions.push(attraction),
            Err(e) => tracing::warn!(intent, error = %e, "Error scanning database row, skipping"),
        }
    }

    tracing::debug!(intent, count = attractions.len(), "Fetched attractions");
    Ok(attractions)
}

/// `%text%` with LIKE wildcards in `text` escaped
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
