//! HTTP handlers for the attractions API
//!
//! Each handler extracts its parameters, calls [`AttractionQueries`] and
//! encodes the result. Datastore errors convert into responses through
//! [`crate::error::Error`]'s `IntoResponse`: "no matching row" becomes 404, anything else
//! a generic 500.
//!
//! [`AttractionQueries`]: crate::query::AttractionQueries

use axum::extract::{Path, State};

use crate::{
    columns::Field,
    error::Result,
    extract::{AttractionId, SearchParams},
    model::Attraction,
    responses::{FieldValue, JsonOk},
    state::AppState,
};

/// `GET /attractions`
pub async fn list_attractions(State(state): State<AppState>) -> Result<JsonOk<Vec<Attraction>>> {
    let attractions = state.attractions().list_all().await?;
    Ok(JsonOk(attractions))
}

/// `GET /attractions/{id}`
pub async fn get_attraction(
    State(state): State<AppState>,
    AttractionId(id): AttractionId,
) -> Result<JsonOk<Attraction>> {
    let attraction = state.attractions().get_by_id(id).await?;
    Ok(JsonOk(attraction))
}

/// `GET /search?q=...`
pub async fn search_attractions(
    State(state): State<AppState>,
    params: SearchParams,
) -> Result<JsonOk<Vec<Attraction>>> {
    let text = params.text()?;
    let attractions = state.attractions().search(text).await?;
    Ok(JsonOk(attractions))
}

/// `GET /attractions/{id}/{column}`
///
/// The column is checked against the allowlist on every request, before
/// any statement is chosen.
pub async fn get_attraction_field(
    State(state): State<AppState>,
    AttractionId(id): AttractionId,
    Path((_, column)): Path<(String, String)>,
) -> Result<JsonOk<FieldValue>> {
    let field = Field::parse(&column)?;

    let value = state.attractions().get_field(id, field).await?;

    Ok(JsonOk(FieldValue::from([(field.column(), value)])))
}
