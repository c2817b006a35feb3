//! Request extractors

use axum::{
    extract::{FromRequestParts, Query, RawPathParams},
    http::request::Parts,
};

use crate::error::Error;

/// The `{id}` path segment, constrained to ASCII digits
///
/// A segment that is not all digits is reported exactly like an unmatched
/// route, so the handler never runs. An all-digit id too large for `i64`
/// cannot exist in the table and is reported the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttractionId(pub i64);

impl AttractionId {
    /// Parse a path segment
    pub fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse().ok().map(AttractionId)
    }
}

impl<S> FromRequestParts<S> for AttractionId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| route_not_found(&path))?;

        params
            .iter()
            .find(|(key, _)| *key == "id")
            .and_then(|(_, value)| AttractionId::parse(value))
            .ok_or_else(|| route_not_found(&path))
    }
}

/// Whether `path` is under `/attractions/` with an id segment that
/// [`AttractionId::parse`] rejects
///
/// Such paths never name a resource, whatever the method.
pub fn has_malformed_id(path: &str) -> bool {
    path.strip_prefix("/attractions/")
        .and_then(|rest| rest.split('/').next())
        .is_some_and(|segment| AttractionId::parse(segment).is_none())
}

/// The 404 used for every unmatched path
pub fn route_not_found(path: &str) -> Error {
    tracing::info!("404 Not Found: {}", path);
    Error::NotFound(format!("404 not found: {}", path))
}

/// Query string of `/search`
///
/// Only the first `q` counts; repeats and unrelated keys are ignored.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| Error::BadRequest(format!("Invalid query string: {}", e)))?;

        Ok(Self::from_pairs(pairs))
    }
}

impl SearchParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value);
        Self { q }
    }

    /// The required, non-empty search text
    pub fn text(&self) -> Result<&str, Error> {
        match self.q.as_deref() {
            Some(q) if !q.is_empty() => Ok(q),
            _ => Err(Error::BadRequest(
                "Query parameter 'q' is required".to_string(),
            )),
        }
    }
}
