//! JSON success responses
//!
//! Bodies are serialized before any byte leaves the service, so an encoding
//! failure is logged and turned into the generic 500 rather than a truncated
//! 200.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ErrorResponse;

/// HTTP 200 response with a JSON body
#[derive(Debug)]
pub struct JsonOk<T>(pub T);

impl<T: Serialize> IntoResponse for JsonOk<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                StatusCode::OK,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Error encoding JSON response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal()),
                )
                    .into_response()
            }
        }
    }
}

/// Body of the single-column accessor: `{"<column>": value}`
pub type FieldValue = BTreeMap<&'static str, String>;
