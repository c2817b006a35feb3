//! Middleware applied around the router

pub mod logging;
pub mod request_tracking;

pub use logging::log_requests;
pub use request_tracking::{
    request_id_layer, request_id_propagation_layer, sensitive_headers_layer, SENSITIVE_HEADERS,
};
