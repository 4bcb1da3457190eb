//! Customer query endpoint
//!
//! Runs the fixed customer query on the blocking pool and maps the outcome to
//! a 200 JSON array or a structured 500.

use crate::error::StoreError;
use crate::http;
use crate::logger;
use crate::store::CustomerStore;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

const ERROR_LABEL: &str = "Failed to retrieve customers";

/// Body of the 500 response
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    details: String,
}

/// Serve the customer list
pub async fn list_customers(store: Arc<CustomerStore>, allow_origin: &str) -> Response<Full<Bytes>> {
    let result = tokio::task::spawn_blocking(move || store.customers())
        .await
        .unwrap_or_else(|join_err| Err(StoreError::Worker(join_err.to_string())));

    match result {
        Ok(customers) => http::build_json_response(StatusCode::OK, &customers, allow_origin),
        Err(e) => {
            logger::log_customers_error(&e);
            let body = ErrorBody {
                error: ERROR_LABEL,
                details: e.to_string(),
            };
            http::build_json_response(StatusCode::INTERNAL_SERVER_ERROR, &body, allow_origin)
        }
    }
}
