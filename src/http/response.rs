//! HTTP response building module
//!
//! Every builder stamps `Access-Control-Allow-Origin` so browser clients on
//! other origins can read any outcome, including errors.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use serde::Serialize;

const JSON: &str = "application/json";
const NOT_FOUND_BODY: &str = "Not Found";
const SERIALIZE_FAILED_BODY: &str = r#"{"error":"Internal server error"}"#;

/// Build 404 Not Found response with a plain-text body
pub fn build_404_response(allow_origin: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, "text/plain;charset=utf-8")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin)
        .body(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            fallback(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
        })
}

/// Build JSON response, serialized compactly
pub fn build_json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
    allow_origin: &str,
) -> Response<Full<Bytes>> {
    let (status, json) = match serde_json::to_vec(body) {
        Ok(j) => (status, Bytes::from(j)),
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(SERIALIZE_FAILED_BODY.as_bytes()),
            )
        }
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, JSON)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin)
        .body(Full::new(json))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            fallback(StatusCode::INTERNAL_SERVER_ERROR, SERIALIZE_FAILED_BODY)
        })
}

/// Minimal response used when the builder rejects a header value
fn fallback(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *resp.status_mut() = status;
    resp
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
