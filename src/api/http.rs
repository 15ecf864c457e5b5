use serde::Serialize;
use serde_json::{Value, json};

use crate::api::error::ApiError;

pub const OK: u16 = 200;

#[derive(Debug, Clone)]
pub struct HttpRequest<T> {
    pub body: T,
}

/// Transport-neutral response: `status_code` becomes the HTTP status and
/// `body` the JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Value,
}

pub fn bad_request(error: ApiError) -> HttpResponse {
    error_response(&error)
}

pub fn server_error() -> HttpResponse {
    error_response(&ApiError::ServerError)
}

pub fn ok<T: Serialize>(data: &T) -> HttpResponse {
    match serde_json::to_value(data) {
        Ok(body) => HttpResponse {
            status_code: OK,
            body,
        },
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response body");
            server_error()
        }
    }
}

fn error_response(error: &ApiError) -> HttpResponse {
    HttpResponse {
        status_code: error.status_code(),
        body: json!({ "message": error.to_string() }),
    }
}
