//! Response envelope `{status, data?, message?}` shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `{status: "success", data}`.
pub fn success<T: Serialize>(code: StatusCode, data: T) -> Response {
    (
        code,
        Json(Envelope {
            status: Status::Success,
            data: Some(data),
            message: None,
        }),
    )
        .into_response()
}

/// `{status: "success", message}`.
pub fn success_message(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(Envelope::<()> {
            status: Status::Success,
            data: None,
            message: Some(message.into()),
        }),
    )
        .into_response()
}

/// `{status: "error", message}`.
pub fn error(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(Envelope::<()> {
            status: Status::Error,
            data: None,
            message: Some(message.into()),
        }),
    )
        .into_response()
}

/// `{status: "error", data: message}`. Only the update route reports errors
/// this way; clients of that route read the message from `data`.
pub fn error_in_data(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(Envelope {
            status: Status::Error,
            data: Some(message.into()),
            message: None,
        }),
    )
        .into_response()
}
