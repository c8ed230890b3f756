use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

pub const ENV_VAR_ERROR: i32 = 1;
pub const INVALID_STATE_ERROR: i32 = 100;
pub const INVALID_INPUT_ERROR: i32 = 101;
pub const ROUTE_UNAVAILABLE_ERROR: i32 = 102;
pub const NOT_FOUND_ERROR: i32 = 103;

impl Error {
    pub fn is_route_unavailable(&self) -> bool {
        self.code == ROUTE_UNAVAILABLE_ERROR
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            ROUTE_UNAVAILABLE_ERROR => (StatusCode::BAD_GATEWAY, self.message.as_str()),
            NOT_FOUND_ERROR => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: ENV_VAR_ERROR,
        message: "environment variable error".into(),
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: INVALID_STATE_ERROR,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: INVALID_INPUT_ERROR,
        message: "invalid input".into(),
    }
}

pub fn route_unavailable_error() -> Error {
    Error {
        code: ROUTE_UNAVAILABLE_ERROR,
        message: "route unavailable".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: NOT_FOUND_ERROR,
        message: "not found".into(),
    }
}

#[test]
fn route_unavailable_maps_to_bad_gateway() {
    let response = route_unavailable_error().into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn internal_errors_hide_their_message() {
    let response = env_var_error(env::VarError::NotPresent).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = invalid_input_error().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = not_found_error().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
