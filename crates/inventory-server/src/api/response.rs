//! Общий конверт ответа `{code, msg, data}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const CODE_OK: i32 = 0;
pub const CODE_FAILURE: i32 = 1;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(msg: impl Into<String>, data: T) -> Self {
        Self {
            code: CODE_OK,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// Успех с сообщением `success`.
    pub fn ok(data: T) -> Self {
        Self::success("success", data)
    }

    /// Неуспех: `data` всегда `null`.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_FAILURE,
            msg: msg.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
