//! Типы ошибок API инвентаря серверов.
//!
//! Любая ошибка отдаётся клиенту в общем конверте `{code, msg, data}`
//! с `code = 1` и HTTP 200: клиент различает исход только по `code`.

use crate::api::response::ApiResponse;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Сообщение для отсутствующей записи.
pub const SERVER_NOT_FOUND: &str = "server not found";

#[derive(Debug, Error)]
pub enum AppError {
    /// Некорректное тело запроса: JSON не разобран, поле слишком длинное, пустой список id.
    #[error("{0}")]
    Validation(String),

    /// Запись не найдена или удаление не затронуло ни одной строки.
    #[error("{0}")]
    NotFound(String),

    /// Ошибка хранилища во время запроса.
    #[error("{0}")]
    Database(String),
}

impl AppError {
    pub fn server_not_found() -> Self {
        AppError::NotFound(SERVER_NOT_FOUND.to_string())
    }

    /// Ошибка разбора параметров с префиксом `invalid parameters`.
    pub fn invalid_params(detail: impl std::fmt::Display) -> Self {
        AppError::Validation(format!("invalid parameters: {detail}"))
    }

    /// Ошибка хранилища с префиксом неудавшейся операции, например `query failed`.
    pub fn database(operation: &str, err: sea_orm::DbErr) -> Self {
        AppError::Database(format!("{operation}: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(m) => tracing::error!("Ошибка хранилища: {m}"),
            AppError::Validation(m) => tracing::debug!("Некорректный запрос: {m}"),
            AppError::NotFound(m) => tracing::debug!("Не найдено: {m}"),
        }
        ApiResponse::<()>::failure(self.to_string()).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::invalid_params(e)
    }
}
