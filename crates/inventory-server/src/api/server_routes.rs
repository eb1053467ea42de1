//! Маршруты инвентаря серверов: список, карточка, создание, обновление, удаление.

use crate::api::response::ApiResponse;
use crate::api::AppState;
use crate::error::AppError;
use crate::services::server_service::{self, ServerPayload};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;
use inventory_entities::servers::Model as Server;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ── Типы запросов/ответов ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Option<Vec<i32>>,
}

#[derive(Debug, Serialize)]
pub struct BatchDeleteResponse {
    pub deleted: u64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/servers", get(list_servers).post(create_server))
        .route(
            "/servers/batch-delete",
            post(batch_delete)
                .get(not_a_server)
                .put(not_a_server)
                .delete(not_a_server),
        )
        .route(
            "/servers/{id}",
            get(get_server).put(update_server).delete(delete_server),
        )
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /api/servers — все серверы, по убыванию id.
async fn list_servers(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Server>>, AppError> {
    let servers = server_service::list_servers(&state.db).await?;
    Ok(ApiResponse::ok(servers))
}

/// GET /api/servers/{id}
async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Server>, AppError> {
    let server = server_service::get_server(&state.db, parse_id(&id)?).await?;
    Ok(ApiResponse::ok(server))
}

/// POST /api/servers — создание; id и временные метки из тела игнорируются.
async fn create_server(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<Server>, AppError> {
    let payload: ServerPayload = parse_body(&body)?;
    let server = server_service::create_server(&state.db, payload).await?;
    tracing::info!("Сервер создан: {} ({}, id={})", server.name, server.ip, server.id);

    Ok(ApiResponse::success("created", server))
}

/// PUT /api/servers/{id} — частичное обновление.
///
/// Тело разбирается только после того, как запись найдена.
async fn update_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<ApiResponse<Server>, AppError> {
    let existing = server_service::get_server(&state.db, parse_id(&id)?).await?;
    let payload: ServerPayload = parse_body(&body)?;

    let server = server_service::update_server(&state.db, existing, payload).await?;
    tracing::info!("Сервер обновлён: id={}", server.id);

    Ok(ApiResponse::success("updated", server))
}

/// DELETE /api/servers/{id}
async fn delete_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let id = parse_id(&id)?;
    server_service::delete_server(&state.db, id).await?;
    tracing::info!("Сервер удалён: id={id}");

    Ok(ApiResponse::success("deleted", ()))
}

/// POST /api/servers/batch-delete — тело `{"ids": [1, 2, 3]}`.
async fn batch_delete(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<BatchDeleteResponse>, AppError> {
    let req: BatchDeleteRequest = parse_body(&body)?;
    let ids = req.ids.unwrap_or_default();

    let deleted = server_service::delete_servers(&state.db, &ids).await?;
    tracing::info!("Пакетное удаление: запрошено {}, удалено {deleted}", ids.len());

    Ok(ApiResponse::success("deleted", BatchDeleteResponse { deleted }))
}

/// GET/PUT/DELETE /api/servers/batch-delete: `batch-delete` не является id сервера.
async fn not_a_server() -> AppError {
    AppError::server_not_found()
}

/// Id из пути. Всё, что не является положительным целым, не может совпасть с записью.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::server_not_found()),
    }
}

/// Разобрать тело как JSON независимо от заголовка Content-Type.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}
