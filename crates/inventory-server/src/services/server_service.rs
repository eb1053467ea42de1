//! Сервис инвентаря серверов: список, создание, частичное обновление, удаление.

use crate::error::AppError;
use chrono::{SubsecRound, Utc};
use inventory_entities::servers::{ActiveModel, Column, Entity as ServerEntity, Model};
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;

pub const DEFAULT_PORT: i32 = 22;
pub const DEFAULT_STATUS: &str = "running";

pub const NAME_MAX_LEN: usize = 100;
pub const IP_MAX_LEN: usize = 50;
pub const STATUS_MAX_LEN: usize = 20;
pub const REMARK_MAX_LEN: usize = 500;

/// Сообщение при пустом списке id в пакетном удалении.
pub const EMPTY_BATCH: &str = "please select servers to delete";

/// Поля сервера из тела запроса.
///
/// `id`, `created_at` и `updated_at` назначает хранилище, поэтому они
/// здесь отсутствуют и при разборе игнорируются.
#[derive(Debug, Default, Deserialize)]
pub struct ServerPayload {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub port: Option<i32>,
    pub status: Option<String>,
    pub cpu: Option<i32>,
    pub memory: Option<i32>,
    pub remark: Option<String>,
}

impl ServerPayload {
    /// Проверить длины строковых полей.
    pub fn validate(&self) -> Result<(), AppError> {
        check_len("name", self.name.as_deref(), NAME_MAX_LEN)?;
        check_len("ip", self.ip.as_deref(), IP_MAX_LEN)?;
        check_len("status", self.status.as_deref(), STATUS_MAX_LEN)?;
        check_len("remark", self.remark.as_deref(), REMARK_MAX_LEN)?;
        Ok(())
    }

    /// Новая запись: пустые и нулевые поля заменяются значениями по умолчанию.
    fn into_new_record(self, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name.unwrap_or_default()),
            ip: Set(self.ip.unwrap_or_default()),
            port: Set(supplied_int(self.port).unwrap_or(DEFAULT_PORT)),
            status: Set(supplied_str(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            cpu: Set(self.cpu.unwrap_or_default()),
            memory: Set(self.memory.unwrap_or_default()),
            remark: Set(self.remark.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Перенести в запись только непустые и ненулевые поля.
    ///
    /// Пустая строка или ноль считаются «поле не передано», поэтому
    /// сбросить поле в пустое значение этим способом нельзя.
    pub fn merge_into(self, model: &mut ActiveModel) {
        if let Some(name) = supplied_str(self.name) {
            model.name = Set(name);
        }
        if let Some(ip) = supplied_str(self.ip) {
            model.ip = Set(ip);
        }
        if let Some(port) = supplied_int(self.port) {
            model.port = Set(port);
        }
        if let Some(status) = supplied_str(self.status) {
            model.status = Set(status);
        }
        if let Some(cpu) = supplied_int(self.cpu) {
            model.cpu = Set(cpu);
        }
        if let Some(memory) = supplied_int(self.memory) {
            model.memory = Set(memory);
        }
        if let Some(remark) = supplied_str(self.remark) {
            model.remark = Set(remark);
        }
    }
}

/// Получить все серверы, новые первыми.
pub async fn list_servers(db: &DatabaseConnection) -> Result<Vec<Model>, AppError> {
    ServerEntity::find()
        .order_by_desc(Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::database("query failed", e))
}

/// Найти сервер по id.
pub async fn get_server(db: &DatabaseConnection, id: i32) -> Result<Model, AppError> {
    ServerEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::database("query failed", e))?
        .ok_or_else(AppError::server_not_found)
}

/// Создать сервер. Возвращает запись в том виде, в каком её сохранило хранилище.
pub async fn create_server(
    db: &DatabaseConnection,
    payload: ServerPayload,
) -> Result<Model, AppError> {
    payload.validate()?;

    payload
        .into_new_record(now())
        .insert(db)
        .await
        .map_err(|e| AppError::database("create failed", e))
}

/// Применить частичное обновление к найденной записи и перечитать её.
///
/// Между чтением и записью нет изоляции: если запись удалили в промежутке,
/// вызывающий получит `server not found`.
pub async fn update_server(
    db: &DatabaseConnection,
    existing: Model,
    payload: ServerPayload,
) -> Result<Model, AppError> {
    payload.validate()?;

    let id = existing.id;
    let mut model: ActiveModel = existing.into();
    payload.merge_into(&mut model);
    model.updated_at = Set(now());

    match model.update(db).await {
        Ok(_) => {}
        Err(DbErr::RecordNotUpdated) => return Err(AppError::server_not_found()),
        Err(e) => return Err(AppError::database("update failed", e)),
    }

    get_server(db, id).await
}

/// Удалить сервер по id.
pub async fn delete_server(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let result = ServerEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| AppError::database("delete failed", e))?;

    if result.rows_affected == 0 {
        return Err(AppError::server_not_found());
    }
    Ok(())
}

/// Удалить набор серверов одним запросом.
/// Возвращает число реально удалённых строк.
pub async fn delete_servers(db: &DatabaseConnection, ids: &[i32]) -> Result<u64, AppError> {
    if ids.is_empty() {
        return Err(AppError::Validation(EMPTY_BATCH.to_string()));
    }

    let result = ServerEntity::delete_many()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .exec(db)
        .await
        .map_err(|e| AppError::database("delete failed", e))?;

    Ok(result.rows_affected)
}

/// Текущее время с точностью до микросекунд: Postgres и MySQL точнее не хранят.
fn now() -> DateTimeUtc {
    Utc::now().trunc_subsecs(6)
}

fn supplied_str(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn supplied_int(value: Option<i32>) -> Option<i32> {
    value.filter(|n| *n != 0)
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::invalid_params(format!(
            "{field} exceeds {max} characters"
        ))),
        _ => Ok(()),
    }
}
