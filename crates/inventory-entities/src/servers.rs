//! Entity для таблицы servers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servers")]
pub struct Model {
    /// Автоинкрементный первичный ключ
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Имя сервера (до 100 символов)
    pub name: String,

    /// IP-адрес (до 50 символов)
    pub ip: String,

    /// SSH-порт
    pub port: i32,

    /// Состояние: running, stopped, error (не проверяется)
    pub status: String,

    /// Загрузка CPU, %
    pub cpu: i32,

    /// Загрузка памяти, %
    pub memory: i32,

    /// Примечание (до 500 символов)
    pub remark: String,

    pub created_at: DateTimeUtc,

    /// Обновляется при каждом изменении записи
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
