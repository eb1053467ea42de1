//! Сущности SeaORM реестра серверов.

pub mod servers;
