//! Ядро API инвентаря серверов.

pub mod api;
pub mod config;
pub mod error;
pub mod services;


use api::AppState;
use axum::http::HeaderValue;
use config::ServerConfig;
use inventory_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::info;

/// Запустить сервер инвентаря.
///
/// Ошибка подключения к БД или миграции фатальна: сервис без хранилища бесполезен.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let cors_origin = HeaderValue::from_str(&config.cors_origin)?;
    let addr: SocketAddr = config.listen.parse()?;

    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.db_url);
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Маршрутизатор
    let app = api::build_router(AppState { db }, cors_origin);

    // 4. Graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 5. Запуск сервера
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Сервер инвентаря слушает {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
        })
        .await?;

    info!("Сервер инвентаря остановлен");
    Ok(())
}
