//! Точка входа сервера инвентаря.

use clap::Parser;
use inventory_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "inventory-server",
    about = "REST API инвентаря серверов"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:8080", env = "LISTEN_ADDR")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./inventory.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,

    /// Origin фронтенда, которому разрешён CORS
    #[arg(long, default_value = "http://localhost:3000", env = "CORS_ORIGIN")]
    cors_origin: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
        cors_origin: cli.cors_origin,
    };

    inventory_server::run(config).await
}
