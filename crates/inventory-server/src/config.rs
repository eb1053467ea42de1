//! Конфигурация сервера инвентаря.

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:8080")
    pub listen: String,

    /// URL подключения к БД (sqlite, postgres или mysql)
    pub db_url: String,

    /// Единственный origin, которому разрешены кросс-доменные запросы
    pub cors_origin: String,
}

