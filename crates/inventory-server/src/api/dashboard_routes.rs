//! Маршруты панели мониторинга фронтенда.
//!
//! Данные фиксированные: реальный сбор метрик и алертов здесь не выполняется.

use crate::api::response::ApiResponse;
use crate::api::AppState;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(dashboard_stats))
        .route("/server/list", get(server_list))
        .route("/server/monitor", get(server_monitor))
        .route("/monitor/alerts", get(alerts))
}

/// GET /api/dashboard/stats
async fn dashboard_stats() -> ApiResponse<Value> {
    ApiResponse::ok(json!({
        "servers": 12,
        "running": 10,
        "alerts": 3,
        "deployments": 28
    }))
}

/// GET /api/server/list
async fn server_list() -> ApiResponse<Value> {
    ApiResponse::ok(json!([
        { "id": 1, "name": "web-01", "ip": "192.168.1.101", "status": "running", "cpu": 35, "memory": 62 },
        { "id": 2, "name": "web-02", "ip": "192.168.1.102", "status": "running", "cpu": 41, "memory": 58 },
        { "id": 3, "name": "db-master", "ip": "192.168.1.110", "status": "running", "cpu": 67, "memory": 81 },
        { "id": 4, "name": "cache-01", "ip": "192.168.1.120", "status": "stopped", "cpu": 0, "memory": 0 }
    ]))
}

/// GET /api/server/monitor
async fn server_monitor() -> ApiResponse<Value> {
    ApiResponse::ok(json!([
        { "host": "web-01", "cpu": [30, 35, 42, 38, 35], "memory": [60, 61, 63, 62, 62], "disk": 48, "network": { "in": 1250, "out": 860 } },
        { "host": "web-02", "cpu": [38, 44, 40, 39, 41], "memory": [55, 57, 58, 58, 58], "disk": 52, "network": { "in": 1100, "out": 790 } },
        { "host": "db-master", "cpu": [60, 72, 65, 70, 67], "memory": [79, 80, 82, 81, 81], "disk": 73, "network": { "in": 3400, "out": 2900 } }
    ]))
}

/// GET /api/monitor/alerts
async fn alerts() -> ApiResponse<Value> {
    ApiResponse::ok(json!([
        { "id": 1, "level": "critical", "host": "db-master", "message": "CPU usage above 90%", "time": "2024-01-15 10:23:45" },
        { "id": 2, "level": "warning", "host": "web-02", "message": "Disk usage above 80%", "time": "2024-01-15 09:12:03" },
        { "id": 3, "level": "info", "host": "cache-01", "message": "Service stopped", "time": "2024-01-15 08:45:17" }
    ]))
}
