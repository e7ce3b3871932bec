use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    db::{connection, seed},
    routes::router,
    state::AppState,
};

/// In-memory SQLite with the schema synced. The pool is capped at one
/// connection so every statement sees the same database.
pub async fn test_db() -> DatabaseConnection {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".to_string();
    cfg.database.max_connections = 1;
    cfg.database.min_idle = 1;
    connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory sqlite")
}

pub async fn test_state() -> Arc<AppState> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".to_string();
    cfg.database.max_connections = 1;
    cfg.database.min_idle = 1;

    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory sqlite");
    seed::ensure_zombies(&db).await.expect("seed zombies");
    AppState::new(cfg, db)
}

pub fn test_router(state: &Arc<AppState>) -> Router {
    router(Arc::clone(state))
}
