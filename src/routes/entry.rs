use std::path::PathBuf;
use std::sync::Arc;

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::state::AppState;

use super::people;

pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = resolve_public_dir();
    Router::new()
        .route("/", get(index))
        .nest("/people", people::router(state))
        .route_service("/{*file}", ServeDir::new(public_dir))
}

async fn index() -> Redirect {
    Redirect::to("/people")
}

fn resolve_public_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("APP_PUBLIC_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}
