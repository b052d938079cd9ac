use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_FILE: &str = "index.html";

/// Router serving `static_dir`: `/` maps to `index.html`, everything else is
/// a plain file lookup (404 when absent).
pub fn app(static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(INDEX_FILE)))
        .fallback_service(ServeDir::new(static_dir))
}
