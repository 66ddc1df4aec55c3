use axum::Router;
use tower_http::services::ServeDir;

use crate::Ctx;

pub mod pages;

/// Directory static files are served from, relative to the working directory
pub const ASSETS_DIR: &str = "assets";

/// Mount all routes
pub fn mount() -> Router<Ctx> {
    Router::new()
        .merge(pages::mount())
        .nest_service("/assets", ServeDir::new(ASSETS_DIR))
}
