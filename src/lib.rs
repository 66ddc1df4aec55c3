//! Server-rendered frontend for browsing TV shows from The Movie Database.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod settings;
pub mod templates;
pub mod tmdb;

pub use error::{NetstarError, PageResult};

use tmdb::TmdbClient;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct Ctx {
    pub tmdb: Arc<TmdbClient>,
}

impl Ctx {
    #[must_use]
    pub fn new(tmdb: TmdbClient) -> Self {
        Self {
            tmdb: Arc::new(tmdb),
        }
    }
}

/// Build the application router
pub fn app(ctx: Ctx) -> Router {
    routes::mount()
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
