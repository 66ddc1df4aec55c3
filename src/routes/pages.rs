use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    Ctx,
    error::{NetstarError, PageResult},
    templates::{
        DetailsTemplate, EpisodeDetailsTemplate, IndexTemplate, SearchView,
        SeasonDetailsTemplate, render,
    },
};

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Show name to search for
    pub q: Option<String>,
    /// Page number, passed on to TMDB untouched (default: 1)
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShowQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonQuery {
    pub id: Option<String>,
    pub season_number: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeQuery {
    pub id: Option<String>,
    pub season_number: Option<String>,
    pub episode_number: Option<String>,
}

// ============ Handlers ============

/// Landing page
/// GET /
async fn index() -> PageResult {
    render(&IndexTemplate { search: None })
}

/// Search TV shows
/// GET /search?q=...&page=...
async fn search(State(ctx): State<Ctx>, Query(params): Query<SearchQuery>) -> PageResult {
    let query = params.q.unwrap_or_default();
    let page = params
        .page
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "1".to_string());

    let results = ctx.tmdb.search_shows(&query, &page).await?;
    info!(query = %query, page = %page, "Searched TV shows");

    let page_number = page.parse::<i64>().map_err(|e| {
        NetstarError::InvalidParameter(format!("page {page:?} is not a number: {e}"))
    })?;

    render(&IndexTemplate {
        search: Some(SearchView::new(query, page_number, results)),
    })
}

/// Show details
/// GET /details?id=...
async fn show_details(State(ctx): State<Ctx>, Query(params): Query<ShowQuery>) -> PageResult {
    let id = params.id.unwrap_or_default();
    let show = ctx.tmdb.show_details(&id).await?;

    render(&DetailsTemplate { show })
}

/// Season details
/// GET /details/season?id=...&seasonNumber=...
async fn season_details(
    State(ctx): State<Ctx>,
    Query(params): Query<SeasonQuery>,
) -> PageResult {
    let id = params.id.unwrap_or_default();
    let season_number = params.season_number.unwrap_or_default();
    let season = ctx.tmdb.season_details(&id, &season_number).await?;

    render(&SeasonDetailsTemplate { season })
}

/// Episode details
/// GET /details/episode?id=...&seasonNumber=...&episodeNumber=...
async fn episode_details(
    State(ctx): State<Ctx>,
    Query(params): Query<EpisodeQuery>,
) -> PageResult {
    let id = params.id.unwrap_or_default();
    let season_number = params.season_number.unwrap_or_default();
    let episode_number = params.episode_number.unwrap_or_default();
    let episode = ctx
        .tmdb
        .episode_details(&id, &season_number, &episode_number)
        .await?;

    render(&EpisodeDetailsTemplate {
        show_id: id,
        episode,
    })
}

/// Mount page routes
pub fn mount() -> Router<Ctx> {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/details", get(show_details))
        .route("/details/season", get(season_details))
        .route("/details/episode", get(episode_details))
}
