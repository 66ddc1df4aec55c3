//! Client for The Movie Database (TMDB) v3 API.
//!
//! Only the four TV endpoints the frontend renders are wrapped: show search,
//! show details, season details and episode details.

mod api_types;
mod client;
mod http;


pub use api_types::{
    Company, Country, Creator, CrewMember, EpisodeDetails, EpisodeSummary, EpisodeToAir, Genre,
    GuestStar, Network, SearchResults, SeasonDetails, SeasonSummary, ShowDetails, ShowSummary,
    SpokenLanguage, image_url,
};
pub use client::{TmdbClient, TmdbConfig};
pub use http::HttpClient;

/// TMDB result type
pub type Result<T> = std::result::Result<T, TmdbError>;

/// TMDB error types
///
/// Transport and decoding failures are passed through untouched. A non-200
/// response displays as its raw body so callers see exactly what TMDB sent.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

impl TmdbError {
    /// HTTP status returned by TMDB, if the request got that far
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
