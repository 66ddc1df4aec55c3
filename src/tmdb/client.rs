use super::{
    HttpClient, Result,
    api_types::{EpisodeDetails, SearchResults, SeasonDetails, ShowDetails},
};
use serde::de::DeserializeOwned;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "en-US";

/// Client configuration, fixed once the client is built
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Language tag for localized fields
    pub language: String,
    /// Whether search may return adult titles
    pub include_adult: bool,
    /// API root, without a trailing slash
    pub base_url: String,
}

impl TmdbConfig {
    /// Create new configuration with the default language and adult content excluded
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            include_adult: false,
            base_url: TMDB_BASE_URL.to_string(),
        }
    }

    /// Set language; an empty tag keeps the default
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.language = if language.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            language
        };
        self
    }

    #[must_use]
    pub const fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }

    /// Point the client at another API root (used against mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// TMDB TV API client
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent requests.
pub struct TmdbClient {
    client: HttpClient,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(&config.base_url)?,
            config,
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<T> {
        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", self.config.api_key.as_str()),
            ("language", self.config.language.as_str()),
        ];
        params.extend_from_slice(extra_params);

        self.client.get_with_params(endpoint, &params).await
    }

    /// Search TV shows by name
    ///
    /// `page` goes to TMDB as given; TMDB decides whether it is acceptable.
    /// A query without matches yields an empty result list, not an error.
    pub async fn search_shows(&self, query: &str, page: &str) -> Result<SearchResults> {
        let include_adult = if self.config.include_adult {
            "true"
        } else {
            "false"
        };

        self.request(
            "/search/tv",
            &[
                ("query", query),
                ("page", page),
                ("include_adult", include_adult),
            ],
        )
        .await
    }

    /// Full metadata for a single show
    pub async fn show_details(&self, id: &str) -> Result<ShowDetails> {
        let endpoint = format!("/tv/{id}");
        self.request(&endpoint, &[]).await
    }

    /// Season metadata with its episodes
    ///
    /// The returned record carries `id` as `show_id` when it is a valid
    /// integer; otherwise `show_id` stays unset.
    pub async fn season_details(&self, id: &str, season_number: &str) -> Result<SeasonDetails> {
        let endpoint = format!("/tv/{id}/season/{season_number}");
        let mut season: SeasonDetails = self.request(&endpoint, &[]).await?;
        season.show_id = id.parse().ok();
        Ok(season)
    }

    pub async fn episode_details(
        &self,
        id: &str,
        season_number: &str,
        episode_number: &str,
    ) -> Result<EpisodeDetails> {
        let endpoint = format!("/tv/{id}/season/{season_number}/episode/{episode_number}");
        self.request(&endpoint, &[]).await
    }
}
