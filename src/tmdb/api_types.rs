use serde::Deserialize;

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Build a full image URL from a TMDB image path
#[must_use]
pub fn image_url(path: Option<&str>, size: &str) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{TMDB_IMAGE_BASE}/{size}{p}"))
}

fn year_of(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
}

// Search responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResults {
    pub page: i64,
    #[serde(default)]
    pub results: Vec<ShowSummary>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowSummary {
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    pub id: i64,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub vote_count: i64,
    pub name: String,
    #[serde(default)]
    pub original_name: String,
}

impl ShowSummary {
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        image_url(self.poster_path.as_deref(), "w342")
    }

    /// Year of the first air date, if TMDB knows it
    #[must_use]
    pub fn first_air_year(&self) -> Option<&str> {
        year_of(self.first_air_date.as_deref())
    }
}

// Detail responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowDetails {
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
    #[serde(default)]
    pub episode_run_time: Vec<i64>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub homepage: String,
    pub id: i64,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub languages: Vec<String>,
    pub last_air_date: Option<String>,
    pub last_episode_to_air: Option<EpisodeToAir>,
    pub name: String,
    pub next_episode_to_air: Option<EpisodeToAir>,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub number_of_episodes: i64,
    #[serde(default)]
    pub number_of_seasons: i64,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<Company>,
    #[serde(default)]
    pub production_countries: Vec<Country>,
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(rename = "type", default)]
    pub show_type: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

impl ShowDetails {
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        image_url(self.poster_path.as_deref(), "w500")
    }

    #[must_use]
    pub fn backdrop_url(&self) -> Option<String> {
        image_url(self.backdrop_path.as_deref(), "original")
    }

    /// Genre names joined for display
    #[must_use]
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonDetails {
    pub air_date: Option<String>,
    #[serde(default)]
    pub episodes: Vec<EpisodeSummary>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub id: i64,
    pub poster_path: Option<String>,
    pub season_number: i64,
    /// Show the season was requested under; not part of the TMDB payload
    #[serde(skip)]
    pub show_id: Option<i64>,
}

impl SeasonDetails {
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        image_url(self.poster_path.as_deref(), "w342")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpisodeSummary {
    pub air_date: Option<String>,
    pub episode_number: i64,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub guest_stars: Vec<GuestStar>,
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub production_code: String,
    pub season_number: i64,
    pub still_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

impl EpisodeSummary {
    #[must_use]
    pub fn still_url(&self) -> Option<String> {
        image_url(self.still_path.as_deref(), "w300")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpisodeDetails {
    pub air_date: Option<String>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    pub episode_number: i64,
    #[serde(default)]
    pub guest_stars: Vec<GuestStar>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub id: i64,
    #[serde(default)]
    pub production_code: String,
    pub season_number: i64,
    pub still_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

impl EpisodeDetails {
    #[must_use]
    pub fn still_url(&self) -> Option<String> {
        image_url(self.still_path.as_deref(), "w780")
    }
}

// Common types
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Creator {
    pub id: i64,
    #[serde(default)]
    pub credit_id: String,
    pub name: String,
    #[serde(default)]
    pub gender: i64,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Last or next episode to air, as embedded in show details
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpisodeToAir {
    pub air_date: Option<String>,
    pub episode_number: i64,
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub production_code: String,
    pub season_number: i64,
    pub still_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Network {
    pub id: i64,
    pub name: String,
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub id: i64,
    pub logo_path: Option<String>,
    pub name: String,
    #[serde(default)]
    pub origin_country: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonSummary {
    pub air_date: Option<String>,
    #[serde(default)]
    pub episode_count: i64,
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub season_number: i64,
}

impl SeasonSummary {
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        image_url(self.poster_path.as_deref(), "w185")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default)]
    pub english_name: String,
    pub iso_639_1: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    #[serde(default)]
    pub credit_id: String,
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub gender: i64,
    #[serde(default)]
    pub popularity: f64,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuestStar {
    pub id: i64,
    #[serde(default)]
    pub credit_id: String,
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub gender: i64,
    #[serde(default)]
    pub popularity: f64,
    pub profile_path: Option<String>,
}

impl GuestStar {
    #[must_use]
    pub fn profile_url(&self) -> Option<String> {
        image_url(self.profile_path.as_deref(), "w185")
    }
}
