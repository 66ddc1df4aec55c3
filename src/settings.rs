//! Runtime settings read from the process environment.
//!
//! | Variable        | Default | Meaning                                |
//! |-----------------|---------|----------------------------------------|
//! | `API_KEY`       | -       | TMDB API key, required                 |
//! | `LANGUAGE`      | `en-US` | Language tag sent to TMDB              |
//! | `INCLUDE_ADULT` | `false` | Whether search returns adult titles    |
//! | `PORT`          | `3000`  | Port the web server listens on         |
//!
//! Empty variables count as unset. `INCLUDE_ADULT` accepts `1`, `t`, `T`,
//! `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`, `false`, `False`.

use config::{Config, Environment};
use serde::{Deserialize, Deserializer, de::Error as _};
use validator::Validate;

use crate::{error::NetstarError, tmdb::TmdbConfig};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(length(min = 1, message = "API_KEY must be set"))]
    pub api_key: String,
    pub language: String,
    #[serde(deserialize_with = "parse_bool")]
    pub include_adult: bool,
    pub port: u16,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, NetstarError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, NetstarError> {
        let settings: Self = Config::builder()
            .set_default("language", "en-US")?
            .set_default("include_adult", false)?
            .set_default("port", 3000)?
            .add_source(environment.ignore_empty(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// TMDB client configuration derived from these settings
    #[must_use]
    pub fn tmdb_config(&self) -> TmdbConfig {
        TmdbConfig::new(&self.api_key)
            .with_language(&self.language)
            .with_include_adult(self.include_adult)
    }
}

/// Digits, single letters and the three spellings of true/false; `yes`/`on` are rejected
fn parse_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.as_str() {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(D::Error::custom(format!(
                "invalid boolean {text:?} for include_adult"
            ))),
        },
    }
}
