//! API endpoint configuration.
//!
//! Endpoints hang off `{base_url}/{cohort}/players`. Resolution order:
//! explicit flag, then environment, then the built-in defaults.

use std::env;

use crate::model::PlayerId;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
/// Default cohort segment of the API path.
pub const DEFAULT_COHORT: &str = "2305-FTB-ET-WEB-PT";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "PUPPY_BOWL_API_URL";
/// Environment variable overriding the cohort.
pub const ENV_COHORT: &str = "PUPPY_BOWL_COHORT";

/// Where the roster API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve the config from flag values, the environment, then defaults.
    #[must_use]
    pub fn resolve(base_url: Option<String>, cohort: Option<String>) -> Self {
        Self::resolve_with(base_url, cohort, |key| env::var(key).ok())
    }

    fn resolve_with(
        base_url: Option<String>,
        cohort: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let base_url = base_url
            .or_else(|| lookup(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let cohort = cohort
            .or_else(|| lookup(ENV_COHORT))
            .unwrap_or_else(|| DEFAULT_COHORT.to_string());

        Self {
            // A trailing slash in an override would double up in the URLs.
            base_url: base_url.trim_end_matches('/').to_string(),
            cohort,
        }
    }

    /// URL of the player collection.
    #[must_use]
    pub fn players_url(&self) -> String {
        format!("{}/{}/players", self.base_url, self.cohort)
    }

    /// URL of a single player.
    #[must_use]
    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/{}/players/{}", self.base_url, self.cohort, id.raw())
    }
}
