//! Place-search HTTP client.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::domain::{Coordinates, StationName};

use super::PlaceResolver;
use super::error::PlaceError;
use super::types::PlaceSearchResponse;

/// Default base URL for the Kakao local API.
const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com";

/// Category group code for subway stations.
const CATEGORY_SUBWAY: &str = "SW8";

/// Fixed search radius around the device position, in meters.
const SEARCH_RADIUS_M: u32 = 1000;

/// Configuration for the place-search client.
#[derive(Debug, Clone)]
pub struct PlaceClientConfig {
    /// REST API key, sent as `Authorization: KakaoAK {key}`
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlaceClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the place-search API.
#[derive(Debug, Clone)]
pub struct PlaceClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlaceClient {
    /// Create a new place-search client.
    pub fn new(config: PlaceClientConfig) -> Result<Self, PlaceError> {
        let mut headers = HeaderMap::new();

        let auth = HeaderValue::from_str(&format!("KakaoAK {}", config.api_key)).map_err(|_| {
            PlaceError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search subway-category places around a position.
    ///
    /// Results are ordered nearest-first by the upstream service. Single
    /// attempt, no retries.
    pub async fn search_subway_stations(
        &self,
        coords: Coordinates,
    ) -> Result<PlaceSearchResponse, PlaceError> {
        let url = format!("{}/v2/local/search/category.json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("category_group_code", CATEGORY_SUBWAY.to_string()),
                ("x", coords.longitude().to_string()),
                ("y", coords.latitude().to_string()),
                ("radius", SEARCH_RADIUS_M.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PlaceError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PlaceError::Json {
            message: e.to_string(),
        })
    }
}

impl PlaceResolver for PlaceClient {
    /// Resolve the nearest subway station name to a position.
    ///
    /// Takes the top candidate of the category search and normalizes its
    /// display name.
    async fn resolve_nearest_station(
        &self,
        coords: Coordinates,
    ) -> Result<StationName, PlaceError> {
        let response = self.search_subway_stations(coords).await?;

        let Some(nearest) = response.documents.first() else {
            return Err(PlaceError::NoNearbyStation {
                radius_m: SEARCH_RADIUS_M,
            });
        };

        let place_name = nearest
            .place_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(PlaceError::MissingPlaceName)?;

        let station = StationName::normalize(place_name);
        debug!(place = %place_name, station = %station, "nearest subway station");

        Ok(station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PlaceClientConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = PlaceClientConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = PlaceClient::new(PlaceClientConfig::new("test-key"));
        assert!(client.is_ok());
    }
}
