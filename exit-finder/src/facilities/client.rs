//! Facility dataset HTTP client.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{FacilityRow, StationName};

use super::error::FacilityError;
use super::types::{FacilityInfoResponse, FacilityRowDto};
use super::{FacilitySearch, FacilitySource};

/// Default base URL for the Seoul open-data API.
const DEFAULT_BASE_URL: &str = "http://openapi.seoul.go.kr:8088";

/// Dataset service name, part of the request path.
const SERVICE_NAME: &str = "SeoulMetroFaciInfo";

/// Fixed, non-overlapping index ranges covering the whole dataset.
///
/// The dataset holds well under 3000 rows; three ranges of 1000 fetch it
/// exhaustively in one concurrent pass.
pub const PAGE_RANGES: [(u32, u32); 3] = [(1, 1000), (1001, 2000), (2001, 3000)];

/// Configuration for the facility client.
#[derive(Debug, Clone)]
pub struct FacilityClientConfig {
    /// API key, part of the request path
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Whether zero substring matches is an error rather than an empty
    /// success
    pub strict_match: bool,
}

impl FacilityClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            strict_match: true,
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

    /// Set the zero-match policy.
    pub fn with_strict_match(mut self, strict: bool) -> Self {
        self.strict_match = strict;
        self
    }
}

/// Client for the transit facility dataset.
#[derive(Debug, Clone)]
pub struct FacilityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    strict_match: bool,
}

impl FacilityClient {
    /// Create a new facility client.
    pub fn new(config: FacilityClientConfig) -> Result<Self, FacilityError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            strict_match: config.strict_match,
        })
    }

    /// Fetch one index range. Errors here are the caller's to soft-fail.
    async fn fetch_range(
        &self,
        start: u32,
        end: u32,
        query: &str,
    ) -> Result<Vec<FacilityRow>, FacilityError> {
        let url = format!(
            "{}/{}/json/{}/{}/{}/{}",
            self.base_url, self.api_key, SERVICE_NAME, start, end, query
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FacilityError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: FacilityInfoResponse =
            serde_json::from_str(&body).map_err(|e| FacilityError::Json {
                message: e.to_string(),
            })?;

        let rows = envelope
            .seoul_metro_faci_info
            .and_then(|body| body.row)
            .unwrap_or_default();

        Ok(rows.into_iter().map(FacilityRowDto::into_row).collect())
    }
}

impl FacilitySource for FacilityClient {
    /// Search facility rows by station name.
    ///
    /// All page ranges are fetched concurrently; a range that fails is
    /// degraded to an empty partial result and counted in
    /// `failed_ranges`, so a transient failure in one range never aborts
    /// the whole search. The combined rows are then filtered to those
    /// whose station name contains the derived query.
    async fn search_by_station_name(
        &self,
        name: &StationName,
    ) -> Result<FacilitySearch, FacilityError> {
        let query = name.search_query();
        debug!(%query, "facility dataset query");

        let fetches = PAGE_RANGES
            .iter()
            .map(|&(start, end)| self.fetch_range(start, end, &query));
        let results = join_all(fetches).await;

        let mut rows = Vec::new();
        let mut failed_ranges = 0;
        for (result, &(start, end)) in results.into_iter().zip(PAGE_RANGES.iter()) {
            match result {
                Ok(mut partial) => rows.append(&mut partial),
                Err(e) => {
                    warn!(start, end, error = %e, "page range fetch failed");
                    failed_ranges += 1;
                }
            }
        }

        let matched: Vec<FacilityRow> = rows
            .into_iter()
            .filter(|row| row.station_name.contains(&query))
            .collect();
        debug!(matched = matched.len(), failed_ranges, "facility search done");

        if matched.is_empty() && self.strict_match {
            return Err(FacilityError::NoSearchResult);
        }

        Ok(FacilitySearch {
            rows: matched,
            failed_ranges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FacilityClientConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.strict_match);
    }

    #[test]
    fn config_builder() {
        let config = FacilityClientConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(10)
            .with_strict_match(false);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.strict_match);
    }

    #[test]
    fn ranges_are_non_overlapping_and_ordered() {
        for window in PAGE_RANGES.windows(2) {
            assert!(window[0].1 < window[1].0);
        }
        for &(start, end) in &PAGE_RANGES {
            assert!(start <= end);
        }
    }

    #[test]
    fn client_creation() {
        let client = FacilityClient::new(FacilityClientConfig::new("test-key"));
        assert!(client.is_ok());
    }
}
