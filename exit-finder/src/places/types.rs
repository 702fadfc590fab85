//! Place-search API response DTOs.
//!
//! These map directly to the Kakao local category-search JSON. `Option`
//! is used liberally because the upstream omits fields rather than
//! sending null in several cases.

use serde::Deserialize;

/// Top-level response from the category search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSearchResponse {
    /// Candidate places, ordered nearest-first by the upstream service.
    pub documents: Vec<PlaceDocument>,

    /// Search metadata.
    pub meta: PlaceMeta,
}

/// One place candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    /// Display name, e.g. `"신설동역 1호선"`.
    pub place_name: Option<String>,

    /// Distance from the search center in meters (sent as a string).
    pub distance: Option<String>,

    /// Category group code; `"SW8"` for subway stations.
    pub category_group_code: Option<String>,
}

/// Search metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceMeta {
    /// Total number of matches for the query.
    pub total_count: i64,
}
