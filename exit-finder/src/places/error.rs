//! Place-search error types.

/// Errors that can occur when resolving the nearest station.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// HTTP request failed (network error, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check KAKAO_REST_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("place API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No subway station within the search radius
    #[error("no subway station within {radius_m}m")]
    NoNearbyStation { radius_m: u32 },

    /// Top candidate carried no usable display name
    #[error("nearest place has no name")]
    MissingPlaceName,
}
