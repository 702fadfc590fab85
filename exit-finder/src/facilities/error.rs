//! Facility dataset error types.

/// Errors that can occur when querying the facility dataset.
#[derive(Debug, thiserror::Error)]
pub enum FacilityError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("facility API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No row matched the station-name query (strict-match policy)
    #[error("no facility rows matched the station query")]
    NoSearchResult,

    /// Local fixture for the mock source could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FacilityError::NoSearchResult;
        assert_eq!(err.to_string(), "no facility rows matched the station query");

        let err = FacilityError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "facility API error 503: Service Unavailable"
        );

        let err = FacilityError::Fixture {
            message: "rows.json missing".into(),
        };
        assert_eq!(err.to_string(), "fixture error: rows.json missing");
    }
}
