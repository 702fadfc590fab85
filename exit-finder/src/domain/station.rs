//! Station name handling.
//!
//! Place-search results carry display names like `"신설동역 1호선"` or
//! `"시청역(2호선)"`; the facility dataset keys rows by bare station names
//! like `"신설동"`. The conversions between these live here.

use std::fmt;

/// The suffix marker meaning "station" in upstream display names.
pub const STATION_SUFFIX: &str = "역";

/// A subway station name.
///
/// Wraps the display form (usually ending in the station suffix). Use
/// [`StationName::normalize`] for raw place-search names and
/// [`StationName::search_query`] to derive the substring sent to the
/// facility dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Wrap an already-clean name (for example, user search input).
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Extract a canonical station name from a raw place-search display name.
    ///
    /// If the name contains the station suffix marker, everything after the
    /// first occurrence is dropped (place names often append the line, as in
    /// `"신설동역 1호선"`), then a trailing parenthetical disambiguation such
    /// as `"(2호선)"` is dropped and surrounding whitespace trimmed. A name
    /// without the marker is returned unchanged.
    ///
    /// Idempotent: normalizing an already-normalized name is a no-op.
    pub fn normalize(raw: &str) -> Self {
        let Some(idx) = raw.find(STATION_SUFFIX) else {
            return Self(raw.to_string());
        };
        let mut name = &raw[..idx + STATION_SUFFIX.len()];
        if let Some(paren) = name.find('(') {
            name = &name[..paren];
        }
        Self(name.trim().to_string())
    }

    /// Derive the substring query sent to the facility dataset.
    ///
    /// The dataset stores names without the station suffix, so the suffix is
    /// removed. A name consisting only of the suffix would otherwise produce
    /// an empty query that matches every row; in that case the trimmed
    /// original is used instead.
    pub fn search_query(&self) -> String {
        let trimmed = self.0.trim();
        let stripped = trimmed.replace(STATION_SUFFIX, "");
        if stripped.is_empty() && !trimmed.is_empty() {
            trimmed.to_string()
        } else {
            stripped
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// normalize(normalize(x)) == normalize(x) for arbitrary input.
        #[test]
        fn normalize_idempotent(raw in ".{0,40}") {
            let once = StationName::normalize(&raw);
            let twice = StationName::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// Korean-looking inputs with suffix and parenthetical also converge.
        #[test]
        fn normalize_idempotent_station_like(
            stem in "[가-힣]{1,6}",
            line in "[0-9]{1,2}",
        ) {
            let raw = format!("{stem}역({line}호선)");
            let once = StationName::normalize(&raw);
            let twice = StationName::normalize(once.as_str());
            prop_assert_eq!(once.clone(), twice);
            prop_assert_eq!(once.as_str(), format!("{stem}역"));
        }

        /// Once the suffix marker is present, the normalized output never
        /// contains an opening parenthesis; without it the input passes
        /// through verbatim.
        #[test]
        fn normalize_drops_parenthesis_after_suffix(raw in ".{0,40}") {
            let normalized = StationName::normalize(&raw);
            if raw.contains(STATION_SUFFIX) {
                prop_assert!(!normalized.as_str().contains('('));
            } else {
                prop_assert_eq!(normalized.as_str(), raw.as_str());
            }
        }

        /// The derived query is never empty for non-blank names.
        #[test]
        fn search_query_nonempty_for_nonblank(name in "[가-힣A-Za-z]{1,10}(역)?") {
            let query = StationName::new(name).search_query();
            prop_assert!(!query.is_empty());
        }
    }
}
