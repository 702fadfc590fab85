//! Mock facility source for development without API access.
//!
//! Loads facility rows from a JSON file (an array of dataset rows) and
//! serves station searches from memory.

use std::path::Path;

use crate::domain::{FacilityRow, StationName};

use super::error::FacilityError;
use super::types::FacilityRowDto;
use super::{FacilitySearch, FacilitySource};

/// In-memory facility source backed by a row fixture.
#[derive(Debug, Clone)]
pub struct MockFacilityClient {
    rows: Vec<FacilityRow>,
    strict_match: bool,
}

impl MockFacilityClient {
    /// Load rows from a JSON file containing an array of dataset rows.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FacilityError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| FacilityError::Fixture {
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let dtos: Vec<FacilityRowDto> =
            serde_json::from_str(&json).map_err(|e| FacilityError::Fixture {
                message: format!("Failed to parse {:?}: {}", path, e),
            })?;

        Ok(Self::from_rows(
            dtos.into_iter().map(FacilityRowDto::into_row).collect(),
        ))
    }

    /// Build a mock source directly from domain rows.
    pub fn from_rows(rows: Vec<FacilityRow>) -> Self {
        Self {
            rows,
            strict_match: true,
        }
    }

    /// Set the zero-match policy (defaults to strict, like the real client).
    pub fn with_strict_match(mut self, strict: bool) -> Self {
        self.strict_match = strict;
        self
    }

    /// Number of rows loaded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the fixture is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FacilitySource for MockFacilityClient {
    /// Mimics `FacilityClient::search_by_station_name` against the
    /// in-memory rows. Never reports failed ranges.
    async fn search_by_station_name(
        &self,
        name: &StationName,
    ) -> Result<FacilitySearch, FacilityError> {
        let query = name.search_query();

        let matched: Vec<FacilityRow> = self
            .rows
            .iter()
            .filter(|row| row.station_name.contains(&query))
            .cloned()
            .collect();

        if matched.is_empty() && self.strict_match {
            return Err(FacilityError::NoSearchResult);
        }

        Ok(FacilitySearch {
            rows: matched,
            failed_ranges: 0,
        })
    }
}
