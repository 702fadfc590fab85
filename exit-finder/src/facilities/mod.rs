//! Transit facility dataset client.
//!
//! Queries the Seoul metro facility dataset (`SeoulMetroFaciInfo`) by
//! station-name substring. The dataset is paginated by row index; a fixed
//! set of ranges covering the whole dataset is fetched concurrently and
//! merged.

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

pub use client::{FacilityClient, FacilityClientConfig, PAGE_RANGES};
pub use error::FacilityError;
pub use mock::MockFacilityClient;
pub use types::{FacilityInfoBody, FacilityInfoResponse, FacilityRowDto, ResultMessage};

use crate::domain::{FacilityRow, StationName};

/// Result of one station search: the matched rows plus how many page
/// ranges soft-failed while assembling them.
///
/// A non-zero `failed_ranges` means the row set is a best-effort union of
/// the ranges that did respond (availability over completeness).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilitySearch {
    pub rows: Vec<FacilityRow>,
    pub failed_ranges: usize,
}

/// Seam for fetching facility rows for a station.
pub trait FacilitySource {
    fn search_by_station_name(
        &self,
        name: &StationName,
    ) -> impl Future<Output = Result<FacilitySearch, FacilityError>> + Send;
}
