//! Place-search client.
//!
//! Resolves the nearest subway station to a coordinate pair via the Kakao
//! local category-search API. Only the top (nearest) candidate is used.

mod client;
mod error;
mod types;

use std::future::Future;

pub use client::{PlaceClient, PlaceClientConfig};
pub use error::PlaceError;
pub use types::{PlaceDocument, PlaceMeta, PlaceSearchResponse};

use crate::domain::{Coordinates, StationName};

/// Seam for resolving coordinates to the nearest station name.
pub trait PlaceResolver {
    fn resolve_nearest_station(
        &self,
        coords: Coordinates,
    ) -> impl Future<Output = Result<StationName, PlaceError>> + Send;
}
