//! Core domain types.

mod coordinates;
mod facility;
mod station;

pub use coordinates::{Coordinates, InvalidCoordinates};
pub use facility::{FacilityGroup, FacilityKind, FacilityRow, STATUS_AVAILABLE};
pub use station::{STATION_SUFFIX, StationName};
