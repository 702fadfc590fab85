//! Device location seam.
//!
//! The real GPS provider lives on the device and is out of scope; the
//! workflow only needs "give me one coordinate pair or fail". Anything
//! implementing [`Geolocator`] can be plugged into the state holder.

use std::future::Future;

use crate::domain::Coordinates;

/// Errors from a location lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LocationError {
    /// The provider could not produce a position.
    #[error("location unavailable: {reason}")]
    Unavailable { reason: String },

    /// The provider did not answer within the wait ceiling.
    #[error("location request timed out")]
    TimedOut,
}

/// One-shot device location lookup.
pub trait Geolocator {
    /// Return the current position, or fail if it cannot be determined.
    fn current_location(
        &self,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Geolocator returning a fixed position.
///
/// Used by the binary (coordinates supplied on the command line) and by
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: Coordinates,
}

impl FixedGeolocator {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

impl Geolocator for FixedGeolocator {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.position)
    }
}
