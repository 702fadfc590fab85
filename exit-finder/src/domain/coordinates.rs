//! Device coordinate type.

use std::fmt;

/// Error returned when constructing coordinates outside the valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A latitude/longitude pair in degrees.
///
/// Valid by construction: latitude is within [-90, 90] and longitude
/// within [-180, 180], and neither is NaN.
///
/// # Examples
///
/// ```
/// use exit_finder::domain::Coordinates;
///
/// let city_hall = Coordinates::new(37.5663, 126.9779).unwrap();
/// assert_eq!(city_hall.latitude(), 37.5663);
///
/// // Out-of-range values are rejected
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(0.0, -181.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Construct coordinates, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinates {
                reason: "components must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs successfully.
        #[test]
        fn in_range_always_valid(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(Coordinates::new(lat, lon).is_ok());
        }

        /// Latitude outside the range is always rejected.
        #[test]
        fn out_of_range_latitude_rejected(
            lat in prop_oneof![90.0f64..1e6, -1e6f64..-90.0].prop_filter("strictly outside", |v| v.abs() > 90.0),
            lon in -180.0f64..=180.0,
        ) {
            prop_assert!(Coordinates::new(lat, lon).is_err());
        }

        /// Accessors return exactly what was stored.
        #[test]
        fn accessors_roundtrip(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let c = Coordinates::new(lat, lon).unwrap();
            prop_assert_eq!(c.latitude(), lat);
            prop_assert_eq!(c.longitude(), lon);
        }
    }
}
