//! Geographic coordinates and cell bounding boxes.

use std::fmt;

use crate::error::{Error, Result};

/// Southern latitude limit.
pub const MIN_LAT: f64 = -90.0;
/// Northern latitude limit.
pub const MAX_LAT: f64 = 90.0;
/// Western longitude limit.
pub const MIN_LON: f64 = -180.0;
/// Eastern longitude limit.
pub const MAX_LON: f64 = 180.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate without validation.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both axes are finite and within the WGS84 ranges.
    ///
    /// NaN fails both range checks and is reported as out of range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LAT..=MAX_LAT).contains(&self.lat) {
            log::warn!("Rejecting coordinate with latitude {}", self.lat);
            return Err(Error::InvalidLatitude(self.lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&self.lon) {
            log::warn!("Rejecting coordinate with longitude {}", self.lon);
            return Err(Error::InvalidLongitude(self.lon));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Build from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// The area covered by a geohash cell.
///
/// Cells come from binary subdivision of the fixed global range, so a box never
/// crosses the antimeridian and `sw` is always component-wise below `ne`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southwest corner.
    pub sw: Coordinate,
    /// Northeast corner.
    pub ne: Coordinate,
}

impl BoundingBox {
    /// The whole globe; the cell of the empty prefix.
    pub const WORLD: Self = Self {
        sw: Coordinate::new(MIN_LAT, MIN_LON),
        ne: Coordinate::new(MAX_LAT, MAX_LON),
    };

    /// Unrounded center of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            lat: (self.sw.lat + self.ne.lat) / 2.0,
            lon: (self.sw.lon + self.ne.lon) / 2.0,
        }
    }

    /// Height of the box in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.ne.lat - self.sw.lat
    }

    /// Width of the box in degrees of longitude.
    pub fn lon_span(&self) -> f64 {
        self.ne.lon - self.sw.lon
    }

    /// Whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&point.lat)
            && (self.sw.lon..=self.ne.lon).contains(&point.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_ranges() {
        assert!(Coordinate::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinate::new(-90.0, -180.0).validate().is_ok());
        assert_eq!(
            Coordinate::new(90.5, 0.0).validate(),
            Err(Error::InvalidLatitude(90.5))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.1).validate(),
            Err(Error::InvalidLongitude(-180.1))
        );
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0).validate(),
            Err(Error::InvalidLatitude(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY).validate(),
            Err(Error::InvalidLongitude(_))
        ));
    }

    #[test]
    fn world_box() {
        let world = BoundingBox::WORLD;
        assert_eq!(world.center(), Coordinate::new(0.0, 0.0));
        assert_eq!(world.lat_span(), 180.0);
        assert_eq!(world.lon_span(), 360.0);
        assert!(world.contains(&Coordinate::new(90.0, -180.0)));
        assert!(!world.contains(&Coordinate::new(91.0, 0.0)));
    }

    #[test]
    fn tuple_conversion() {
        let c: Coordinate = (57.648, 10.41).into();
        assert_eq!(c, Coordinate::new(57.648, 10.41));
        assert_eq!(c.to_string(), "(57.648, 10.41)");
    }
}
