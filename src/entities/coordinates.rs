use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// A longitude/latitude pair in WGS84 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn validate(self) -> Result<Self, Error> {
        if self.lng.is_finite() && self.lat.is_finite() {
            Ok(self)
        } else {
            Err(invalid_input_error())
        }
    }

    /// Shifts the longitude by whole turns until it lies within 180 degrees
    /// of `reference_lng`, so a feature picked on a repeated world copy keeps
    /// the copy that was clicked.
    pub fn wrapped_near(self, reference_lng: f64) -> Self {
        let offset = reference_lng - self.lng;

        if offset.abs() <= 180.0 {
            return self;
        }

        Self {
            lng: self.lng + 360.0 * (offset / 360.0).round(),
            lat: self.lat,
        }
    }

    /// GeoJSON position order.
    pub fn position(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(c: Coordinates) -> Self {
        Coord { x: c.lng, y: c.lat }
    }
}

/// Formats as `lng,lat`, the waypoint syntax of directions URLs.
impl From<Coordinates> for String {
    fn from(c: Coordinates) -> Self {
        format!("{},{}", c.lng, c.lat)
    }
}

#[test]
fn wrapped_near_moves_to_the_clicked_copy() {
    let feature = Coordinates::new(-6.8976, 33.9514);

    let east = feature.wrapped_near(353.0);
    assert_eq!(east.lng, -6.8976 + 360.0);
    assert_eq!(east.lat, 33.9514);

    let west = feature.wrapped_near(-367.0);
    assert_eq!(west.lng, -6.8976 - 360.0);

    assert_eq!(feature.wrapped_near(-6.9), feature);
}

#[test]
fn validate_rejects_non_finite() {
    assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
    assert!(Coordinates::new(0.0, f64::INFINITY).validate().is_err());
    assert!(Coordinates::new(-6.8976, 33.9514).validate().is_ok());
}

#[test]
fn waypoint_string_is_lng_first() {
    let waypoint: String = Coordinates::new(-6.894425, 33.955313).into();
    assert_eq!(waypoint, "-6.894425,33.955313");
}
