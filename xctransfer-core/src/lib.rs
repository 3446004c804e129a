//! Core domain types for the XC transfer exporter.
//!
//! Records are read from a share-data SQLite file, turned into KML
//! placemarks and written out as a single document. Coordinates are WGS84
//! degrees and pass through unvalidated.

use geo::Coord;

pub mod kml;
pub mod pipeline;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use kml::{Color, Document, Geometry, KmlWriteError, Placemark, Style, StyleId, write_kml};
pub use pipeline::{ExportSummary, Pipeline, PipelineError, write_document};
pub use store::{HuntSource, SqliteHuntStore, StoreError};

/// A named geohunt whose recorded track becomes one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunt {
    /// Unique identifier (`geohunt.uuid`).
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Hunt {
    /// Construct a hunt from its identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single recorded position, in degrees.
///
/// # Examples
///
/// ```
/// use xctransfer_core::RoutePoint;
///
/// let point = RoutePoint::new(50.1, 10.1);
/// let coord = point.to_coord();
/// assert_eq!((coord.x, coord.y), (10.1, 50.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl RoutePoint {
    /// Construct a point from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert into a `geo` coordinate (`x = longitude`, `y = latitude`).
    pub const fn to_coord(self) -> Coord {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

impl From<RoutePoint> for Coord {
    fn from(point: RoutePoint) -> Self {
        point.to_coord()
    }
}

/// A user-placed waypoint marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Marker label.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Waypoint {
    /// Construct a waypoint.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Position of the marker.
    pub const fn location(&self) -> RoutePoint {
        RoutePoint::new(self.latitude, self.longitude)
    }
}

/// A find recorded during a hunt.
#[derive(Debug, Clone, PartialEq)]
pub struct Findpoint {
    /// Marker label.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Findpoint {
    /// Construct a findpoint.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Position of the marker.
    pub const fn location(&self) -> RoutePoint {
        RoutePoint::new(self.latitude, self.longitude)
    }
}
