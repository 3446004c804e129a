//! In-memory KML document model and placemark builders.
//!
//! A [`Document`] always starts with the shared styles followed by
//! placemarks in the order they were pushed. Serialisation lives in
//! [`writer`].

use geo::{Coord, LineString, Point};
use log::info;

use crate::{Findpoint, RoutePoint, Waypoint};

mod style;
pub mod writer;

pub use style::{Color, IconStyle, LineStyle, PolyStyle, SHARED_STYLES, Style, StyleId};
pub use writer::{KML_NAMESPACE, KmlWriteError, write_kml};

/// Geometry carried by a placemark.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// An open path, possibly with zero or one vertex.
    LineString(LineString<f64>),
    /// A single position.
    Point(Point<f64>),
}

impl Geometry {
    /// Vertices in output order (`x = longitude`, `y = latitude`).
    pub fn coords(&self) -> &[Coord] {
        match self {
            Self::LineString(line) => &line.0,
            Self::Point(point) => std::slice::from_ref(&point.0),
        }
    }
}

/// A named, styled feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    /// Display name.
    pub name: String,
    /// Shared style referenced through `styleUrl`.
    pub style: StyleId,
    /// Feature geometry.
    pub geometry: Geometry,
}

/// Build the path placemark for a hunt.
///
/// # Examples
///
/// ```
/// use xctransfer_core::{RoutePoint, StyleId, kml::route_placemark};
///
/// let placemark = route_placemark("Ridge Trail", &[RoutePoint::new(10.0, 50.0)]);
/// assert_eq!(placemark.style, StyleId::Route);
/// assert_eq!(placemark.geometry.coords().len(), 1);
/// ```
pub fn route_placemark(name: &str, points: &[RoutePoint]) -> Placemark {
    info!("Way generation: {name}");
    let line: LineString<f64> = points.iter().map(|point| point.to_coord()).collect();
    Placemark {
        name: name.to_owned(),
        style: StyleId::Route,
        geometry: Geometry::LineString(line),
    }
}

/// Build the point placemark for a waypoint.
pub fn waypoint_placemark(waypoint: &Waypoint) -> Placemark {
    info!("Waypoint generation: {}", waypoint.name);
    marker(&waypoint.name, waypoint.location(), StyleId::Waypoint)
}

/// Build the point placemark for a findpoint.
pub fn findpoint_placemark(findpoint: &Findpoint) -> Placemark {
    info!("Findpoint generation: {}", findpoint.name);
    marker(&findpoint.name, findpoint.location(), StyleId::Findpoint)
}

fn marker(name: &str, location: RoutePoint, style: StyleId) -> Placemark {
    Placemark {
        name: name.to_owned(),
        style,
        geometry: Geometry::Point(Point(location.to_coord())),
    }
}

/// A `<Document>` with shared styles and placemarks.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    styles: Vec<Style>,
    placemarks: Vec<Placemark>,
}

impl Document {
    /// An empty document declaring [`SHARED_STYLES`].
    pub fn new() -> Self {
        Self {
            styles: SHARED_STYLES.to_vec(),
            placemarks: Vec::new(),
        }
    }

    /// Append a placemark after those already present.
    pub fn push(&mut self, placemark: Placemark) {
        self.placemarks.push(placemark);
    }

    /// Declared styles.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Placemarks in output order.
    pub fn placemarks(&self) -> &[Placemark] {
        &self.placemarks
    }

    /// Number of placemarks referencing `style`.
    pub fn count_styled(&self, style: StyleId) -> usize {
        self.placemarks
            .iter()
            .filter(|placemark| placemark.style == style)
            .count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Placemark> for Document {
    fn extend<I: IntoIterator<Item = Placemark>>(&mut self, iter: I) {
        self.placemarks.extend(iter);
    }
}
