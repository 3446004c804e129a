//! Single-pass export from a [`HuntSource`] to KML.

use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::kml::{
    Document, KmlWriteError, StyleId, findpoint_placemark, route_placemark, waypoint_placemark,
    write_kml,
};
use crate::{HuntSource, StoreError};

/// Error raised by [`Pipeline`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading records failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Serialising the document failed.
    #[error(transparent)]
    Write(#[from] KmlWriteError),
}

/// Counts describing an exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Route placemarks, one per hunt.
    pub routes: usize,
    /// Route vertices across all routes.
    pub route_points: usize,
    /// Waypoint placemarks.
    pub waypoints: usize,
    /// Findpoint placemarks.
    pub findpoints: usize,
}

impl ExportSummary {
    /// Summarise an assembled document.
    pub fn of(document: &Document) -> Self {
        Self {
            routes: document.count_styled(StyleId::Route),
            route_points: document
                .placemarks()
                .iter()
                .filter(|placemark| placemark.style == StyleId::Route)
                .map(|placemark| placemark.geometry.coords().len())
                .sum(),
            waypoints: document.count_styled(StyleId::Waypoint),
            findpoints: document.count_styled(StyleId::Findpoint),
        }
    }
}

/// Export run holding the data source for its whole lifetime.
///
/// # Examples
///
/// ```
/// use xctransfer_core::{Pipeline, SqliteHuntStore, write_document};
///
/// fn export(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
///     let pipeline = Pipeline::new(SqliteHuntStore::open(path)?);
///     let document = pipeline.build_document()?;
///     let mut out = Vec::new();
///     write_document(&document, &mut out)?;
///     Ok(out)
/// }
/// ```
#[derive(Debug)]
pub struct Pipeline<S> {
    source: S,
}

impl<S: HuntSource> Pipeline<S> {
    /// Wrap `source` for one export run.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Read every record and assemble the document.
    ///
    /// Routes come first, then waypoints, then findpoints, each group in
    /// source order. Nothing is written until this has succeeded.
    pub fn build_document(&self) -> Result<Document, StoreError> {
        let mut document = Document::new();

        for hunt in self.source.hunts()? {
            let points = self.source.route_points(&hunt)?;
            debug!("hunt {} has {} points", hunt.id, points.len());
            document.push(route_placemark(&hunt.name, &points));
        }
        document.extend(self.source.waypoints()?.iter().map(waypoint_placemark));
        document.extend(self.source.findpoints()?.iter().map(findpoint_placemark));

        Ok(document)
    }

    /// Build and serialise in one step.
    pub fn export<W: Write>(&self, sink: &mut W) -> Result<ExportSummary, PipelineError> {
        let document = self.build_document()?;
        write_document(&document, sink)
    }
}

/// Serialise an assembled document into `sink` and summarise it.
pub fn write_document<W: Write>(
    document: &Document,
    sink: &mut W,
) -> Result<ExportSummary, PipelineError> {
    write_kml(document, sink)?;
    Ok(ExportSummary::of(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kml::Geometry;
    use crate::test_support::{Dataset, MemorySource, mixed_dataset, ridge_trail_dataset};
    use crate::{Findpoint, Hunt, RoutePoint, Waypoint};
    use rstest::rstest;

    fn build(dataset: Dataset) -> Document {
        Pipeline::new(MemorySource::new(dataset))
            .build_document()
            .expect("build document")
    }

    #[rstest]
    fn empty_source_builds_styles_only() {
        let document = build(Dataset::default());
        assert!(document.placemarks().is_empty());
        assert_eq!(document.styles().len(), 3);
        assert_eq!(ExportSummary::of(&document), ExportSummary::default());
    }

    #[rstest]
    fn single_hunt_becomes_one_route() {
        let document = build(ridge_trail_dataset());
        let [route] = document.placemarks() else {
            panic!("expected one placemark");
        };
        assert_eq!(route.name, "Ridge Trail");
        assert_eq!(route.style, StyleId::Route);
        assert!(matches!(route.geometry, Geometry::LineString(_)));
        let coords: Vec<_> = route
            .geometry
            .coords()
            .iter()
            .map(|coord| (coord.y, coord.x))
            .collect();
        assert_eq!(coords, vec![(10.0, 50.0), (10.1, 50.1), (10.2, 50.2)]);
    }

    #[rstest]
    fn groups_are_ordered_routes_waypoints_findpoints() {
        let document = build(mixed_dataset());
        let styles: Vec<_> = document
            .placemarks()
            .iter()
            .map(|placemark| placemark.style)
            .collect();
        assert_eq!(
            styles,
            vec![
                StyleId::Route,
                StyleId::Route,
                StyleId::Route,
                StyleId::Waypoint,
                StyleId::Waypoint,
                StyleId::Findpoint,
            ]
        );
        let names: Vec<_> = document
            .placemarks()
            .iter()
            .map(|placemark| placemark.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Ridge Trail",
                "Empty Valley",
                "Lone Peak",
                "Trailhead",
                "Hut & Spring",
                "Cache <A>",
            ]
        );
    }

    #[rstest]
    fn summary_counts_match_records() {
        let dataset = mixed_dataset();
        let pipeline = Pipeline::new(MemorySource::new(dataset.clone()));
        let mut sink = Vec::new();
        let summary = pipeline.export(&mut sink).expect("export");

        let point_total: usize = dataset.hunts.iter().map(|(_, points)| points.len()).sum();
        assert_eq!(
            summary,
            ExportSummary {
                routes: dataset.hunts.len(),
                route_points: point_total,
                waypoints: dataset.waypoints.len(),
                findpoints: dataset.findpoints.len(),
            }
        );
        assert!(!sink.is_empty());
    }

    #[rstest]
    fn route_points_are_not_resorted() {
        let dataset = Dataset {
            hunts: vec![(
                Hunt::new("h", "Backtrack"),
                vec![
                    RoutePoint::new(3.0, 3.0),
                    RoutePoint::new(1.0, 1.0),
                    RoutePoint::new(2.0, 2.0),
                ],
            )],
            waypoints: vec![Waypoint::new("w2", 0.0, 0.0), Waypoint::new("w1", 0.0, 0.0)],
            findpoints: vec![Findpoint::new("f", 0.0, 0.0)],
        };
        let document = build(dataset);
        let route = document.placemarks().first().expect("route placemark");
        let longitudes: Vec<f64> = route.geometry.coords().iter().map(|coord| coord.x).collect();
        assert_eq!(longitudes, vec![3.0, 1.0, 2.0]);
        let waypoint_names: Vec<_> = document
            .placemarks()
            .iter()
            .filter(|placemark| placemark.style == StyleId::Waypoint)
            .map(|placemark| placemark.name.as_str())
            .collect();
        assert_eq!(waypoint_names, vec!["w2", "w1"]);
    }

    #[rstest]
    fn store_failure_stops_the_build() {
        struct FailingSource;
        impl HuntSource for FailingSource {
            fn hunts(&self) -> Result<Vec<Hunt>, StoreError> {
                Ok(vec![Hunt::new("h", "Broken")])
            }
            fn route_points(&self, _hunt: &Hunt) -> Result<Vec<RoutePoint>, StoreError> {
                Err(StoreError::Query {
                    table: "point",
                    source: rusqlite::Error::QueryReturnedNoRows,
                })
            }
            fn waypoints(&self) -> Result<Vec<Waypoint>, StoreError> {
                Ok(Vec::new())
            }
            fn findpoints(&self) -> Result<Vec<Findpoint>, StoreError> {
                Ok(Vec::new())
            }
        }

        let mut sink = Vec::new();
        let error = Pipeline::new(FailingSource)
            .export(&mut sink)
            .expect_err("store failure should propagate");
        assert!(matches!(
            error,
            PipelineError::Store(StoreError::Query { table: "point", .. })
        ));
        assert!(sink.is_empty(), "nothing should be written on failure");
    }
}
