//! Facade crate for the XC transfer KML exporter.
//!
//! This crate re-exports the core domain types, the SQLite source and the
//! KML document builder.

#![forbid(unsafe_code)]

pub use xctransfer_core::{
    Color, Document, ExportSummary, Findpoint, Geometry, Hunt, HuntSource, KmlWriteError,
    Pipeline, PipelineError, Placemark, RoutePoint, SqliteHuntStore, StoreError, Style, StyleId,
    Waypoint, kml, write_document, write_kml,
};

#[cfg(feature = "test-support")]
pub use xctransfer_core::test_support;
