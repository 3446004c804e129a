//! Behavioural tests for the SQLite to KML export using rstest-bdd.

use std::{cell::RefCell, path::PathBuf};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;
use xctransfer_core::{
    Pipeline, SqliteHuntStore,
    test_support::{Dataset, mixed_dataset, ridge_trail_dataset, write_sqlite_database},
};

/// Shared state for export scenarios.
#[derive(Debug)]
struct ExportWorld {
    temp_dir: TempDir,
    db_path: RefCell<Option<PathBuf>>,
    markup: RefCell<Option<String>>,
}

impl ExportWorld {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            db_path: RefCell::new(None),
            markup: RefCell::new(None),
        }
    }

    fn persist(&self, dataset: &Dataset) {
        let path = self.temp_dir.path().join("ShareData");
        write_sqlite_database(&path, dataset).expect("persist database");
        self.db_path.replace(Some(path));
    }

    fn expect_markup(&self) -> String {
        self.markup
            .borrow()
            .clone()
            .expect("export should have produced markup")
    }
}

#[fixture]
fn world() -> ExportWorld {
    ExportWorld::new()
}

fn placemark_styles(markup: &str) -> Vec<String> {
    markup
        .split("<Placemark>")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("<styleUrl>#")? + "<styleUrl>#".len();
            let rest = chunk.get(start..)?;
            let end = rest.find("</styleUrl>")?;
            rest.get(..end).map(str::to_owned)
        })
        .collect()
}

#[given("a share-data database with no rows")]
fn given_empty_database(world: &ExportWorld) {
    world.persist(&Dataset::default());
}

#[given("a share-data database with the Ridge Trail hunt")]
fn given_ridge_trail(world: &ExportWorld) {
    world.persist(&ridge_trail_dataset());
}

#[given("a share-data database with hunts, waypoints and findpoints")]
fn given_mixed_database(world: &ExportWorld) {
    world.persist(&mixed_dataset());
}

#[when("I export the database to KML")]
fn export_database(world: &ExportWorld) {
    let path = world
        .db_path
        .borrow()
        .clone()
        .expect("database should be persisted before export");
    let pipeline = Pipeline::new(SqliteHuntStore::open(&path).expect("open store"));
    let mut buffer = Vec::new();
    pipeline.export(&mut buffer).expect("export database");
    world
        .markup
        .replace(Some(String::from_utf8(buffer).expect("utf-8 markup")));
}

#[then("the KML declares the three shared styles")]
fn then_shared_styles(world: &ExportWorld) {
    let markup = world.expect_markup();
    for id in ["orangeLineGreenPoly", "wayPoint", "findPoint"] {
        assert!(
            markup.contains(&format!("<Style id=\"{id}\">")),
            "missing style {id}"
        );
    }
    assert!(markup.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
    assert!(markup.contains("<Document>"));
}

#[then("the KML contains no placemarks")]
fn then_no_placemarks(world: &ExportWorld) {
    assert_eq!(world.expect_markup().matches("<Placemark>").count(), 0);
}

#[then("the KML contains exactly one placemark")]
fn then_one_placemark(world: &ExportWorld) {
    assert_eq!(world.expect_markup().matches("<Placemark>").count(), 1);
}

#[then("the KML contains six placemarks")]
fn then_six_placemarks(world: &ExportWorld) {
    assert_eq!(world.expect_markup().matches("<Placemark>").count(), 6);
}

#[then("the Ridge Trail route lists its three points in order")]
fn then_ridge_trail_points(world: &ExportWorld) {
    let markup = world.expect_markup();
    assert!(markup.contains("<name>Ridge Trail</name>"));
    assert!(markup.contains("<styleUrl>#orangeLineGreenPoly</styleUrl>"));
    assert!(markup.contains("<coordinates>50,10 50.1,10.1 50.2,10.2</coordinates>"));
}

#[then("routes precede waypoints which precede findpoints")]
fn then_group_order(world: &ExportWorld) {
    let styles = placemark_styles(&world.expect_markup());
    assert_eq!(
        styles,
        vec![
            "orangeLineGreenPoly",
            "orangeLineGreenPoly",
            "orangeLineGreenPoly",
            "wayPoint",
            "wayPoint",
            "findPoint",
        ]
    );
}

#[scenario(path = "tests/features/kml_export.feature", index = 0)]
fn empty_database(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/kml_export.feature", index = 1)]
fn single_route(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/kml_export.feature", index = 2)]
fn grouped_placemarks(world: ExportWorld) {
    let _ = world;
}
