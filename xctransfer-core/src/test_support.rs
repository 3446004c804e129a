//! Test-only fixtures: an in-memory [`HuntSource`] and a writer for
//! share-data SQLite files.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::{Findpoint, Hunt, HuntSource, RoutePoint, StoreError, Waypoint};

/// Records backing both [`MemorySource`] and generated SQLite fixtures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Hunts paired with their route points, in insertion order.
    pub hunts: Vec<(Hunt, Vec<RoutePoint>)>,
    /// Waypoints in insertion order.
    pub waypoints: Vec<Waypoint>,
    /// Findpoints in insertion order.
    pub findpoints: Vec<Findpoint>,
}

/// One hunt named "Ridge Trail" with three points and no markers.
pub fn ridge_trail_dataset() -> Dataset {
    Dataset {
        hunts: vec![(
            Hunt::new("hunt-1", "Ridge Trail"),
            vec![
                RoutePoint::new(10.0, 50.0),
                RoutePoint::new(10.1, 50.1),
                RoutePoint::new(10.2, 50.2),
            ],
        )],
        ..Dataset::default()
    }
}

/// A dataset exercising every table, with an empty and a single-point hunt.
pub fn mixed_dataset() -> Dataset {
    Dataset {
        hunts: vec![
            (
                Hunt::new("hunt-1", "Ridge Trail"),
                vec![
                    RoutePoint::new(10.0, 50.0),
                    RoutePoint::new(10.1, 50.1),
                    RoutePoint::new(10.2, 50.2),
                ],
            ),
            (Hunt::new("hunt-2", "Empty Valley"), Vec::new()),
            (
                Hunt::new("hunt-3", "Lone Peak"),
                vec![RoutePoint::new(-33.865_143, 151.209_9)],
            ),
        ],
        waypoints: vec![
            Waypoint::new("Trailhead", 46.5, 7.75),
            Waypoint::new("Hut & Spring", 46.625, 7.8),
        ],
        findpoints: vec![Findpoint::new("Cache <A>", 46.6, 7.9)],
    }
}

/// Linear-scan [`HuntSource`] over a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dataset: Dataset,
}

impl MemorySource {
    /// Wrap `dataset`.
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl HuntSource for MemorySource {
    fn hunts(&self) -> Result<Vec<Hunt>, StoreError> {
        Ok(self
            .dataset
            .hunts
            .iter()
            .map(|(hunt, _)| hunt.clone())
            .collect())
    }

    fn route_points(&self, hunt: &Hunt) -> Result<Vec<RoutePoint>, StoreError> {
        Ok(self
            .dataset
            .hunts
            .iter()
            .filter(|(candidate, _)| candidate.id == hunt.id)
            .flat_map(|(_, points)| points.iter().copied())
            .collect())
    }

    fn waypoints(&self) -> Result<Vec<Waypoint>, StoreError> {
        Ok(self.dataset.waypoints.clone())
    }

    fn findpoints(&self) -> Result<Vec<Findpoint>, StoreError> {
        Ok(self.dataset.findpoints.clone())
    }
}

/// Create a share-data database at `path` holding `dataset`.
///
/// The four tables are always created, so an empty dataset yields a valid,
/// empty database.
pub fn write_sqlite_database(path: &Path, dataset: &Dataset) -> rusqlite::Result<()> {
    let mut connection = Connection::open(path)?;
    let tx = connection.transaction()?;
    tx.execute_batch(
        "CREATE TABLE geohunt (uuid TEXT PRIMARY KEY, name TEXT NOT NULL);
         CREATE TABLE point (geohunt_fk TEXT NOT NULL, latitude REAL, longitude REAL);
         CREATE TABLE waypoint (name TEXT NOT NULL, latitude REAL, longitude REAL);
         CREATE TABLE findpoint (name TEXT NOT NULL, latitude REAL, longitude REAL);",
    )?;
    {
        let mut insert_hunt = tx.prepare("INSERT INTO geohunt (uuid, name) VALUES (?1, ?2)")?;
        let mut insert_point = tx.prepare(
            "INSERT INTO point (geohunt_fk, latitude, longitude) VALUES (?1, ?2, ?3)",
        )?;
        for (hunt, points) in &dataset.hunts {
            insert_hunt.execute(params![hunt.id, hunt.name])?;
            for point in points {
                insert_point.execute(params![hunt.id, point.latitude, point.longitude])?;
            }
        }

        let mut insert_waypoint =
            tx.prepare("INSERT INTO waypoint (name, latitude, longitude) VALUES (?1, ?2, ?3)")?;
        for waypoint in &dataset.waypoints {
            insert_waypoint.execute(params![
                waypoint.name,
                waypoint.latitude,
                waypoint.longitude
            ])?;
        }

        let mut insert_findpoint =
            tx.prepare("INSERT INTO findpoint (name, latitude, longitude) VALUES (?1, ?2, ?3)")?;
        for findpoint in &dataset.findpoints {
            insert_findpoint.execute(params![
                findpoint.name,
                findpoint.latitude,
                findpoint.longitude
            ])?;
        }
    }
    tx.commit()
}
