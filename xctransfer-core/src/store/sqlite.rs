//! SQLite-backed source reading the share-data tables.

use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Params, Row, params};
use thiserror::Error;

use crate::{Findpoint, Hunt, RoutePoint, Waypoint};

use super::HuntSource;

const HUNTS_QUERY: &str = "SELECT uuid, name FROM geohunt";
const ROUTE_POINTS_QUERY: &str = "SELECT latitude, longitude FROM point WHERE geohunt_fk = ?1";
const WAYPOINTS_QUERY: &str = "SELECT name, latitude, longitude FROM waypoint";
const FINDPOINTS_QUERY: &str = "SELECT name, latitude, longitude FROM findpoint";

/// Error raised when reading records from the share-data database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening or probing the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing, running or decoding a query failed.
    #[error("failed to read {table} rows: {source}")]
    Query {
        /// Table being read.
        table: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}

/// Read-only [`HuntSource`] over a share-data SQLite file.
#[derive(Debug)]
pub struct SqliteHuntStore {
    connection: Connection,
}

impl SqliteHuntStore {
    /// Open the database at `path` without write access.
    ///
    /// The file must already exist; the connection is probed once so that an
    /// unreadable or non-SQLite file fails here rather than on the first query.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let open_error = |source: rusqlite::Error| StoreError::OpenDatabase {
            path: path.to_path_buf(),
            source,
        };

        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(open_error)?;
        connection
            .query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
                row.get::<_, i64>(0)
            })
            .map_err(open_error)?;

        Ok(Self { connection })
    }

    fn query_rows<T, P, F>(
        &self,
        table: &'static str,
        sql: &str,
        params: P,
        decode: F,
    ) -> Result<Vec<T>, StoreError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let query_error = move |source: rusqlite::Error| StoreError::Query { table, source };
        let mut statement = self.connection.prepare(sql).map_err(query_error)?;
        let rows = statement.query_map(params, decode).map_err(query_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(query_error)
    }
}

/// Decode a name column, replacing invalid UTF-8 with U+FFFD.
///
/// Non-text cells go through the regular `String` conversion and fail the same
/// way.
fn lossy_text(row: &Row<'_>, index: usize) -> rusqlite::Result<String> {
    match row.get_ref(index)? {
        ValueRef::Text(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        _ => row.get(index),
    }
}

impl HuntSource for SqliteHuntStore {
    fn hunts(&self) -> Result<Vec<Hunt>, StoreError> {
        self.query_rows("geohunt", HUNTS_QUERY, [], |row| {
            Ok(Hunt {
                id: row.get(0)?,
                name: lossy_text(row, 1)?,
            })
        })
    }

    fn route_points(&self, hunt: &Hunt) -> Result<Vec<RoutePoint>, StoreError> {
        self.query_rows("point", ROUTE_POINTS_QUERY, params![hunt.id], |row| {
            Ok(RoutePoint {
                latitude: row.get(0)?,
                longitude: row.get(1)?,
            })
        })
    }

    fn waypoints(&self) -> Result<Vec<Waypoint>, StoreError> {
        self.query_rows("waypoint", WAYPOINTS_QUERY, [], |row| {
            Ok(Waypoint {
                name: lossy_text(row, 0)?,
                latitude: row.get(1)?,
                longitude: row.get(2)?,
            })
        })
    }

    fn findpoints(&self) -> Result<Vec<Findpoint>, StoreError> {
        self.query_rows("findpoint", FINDPOINTS_QUERY, [], |row| {
            Ok(Findpoint {
                name: lossy_text(row, 0)?,
                latitude: row.get(1)?,
                longitude: row.get(2)?,
            })
        })
    }
}
