//! Data access for hunts, route points and markers.
//!
//! The [`HuntSource`] trait is the read-only seam between the exporter and
//! wherever the records live. Every method returns an empty vector rather
//! than an error when a table holds no rows.

use crate::{Findpoint, Hunt, RoutePoint, Waypoint};

mod sqlite;

pub use sqlite::{SqliteHuntStore, StoreError};

/// Read-only access to the records exported as KML.
///
/// Implementations return rows in storage order. Route points in particular
/// are expected in traversal order and are never re-sorted downstream.
///
/// # Examples
///
/// ```rust
/// use xctransfer_core::{Findpoint, Hunt, HuntSource, RoutePoint, StoreError, Waypoint};
///
/// struct SingleHunt;
///
/// impl HuntSource for SingleHunt {
///     fn hunts(&self) -> Result<Vec<Hunt>, StoreError> {
///         Ok(vec![Hunt::new("h-1", "Ridge Trail")])
///     }
///
///     fn route_points(&self, _hunt: &Hunt) -> Result<Vec<RoutePoint>, StoreError> {
///         Ok(vec![RoutePoint::new(10.0, 50.0)])
///     }
///
///     fn waypoints(&self) -> Result<Vec<Waypoint>, StoreError> {
///         Ok(Vec::new())
///     }
///
///     fn findpoints(&self) -> Result<Vec<Findpoint>, StoreError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let hunts = SingleHunt.hunts().unwrap();
/// assert_eq!(SingleHunt.route_points(&hunts[0]).unwrap().len(), 1);
/// ```
pub trait HuntSource {
    /// Return every hunt.
    fn hunts(&self) -> Result<Vec<Hunt>, StoreError>;

    /// Return the recorded points of `hunt`, in storage order.
    fn route_points(&self, hunt: &Hunt) -> Result<Vec<RoutePoint>, StoreError>;

    /// Return every waypoint.
    fn waypoints(&self) -> Result<Vec<Waypoint>, StoreError>;

    /// Return every findpoint.
    fn findpoints(&self) -> Result<Vec<Findpoint>, StoreError>;
}
