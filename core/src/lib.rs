//! Core of the ASTRA SIGINT dashboard.
//!
//! Geographic projectors place mock emitters on a globe and on a radar disk,
//! the catalog holds the static emitter set, and the shell tracks which view
//! and which signal the operator is looking at.

pub mod analysis;
pub mod catalog;
pub mod geo;
pub mod math;
pub mod prelude;
pub mod scene;
pub mod shell;
pub mod telemetry;

pub use geo::{project_to_radar_disk, project_to_sphere, GeoPoint, PlanarPoint, Point3};
pub use prelude::{DashboardError, DashboardResult};
