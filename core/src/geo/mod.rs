pub mod point;
pub mod radar;
pub mod sphere;

pub use point::{GeoPoint, PlanarPoint, Point3};
pub use radar::{project_to_radar_disk, RadarGrid, RadarProjector, RangeRing, Spoke};
pub use sphere::{project_to_sphere, GlobeLayer, SphereProjector};
