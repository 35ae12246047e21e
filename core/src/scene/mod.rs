//! Renderable scenes built from the catalog.
//!
//! Renderers only need positions and colours; everything here is derived on
//! demand and never cached.

pub mod globe;
pub mod radar;

pub use globe::{GlobeMarker, GlobeScene, RegionMarker};
pub use radar::{RadarBlip, RadarScene, ThreatZone};
