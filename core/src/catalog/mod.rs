pub mod regions;
pub mod signal;
pub mod threat;

pub use regions::{india_border, india_regions, Region, RegionKind};
pub use signal::{Signal, SignalCatalog};
pub use threat::ThreatLevel;
