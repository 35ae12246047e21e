pub mod distribution;
pub mod report;
pub mod series;

pub use distribution::{ThreatDistribution, ThreatShare};
pub use report::ClassificationReport;
pub use series::{signal_timeline, SignalSample, SpectrumBin, SpectrumConfig};
