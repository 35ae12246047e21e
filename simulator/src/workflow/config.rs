use anyhow::Context;
use astracore::analysis::SpectrumConfig;
use astracore::catalog::{Signal, SignalCatalog};
use astracore::geo::radar::MAX_RADAR_DISTANCE;
use astracore::geo::sphere::{GLOBE_RADIUS, REFERENCE_LONGITUDE_DEG};
use astracore::geo::{RadarGrid, RadarProjector, SphereProjector};
use astracore::shell::{DashboardShell, SCAN_STEP, SCAN_TICK_MS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub globe_radius: f64,
    pub reference_longitude: f64,
    pub radar_max_distance: f64,
    pub scan_step: u8,
    pub tick_interval_ms: u64,
    pub spectrum_seed: u64,
    /// Replaces the built-in emitter set when present.
    pub signals: Option<Vec<Signal>>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            globe_radius: GLOBE_RADIUS,
            reference_longitude: REFERENCE_LONGITUDE_DEG,
            radar_max_distance: MAX_RADAR_DISTANCE,
            scan_step: SCAN_STEP,
            tick_interval_ms: SCAN_TICK_MS,
            spectrum_seed: 0,
            signals: None,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading dashboard config {}", path_ref.display()))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing dashboard config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(globe_radius: f64, radar_max_distance: f64, spectrum_seed: u64) -> Self {
        Self {
            globe_radius,
            radar_max_distance,
            spectrum_seed,
            ..Default::default()
        }
    }

    pub fn catalog(&self) -> anyhow::Result<SignalCatalog> {
        match &self.signals {
            Some(signals) => SignalCatalog::new(signals.clone()).context("validating signal list"),
            None => Ok(SignalCatalog::builtin()),
        }
    }

    pub fn build_shell(&self) -> anyhow::Result<DashboardShell> {
        Ok(DashboardShell::with_scan_step(self.catalog()?, self.scan_step))
    }

    pub fn sphere_projector(&self) -> SphereProjector {
        SphereProjector::with_reference(self.globe_radius, self.reference_longitude)
    }

    pub fn radar_projector(&self) -> RadarProjector {
        RadarProjector::new(self.radar_max_distance)
    }

    pub fn radar_grid(&self) -> RadarGrid {
        RadarGrid::default()
    }

    pub fn spectrum(&self) -> SpectrumConfig {
        SpectrumConfig::with_seed(self.spectrum_seed)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_defaults() {
        let cfg = DashboardConfig::from_args(3.0, 3.5, 9);
        assert_eq!(cfg.sphere_projector().radius, 3.0);
        assert_eq!(cfg.radar_projector().max_distance, 3.5);
        assert_eq!(cfg.reference_longitude, 77.0);
        assert_eq!(cfg.scan_step, 2);
        assert_eq!(cfg.catalog().unwrap().len(), 6);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"globe_radius: 2.5\nscan_step: 5\nsignals:\n  - id: 7\n    type: Test Beacon\n    position: { latitude: 10.0, longitude: 70.0 }\n    threat: CRITICAL\n    frequency: 1.1 GHz\n    strength: 40\n    location: Goa, India\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = DashboardConfig::load(&path).unwrap();
        assert_eq!(cfg.globe_radius, 2.5);
        assert_eq!(cfg.tick_interval_ms, 100);
        let catalog = cfg.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().kind, "Test Beacon");

        let mut shell = cfg.build_shell().unwrap();
        assert!(shell.start_scan());
        shell.tick();
        assert_eq!(shell.scan().progress(), 5);
    }

    #[test]
    fn invalid_signal_list_is_rejected() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"signals:\n  - id: 1\n    type: Loud\n    position: { latitude: 0.0, longitude: 0.0 }\n    threat: LOW\n    frequency: 1 GHz\n    strength: 150\n    location: Nowhere\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = DashboardConfig::load(&path).unwrap();
        assert!(cfg.catalog().is_err());
    }
}
