use crate::workflow::config::DashboardConfig;
use astracore::analysis::{
    series::{bins_above_threshold, mean_power},
    ClassificationReport, ThreatDistribution,
};
use astracore::catalog::Signal;
use astracore::scene::{GlobeScene, RadarScene};
use astracore::shell::{DashboardShell, Notification, Tab};
use serde::Serialize;

/// Everything one render of the dashboard needs, in export form.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub active_tab: Tab,
    pub selected: Option<Signal>,
    pub globe: GlobeScene,
    pub radar: RadarScene,
    pub distribution: ThreatDistribution,
    pub report: ClassificationReport,
    pub spectrum_bins_above_threshold: usize,
    pub spectrum_mean_power: f64,
    pub notifications: Vec<Notification>,
}

#[derive(Clone)]
pub struct Runner {
    config: DashboardConfig,
}

impl Runner {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, shell: &DashboardShell) -> SceneSnapshot {
        let catalog = shell.catalog();
        let selected = shell.selected_id();

        let globe = GlobeScene::build(catalog, &self.config.sphere_projector(), selected);
        let radar = RadarScene::build(
            catalog,
            &self.config.radar_projector(),
            &self.config.radar_grid(),
            selected,
        );
        let spectrum = self.config.spectrum().generate();

        SceneSnapshot {
            active_tab: shell.active_tab(),
            selected: shell.selected_signal().cloned(),
            globe,
            radar,
            distribution: ThreatDistribution::from_catalog(catalog),
            report: ClassificationReport::DEMO,
            spectrum_bins_above_threshold: bins_above_threshold(&spectrum),
            spectrum_mean_power: mean_power(&spectrum),
            notifications: shell.notifications().recent().cloned().collect(),
        }
    }
}
