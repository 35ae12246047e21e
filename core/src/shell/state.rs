use crate::catalog::{Signal, SignalCatalog};
use crate::prelude::{DashboardError, DashboardResult};
use crate::shell::notify::{Notification, NotificationKind, NotificationLog};
use crate::shell::scan::{ScanEvent, ScanProgress, SCAN_STEP};
use crate::telemetry::{LogManager, ShellMetrics};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Signals,
    Map,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Signals, Tab::Map, Tab::Analytics];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Signals => "signals",
            Tab::Map => "map",
            Tab::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Signals => "Signals",
            Tab::Map => "Geospatial",
            Tab::Analytics => "Analytics",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| {
                tab.id().eq_ignore_ascii_case(wanted) || tab.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DashboardError::UnknownTab(value.to_string()))
    }
}

/// What the centre pane renders for the current tab and selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenterView<'a> {
    Globe,
    SignalAnalysis(&'a Signal),
    NoSignalSelected,
    Radar,
    Analytics,
}

/// Right-hand detail panel; follows the selection on every tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailPanel<'a> {
    Empty,
    Signal(&'a Signal),
}

/// View and selection state of the dashboard.
///
/// The shell is owned by whichever event loop drives it. Selection and tab
/// are independent: switching tabs never clears the selected signal.
#[derive(Debug)]
pub struct DashboardShell {
    catalog: SignalCatalog,
    selected: Option<u32>,
    active_tab: Tab,
    scan: ScanProgress,
    notifications: NotificationLog,
    logger: LogManager,
    metrics: ShellMetrics,
}

impl DashboardShell {
    pub fn new(catalog: SignalCatalog) -> Self {
        Self::with_scan_step(catalog, SCAN_STEP)
    }

    pub fn with_scan_step(catalog: SignalCatalog, scan_step: u8) -> Self {
        Self {
            catalog,
            selected: None,
            active_tab: Tab::default(),
            scan: ScanProgress::new(scan_step),
            notifications: NotificationLog::default(),
            logger: LogManager::new("shell"),
            metrics: ShellMetrics::new(),
        }
    }

    pub fn catalog(&self) -> &SignalCatalog {
        &self.catalog
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected_signal(&self) -> Option<&Signal> {
        self.selected.and_then(|id| self.catalog.get(id).ok())
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn scan(&self) -> &ScanProgress {
        &self.scan
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    pub fn metrics(&self) -> &ShellMetrics {
        &self.metrics
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.logger.record(&message);
        self.notifications.push(Notification::new(kind, message));
    }

    /// Selects a signal from any view. Unknown ids leave the state untouched.
    pub fn select_signal(&mut self, id: u32) -> DashboardResult<&Signal> {
        let kind = match self.catalog.get(id) {
            Ok(signal) => signal.kind.clone(),
            Err(err) => {
                self.logger.reject(&err.to_string());
                self.metrics.record_rejected();
                return Err(err);
            }
        };

        self.selected = Some(id);
        self.metrics.record_selection();
        self.notify(NotificationKind::Info, format!("Selected: {}", kind));
        self.catalog.get(id)
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.logger
                .record(&format!("tab {} -> {}", self.active_tab, tab));
            self.metrics.record_tab_switch();
        }
        self.active_tab = tab;
    }

    pub fn switch_tab_named(&mut self, name: &str) -> DashboardResult<Tab> {
        let tab = name.parse::<Tab>().map_err(|err| {
            self.logger.reject(&err.to_string());
            self.metrics.record_rejected();
            err
        })?;
        self.switch_tab(tab);
        Ok(tab)
    }

    pub fn center_view(&self) -> CenterView<'_> {
        match self.active_tab {
            Tab::Overview => CenterView::Globe,
            Tab::Signals => match self.selected_signal() {
                Some(signal) => CenterView::SignalAnalysis(signal),
                None => CenterView::NoSignalSelected,
            },
            Tab::Map => CenterView::Radar,
            Tab::Analytics => CenterView::Analytics,
        }
    }

    pub fn detail_panel(&self) -> DetailPanel<'_> {
        match self.selected_signal() {
            Some(signal) => DetailPanel::Signal(signal),
            None => DetailPanel::Empty,
        }
    }

    /// Starts the simulated scan; returns false if one is already running.
    pub fn start_scan(&mut self) -> bool {
        if !self.scan.start() {
            self.logger.reject("scan already in progress");
            return false;
        }
        self.notify(
            NotificationKind::Loading,
            "Initiating SIGINT scan...".to_string(),
        );
        true
    }

    /// Advances the scan by one timer tick.
    pub fn tick(&mut self) -> ScanEvent {
        let event = self.scan.tick();
        if event == ScanEvent::Completed {
            self.metrics.record_scan_completed();
            let detected = self.catalog.detectable_count();
            self.notify(
                NotificationKind::Success,
                format!("Scan complete! {} signals detected", detected),
            );
        }
        event
    }

    pub fn cancel_scan(&mut self) {
        if self.scan.is_active() {
            self.logger
                .record(&format!("scan cancelled at {}%", self.scan.progress()));
        }
        self.scan.cancel();
    }

    /// Raises an alert for the selected signal.
    pub fn dispatch_alert(&mut self) -> DashboardResult<&Signal> {
        let Some(id) = self.selected else {
            self.logger.reject("alert requested without a selection");
            self.metrics.record_rejected();
            return Err(DashboardError::NoSelection);
        };
        self.metrics.record_alert();
        self.notify(
            NotificationKind::Error,
            "Alert dispatched to command center!".to_string(),
        );
        self.catalog.get(id)
    }
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self::new(SignalCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_starts_on_overview_without_selection() {
        let shell = DashboardShell::default();
        assert_eq!(shell.active_tab(), Tab::Overview);
        assert_eq!(shell.center_view(), CenterView::Globe);
        assert_eq!(shell.detail_panel(), DetailPanel::Empty);
    }

    #[test]
    fn selection_survives_tab_switches() {
        let mut shell = DashboardShell::default();
        shell.select_signal(3).unwrap();
        for tab in Tab::ALL {
            shell.switch_tab(tab);
            assert_eq!(shell.selected_id(), Some(3));
        }
        assert_eq!(shell.metrics().snapshot().tab_switches, 3);
    }

    #[test]
    fn signals_tab_shows_placeholder_until_selection() {
        let mut shell = DashboardShell::default();
        shell.switch_tab(Tab::Signals);
        assert_eq!(shell.center_view(), CenterView::NoSignalSelected);

        let selected = shell.select_signal(1).unwrap().clone();
        assert_eq!(shell.center_view(), CenterView::SignalAnalysis(&selected));
        assert_eq!(shell.detail_panel(), DetailPanel::Signal(&selected));
        assert_eq!(
            shell.notifications().latest().unwrap().message,
            "Selected: S-400 Radar"
        );
    }

    #[test]
    fn unknown_signal_leaves_selection_untouched() {
        let mut shell = DashboardShell::default();
        shell.select_signal(2).unwrap();
        assert_eq!(shell.select_signal(99), Err(DashboardError::UnknownSignal(99)));
        assert_eq!(shell.selected_id(), Some(2));
        assert_eq!(shell.metrics().snapshot().rejected, 1);
    }

    #[test]
    fn tab_names_parse_by_id_or_label() {
        let mut shell = DashboardShell::default();
        assert_eq!(shell.switch_tab_named("Geospatial"), Ok(Tab::Map));
        assert_eq!(shell.center_view(), CenterView::Radar);
        assert_eq!(shell.switch_tab_named("analytics"), Ok(Tab::Analytics));
        assert!(matches!(
            shell.switch_tab_named("settings"),
            Err(DashboardError::UnknownTab(_))
        ));
        assert_eq!(shell.active_tab(), Tab::Analytics);
    }

    #[test]
    fn scan_reports_detectable_signals_on_completion() {
        let mut shell = DashboardShell::default();
        assert!(shell.start_scan());
        assert!(!shell.start_scan());
        let mut ticks = 0;
        while shell.tick() != ScanEvent::Completed {
            ticks += 1;
            assert!(ticks <= 50);
        }
        assert_eq!(ticks, 50);
        assert!(!shell.scan().is_active());
        let latest = shell.notifications().latest().unwrap();
        assert_eq!(latest.kind, NotificationKind::Success);
        assert_eq!(latest.message, "Scan complete! 4 signals detected");
        assert_eq!(shell.metrics().snapshot().scans_completed, 1);
    }

    #[test]
    fn cancelled_scan_can_restart() {
        let mut shell = DashboardShell::default();
        shell.start_scan();
        shell.tick();
        shell.cancel_scan();
        assert_eq!(shell.tick(), ScanEvent::Idle);
        assert!(shell.start_scan());
    }

    #[test]
    fn alert_requires_selection() {
        let mut shell = DashboardShell::default();
        assert_eq!(shell.dispatch_alert(), Err(DashboardError::NoSelection));
        shell.select_signal(4).unwrap();
        assert_eq!(shell.dispatch_alert().unwrap().id, 4);
        assert_eq!(
            shell.notifications().latest().unwrap().kind,
            NotificationKind::Error
        );
        assert_eq!(shell.metrics().snapshot().alerts, 1);
    }
}
