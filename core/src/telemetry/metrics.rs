use std::sync::Mutex;

/// Counters for operator actions on the dashboard shell.
#[derive(Debug)]
pub struct ShellMetrics {
    inner: Mutex<Counters>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub selections: usize,
    pub tab_switches: usize,
    pub scans_completed: usize,
    pub alerts: usize,
    pub rejected: usize,
}

impl ShellMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    fn bump(&self, update: impl FnOnce(&mut Counters)) {
        if let Ok(mut counters) = self.inner.lock() {
            update(&mut counters);
        }
    }

    pub fn record_selection(&self) {
        self.bump(|c| c.selections += 1);
    }

    pub fn record_tab_switch(&self) {
        self.bump(|c| c.tab_switches += 1);
    }

    pub fn record_scan_completed(&self) {
        self.bump(|c| c.scans_completed += 1);
    }

    pub fn record_alert(&self) {
        self.bump(|c| c.alerts += 1);
    }

    pub fn record_rejected(&self) {
        self.bump(|c| c.rejected += 1);
    }

    pub fn snapshot(&self) -> Counters {
        if let Ok(counters) = self.inner.lock() {
            *counters
        } else {
            Counters::default()
        }
    }
}

impl Default for ShellMetrics {
    fn default() -> Self {
        Self::new()
    }
}
