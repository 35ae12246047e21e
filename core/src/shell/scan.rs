/// Percentage points added per tick.
pub const SCAN_STEP: u8 = 2;
/// Tick period of the simulated scan.
pub const SCAN_TICK_MS: u64 = 100;

const COMPLETE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    Idle,
    Progress(u8),
    Completed,
}

/// Bounded linear progress counter for the simulated spectrum scan.
///
/// Progress climbs by `step` per tick; the tick that finds it at 100 ends
/// the scan and resets it to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    progress: u8,
    active: bool,
    step: u8,
}

impl ScanProgress {
    pub fn new(step: u8) -> Self {
        Self {
            progress: 0,
            active: false,
            step: step.max(1),
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns false when a scan is already running.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.progress = 0;
        true
    }

    pub fn tick(&mut self) -> ScanEvent {
        if !self.active {
            return ScanEvent::Idle;
        }
        if self.progress >= COMPLETE {
            self.active = false;
            self.progress = 0;
            return ScanEvent::Completed;
        }
        self.progress = self.progress.saturating_add(self.step).min(COMPLETE);
        ScanEvent::Progress(self.progress)
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.progress = 0;
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new(SCAN_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_completes_after_fifty_one_ticks() {
        let mut scan = ScanProgress::default();
        assert!(scan.start());
        for expected in 1..=50u8 {
            assert_eq!(scan.tick(), ScanEvent::Progress(expected * 2));
        }
        assert_eq!(scan.progress(), 100);
        assert_eq!(scan.tick(), ScanEvent::Completed);
        assert!(!scan.is_active());
        assert_eq!(scan.progress(), 0);
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut scan = ScanProgress::default();
        assert!(scan.start());
        scan.tick();
        assert!(!scan.start());
        assert_eq!(scan.progress(), 2);
    }

    #[test]
    fn idle_scan_does_not_advance() {
        let mut scan = ScanProgress::default();
        assert_eq!(scan.tick(), ScanEvent::Idle);
        assert_eq!(scan.progress(), 0);
    }

    #[test]
    fn uneven_step_is_capped_at_hundred() {
        let mut scan = ScanProgress::new(30);
        scan.start();
        let events: Vec<_> = (0..5).map(|_| scan.tick()).collect();
        assert_eq!(events[3], ScanEvent::Progress(100));
        assert_eq!(events.last(), Some(&ScanEvent::Completed));
    }
}
