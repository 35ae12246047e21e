use astracore::shell::{DashboardShell, ScanEvent};
use log::info;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed { ticks: usize },
    Cancelled { progress: u8 },
    AlreadyRunning,
}

/// Drives the shell's scan from a timer until it completes or `cancel` resolves.
///
/// Dropping the interval on return is the only teardown the scan needs.
pub async fn run_scan<F>(shell: &mut DashboardShell, period: Duration, cancel: F) -> ScanOutcome
where
    F: std::future::Future<Output = ()>,
{
    if !shell.start_scan() {
        return ScanOutcome::AlreadyRunning;
    }

    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(cancel);
    let mut ticks = 0;

    loop {
        tokio::select! {
            _ = &mut cancel => {
                let progress = shell.scan().progress();
                shell.cancel_scan();
                return ScanOutcome::Cancelled { progress };
            }
            _ = timer.tick() => {
                ticks += 1;
                match shell.tick() {
                    ScanEvent::Progress(percent) => {
                        if percent % 10 == 0 {
                            info!("scanning electromagnetic spectrum... {}%", percent);
                        }
                    }
                    ScanEvent::Completed => return ScanOutcome::Completed { ticks },
                    ScanEvent::Idle => return ScanOutcome::Cancelled { progress: 0 },
                }
            }
        }
    }
}
