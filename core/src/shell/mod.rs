pub mod notify;
pub mod scan;
pub mod state;

pub use notify::{Notification, NotificationKind, NotificationLog};
pub use scan::{ScanEvent, ScanProgress, SCAN_STEP, SCAN_TICK_MS};
pub use state::{CenterView, DashboardShell, DetailPanel, Tab};
