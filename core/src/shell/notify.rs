use serde::Serialize;
use std::collections::VecDeque;

const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Loading,
    Success,
    Error,
}

/// Toast raised by a shell transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Most recent notifications, oldest dropped first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
}

impl NotificationLog {
    pub fn push(&mut self, notification: Notification) {
        self.entries.push_back(notification);
        if self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_only_recent_entries() {
        let mut log = NotificationLog::default();
        for index in 0..25 {
            log.push(Notification::new(NotificationKind::Info, format!("n{index}")));
        }
        assert_eq!(log.len(), HISTORY_LIMIT);
        assert_eq!(log.latest().unwrap().message, "n24");
        assert_eq!(log.recent().last().unwrap().message, "n5");
    }
}
