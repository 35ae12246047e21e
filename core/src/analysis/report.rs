use serde::Serialize;

/// Headline model figures shown beside a selected signal and on the analytics tab.
///
/// These are fixed demonstration values; nothing is classified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub pattern_match_pct: f64,
    pub anomaly_score_pct: f64,
    pub geolocation_confidence_pct: f64,
    pub signals_per_minute: u32,
    pub detection_rate_pct: f64,
}

impl ClassificationReport {
    pub const DEMO: ClassificationReport = ClassificationReport {
        pattern_match_pct: 98.2,
        anomaly_score_pct: 12.1,
        geolocation_confidence_pct: 94.7,
        signals_per_minute: 847,
        detection_rate_pct: 94.7,
    };
}

impl Default for ClassificationReport {
    fn default() -> Self {
        Self::DEMO
    }
}
