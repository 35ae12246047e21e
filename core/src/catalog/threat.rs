use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal threat classification attached to each emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Inner radius shared by every radar threat zone.
pub const THREAT_ZONE_INNER_RADIUS: f64 = 0.3;

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 4] = [
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Critical => "CRITICAL",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            ThreatLevel::Low => "#10B981",
            ThreatLevel::Medium => "#F59E0B",
            ThreatLevel::High => "#EF4444",
            ThreatLevel::Critical => "#DC2626",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ThreatLevel::Low => [0x10, 0xB9, 0x81],
            ThreatLevel::Medium => [0xF5, 0x9E, 0x0B],
            ThreatLevel::High => [0xEF, 0x44, 0x44],
            ThreatLevel::Critical => [0xDC, 0x26, 0x26],
        }
    }

    /// Outer radius of the radar threat zone; only HIGH and CRITICAL get one.
    pub fn zone_radius(self) -> Option<f64> {
        match self {
            ThreatLevel::High => Some(0.8),
            ThreatLevel::Critical => Some(1.2),
            _ => None,
        }
    }

    /// Whether a completed scan reports this emitter as a detection.
    pub fn is_detectable(self) -> bool {
        self >= ThreatLevel::Medium
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
