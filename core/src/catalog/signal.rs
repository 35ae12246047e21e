use crate::catalog::threat::ThreatLevel;
use crate::geo::GeoPoint;
use crate::prelude::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mock emitter shown on every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: GeoPoint,
    pub threat: ThreatLevel,
    pub frequency: String,
    pub strength: u8,
    pub location: String,
}

impl Signal {
    pub fn new(
        id: u32,
        kind: &str,
        position: GeoPoint,
        threat: ThreatLevel,
        frequency: &str,
        strength: u8,
        location: &str,
    ) -> Self {
        Self {
            id,
            kind: kind.to_string(),
            position,
            threat,
            frequency: frequency.to_string(),
            strength,
            location: location.to_string(),
        }
    }

    pub fn coordinates_label(&self) -> String {
        format!(
            "{:.4}, {:.4}",
            self.position.latitude, self.position.longitude
        )
    }
}

/// Immutable set of emitters loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalCatalog {
    signals: Vec<Signal>,
}

impl SignalCatalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range strengths.
    pub fn new(signals: Vec<Signal>) -> DashboardResult<Self> {
        let mut seen = HashSet::with_capacity(signals.len());
        for signal in &signals {
            if !seen.insert(signal.id) {
                return Err(DashboardError::InvalidCatalog(format!(
                    "duplicate signal id {}",
                    signal.id
                )));
            }
            if signal.strength > 100 {
                return Err(DashboardError::InvalidCatalog(format!(
                    "signal {} strength {} exceeds 100",
                    signal.id, signal.strength
                )));
            }
        }
        Ok(Self { signals })
    }

    /// The six demonstration emitters spread across India.
    pub fn builtin() -> Self {
        let signals = vec![
            Signal::new(
                1,
                "S-400 Radar",
                GeoPoint::new(28.6139, 77.2090),
                ThreatLevel::High,
                "5.6 GHz",
                85,
                "Delhi, India",
            ),
            Signal::new(
                2,
                "Friendly Comms",
                GeoPoint::new(19.0760, 72.8777),
                ThreatLevel::Low,
                "2.4 GHz",
                60,
                "Mumbai, India",
            ),
            Signal::new(
                3,
                "Unknown Drone",
                GeoPoint::new(12.9716, 77.5946),
                ThreatLevel::Medium,
                "900 MHz",
                72,
                "Bangalore, India",
            ),
            Signal::new(
                4,
                "Electronic Jammer",
                GeoPoint::new(22.5726, 88.3639),
                ThreatLevel::Critical,
                "8.2 GHz",
                95,
                "Kolkata, India",
            ),
            Signal::new(
                5,
                "Radar System",
                GeoPoint::new(26.9124, 75.7873),
                ThreatLevel::High,
                "3.2 GHz",
                78,
                "Jaipur, India",
            ),
            Signal::new(
                6,
                "Comm Tower",
                GeoPoint::new(17.3850, 78.4867),
                ThreatLevel::Low,
                "1.8 GHz",
                45,
                "Hyderabad, India",
            ),
        ];
        Self { signals }
    }

    pub fn get(&self, id: u32) -> DashboardResult<&Signal> {
        self.signals
            .iter()
            .find(|signal| signal.id == id)
            .ok_or(DashboardError::UnknownSignal(id))
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn count_at(&self, level: ThreatLevel) -> usize {
        self.signals.iter().filter(|s| s.threat == level).count()
    }

    /// Number of emitters a completed scan reports.
    pub fn detectable_count(&self) -> usize {
        self.signals
            .iter()
            .filter(|s| s.threat.is_detectable())
            .count()
    }
}

impl Default for SignalCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_matches_demo_set() {
        let catalog = SignalCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(4).unwrap().kind, "Electronic Jammer");
        assert_eq!(catalog.count_at(ThreatLevel::High), 2);
        assert_eq!(catalog.count_at(ThreatLevel::Low), 2);
        assert_eq!(catalog.detectable_count(), 4);
        assert!(SignalCatalog::new(catalog.signals().to_vec()).is_ok());
    }

    #[test]
    fn unknown_id_is_reported() {
        let catalog = SignalCatalog::builtin();
        assert_eq!(catalog.get(42), Err(DashboardError::UnknownSignal(42)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let signal = SignalCatalog::builtin().get(1).unwrap().clone();
        let result = SignalCatalog::new(vec![signal.clone(), signal]);
        assert!(matches!(result, Err(DashboardError::InvalidCatalog(_))));
    }

    #[test]
    fn strength_above_hundred_is_rejected() {
        let mut signal = SignalCatalog::builtin().get(2).unwrap().clone();
        signal.strength = 101;
        assert!(SignalCatalog::new(vec![signal]).is_err());
    }

    #[test]
    fn signal_serializes_kind_as_type() {
        let catalog = SignalCatalog::builtin();
        let json = serde_json::to_value(catalog.get(3).unwrap()).unwrap();
        assert_eq!(json["type"], "Unknown Drone");
        assert_eq!(json["threat"], "MEDIUM");
        assert_eq!(catalog.get(3).unwrap().coordinates_label(), "12.9716, 77.5946");
    }
}
