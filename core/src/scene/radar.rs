use crate::catalog::threat::THREAT_ZONE_INNER_RADIUS;
use crate::catalog::{SignalCatalog, ThreatLevel};
use crate::geo::{PlanarPoint, RadarGrid, RadarProjector, RangeRing, Spoke};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RadarBlip {
    pub signal_id: u32,
    pub label: String,
    pub frequency: String,
    pub position: PlanarPoint,
    pub threat: ThreatLevel,
    pub color: &'static str,
    pub selected: bool,
}

/// Translucent annulus drawn under HIGH and CRITICAL emitters.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatZone {
    pub signal_id: u32,
    pub center: PlanarPoint,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub threat: ThreatLevel,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarScene {
    pub max_distance: f64,
    pub rings: Vec<RangeRing>,
    pub spokes: Vec<Spoke>,
    pub blips: Vec<RadarBlip>,
    pub zones: Vec<ThreatZone>,
}

impl RadarScene {
    pub fn build(
        catalog: &SignalCatalog,
        projector: &RadarProjector,
        grid: &RadarGrid,
        selected: Option<u32>,
    ) -> Self {
        let blips: Vec<RadarBlip> = catalog
            .iter()
            .map(|signal| RadarBlip {
                signal_id: signal.id,
                label: signal.kind.clone(),
                frequency: signal.frequency.clone(),
                position: projector.project(signal.position),
                threat: signal.threat,
                color: signal.threat.color_hex(),
                selected: selected == Some(signal.id),
            })
            .collect();

        let zones = blips
            .iter()
            .filter_map(|blip| {
                blip.threat.zone_radius().map(|outer_radius| ThreatZone {
                    signal_id: blip.signal_id,
                    center: blip.position,
                    inner_radius: THREAT_ZONE_INNER_RADIUS,
                    outer_radius,
                    threat: blip.threat,
                    color: blip.color,
                })
            })
            .collect();

        Self {
            max_distance: projector.max_distance,
            rings: grid.rings(),
            spokes: grid.spokes(),
            blips,
            zones,
        }
    }

    pub fn blip(&self, signal_id: u32) -> Option<&RadarBlip> {
        self.blips.iter().find(|b| b.signal_id == signal_id)
    }

    /// Closest blip within `tolerance` of `point` on the radar plane.
    pub fn blip_near(&self, point: PlanarPoint, tolerance: f64) -> Option<&RadarBlip> {
        self.blips
            .iter()
            .map(|blip| {
                let gap = (blip.position.x - point.x).hypot(blip.position.z - point.z);
                (gap, blip)
            })
            .filter(|(gap, _)| *gap <= tolerance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, blip)| blip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blips_stay_inside_the_disk() {
        let catalog = SignalCatalog::builtin();
        let scene = RadarScene::build(
            &catalog,
            &RadarProjector::default(),
            &RadarGrid::default(),
            Some(1),
        );
        assert_eq!(scene.blips.len(), 6);
        assert!(scene
            .blips
            .iter()
            .all(|b| b.position.magnitude() <= scene.max_distance + 1e-12));
        assert!(scene.blip(1).unwrap().selected);
    }

    #[test]
    fn zones_follow_high_and_critical_emitters() {
        let catalog = SignalCatalog::builtin();
        let scene = RadarScene::build(
            &catalog,
            &RadarProjector::default(),
            &RadarGrid::default(),
            None,
        );
        assert_eq!(scene.zones.len(), 3);
        let jammer = scene.zones.iter().find(|z| z.signal_id == 4).unwrap();
        assert_eq!(jammer.outer_radius, 1.2);
        assert_eq!(jammer.threat, ThreatLevel::Critical);
        assert_eq!(jammer.center, scene.blip(4).unwrap().position);
    }

    #[test]
    fn scene_serializes_for_export() {
        let catalog = SignalCatalog::builtin();
        let scene = RadarScene::build(
            &catalog,
            &RadarProjector::default(),
            &RadarGrid::default(),
            None,
        );
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["rings"].as_array().unwrap().len(), 4);
        assert_eq!(json["blips"][3]["threat"], "CRITICAL");
    }

    #[test]
    fn blip_near_resolves_a_pick_to_one_signal() {
        let catalog = SignalCatalog::builtin();
        let scene = RadarScene::build(
            &catalog,
            &RadarProjector::default(),
            &RadarGrid::default(),
            None,
        );
        for blip in &scene.blips {
            let picked = scene.blip_near(blip.position, 0.01).unwrap();
            assert_eq!(picked.signal_id, blip.signal_id);
        }
        let beside = scene.blip(2).unwrap().position;
        let nudged = PlanarPoint::new(beside.x + 0.05, beside.z);
        assert_eq!(scene.blip_near(nudged, 0.1).unwrap().signal_id, 2);
        assert!(scene.blip_near(PlanarPoint::new(4.0, 4.0), 0.2).is_none());
    }
}
