use crate::catalog::{india_border, india_regions, RegionKind, SignalCatalog, ThreatLevel};
use crate::geo::{GlobeLayer, Point3, SphereProjector};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GlobeMarker {
    pub signal_id: u32,
    pub label: String,
    pub position: Point3,
    pub threat: ThreatLevel,
    pub color: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionMarker {
    pub name: &'static str,
    pub position: Point3,
    pub kind: RegionKind,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlobeScene {
    pub radius: f64,
    pub reference_longitude: f64,
    pub border: Vec<Point3>,
    pub regions: Vec<RegionMarker>,
    pub markers: Vec<GlobeMarker>,
}

impl GlobeScene {
    pub fn build(
        catalog: &SignalCatalog,
        surface: &SphereProjector,
        selected: Option<u32>,
    ) -> Self {
        let shell = |layer: GlobeLayer| {
            SphereProjector::with_reference(
                layer.scaled_radius(surface.radius),
                surface.reference_longitude,
            )
        };
        let border = shell(GlobeLayer::Border).project_path(&india_border());

        let region_shell = shell(GlobeLayer::Region);
        let regions = india_regions()
            .iter()
            .map(|region| RegionMarker {
                name: region.name,
                position: region_shell.project(region.position),
                kind: region.kind,
                color: region.kind.color_hex(),
            })
            .collect();

        let emitter_shell = shell(GlobeLayer::Emitter);
        let markers = catalog
            .iter()
            .map(|signal| GlobeMarker {
                signal_id: signal.id,
                label: signal.kind.clone(),
                position: emitter_shell.project(signal.position),
                threat: signal.threat,
                color: signal.threat.color_hex(),
                selected: selected == Some(signal.id),
            })
            .collect();

        Self {
            radius: surface.radius,
            reference_longitude: surface.reference_longitude,
            border,
            regions,
            markers,
        }
    }

    pub fn marker(&self, signal_id: u32) -> Option<&GlobeMarker> {
        self.markers.iter().find(|m| m.signal_id == signal_id)
    }

    /// Closest marker on the facing hemisphere (x >= 0) within `tolerance`
    /// of the view-plane point (`z` right, `y` up).
    pub fn marker_near(&self, z: f64, y: f64, tolerance: f64) -> Option<&GlobeMarker> {
        self.markers
            .iter()
            .filter(|marker| marker.position.x >= 0.0)
            .map(|marker| {
                let gap = (marker.position.z - z).hypot(marker.position.y - y);
                (gap, marker)
            })
            .filter(|(gap, _)| *gap <= tolerance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, marker)| marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Signal;
    use crate::geo::GeoPoint;

    #[test]
    fn markers_float_above_the_surface() {
        let catalog = SignalCatalog::builtin();
        let scene = GlobeScene::build(&catalog, &SphereProjector::default(), Some(4));
        assert_eq!(scene.markers.len(), catalog.len());
        assert_eq!(scene.regions.len(), 10);
        for marker in &scene.markers {
            assert!((marker.position.magnitude() - 2.15).abs() < 1e-9);
        }
        for point in &scene.border {
            assert!((point.magnitude() - 2.05).abs() < 1e-9);
        }
        assert!(scene.marker(4).unwrap().selected);
        assert!(!scene.marker(1).unwrap().selected);
    }

    #[test]
    fn layers_scale_with_surface_radius() {
        let catalog = SignalCatalog::builtin();
        let scene = GlobeScene::build(&catalog, &SphereProjector::new(4.0), None);
        assert!((scene.markers[0].position.magnitude() - 4.3).abs() < 1e-9);
        assert!(scene.markers.iter().all(|m| !m.selected));
    }

    #[test]
    fn marker_near_picks_the_closest_visible_marker() {
        let catalog = SignalCatalog::builtin();
        let scene = GlobeScene::build(&catalog, &SphereProjector::default(), None);
        let target = scene.marker(4).unwrap().position;
        let hit = scene.marker_near(target.z + 0.01, target.y, 0.05).unwrap();
        assert_eq!(hit.signal_id, 4);
        assert!(scene.marker_near(1.9, -1.9, 0.05).is_none());
    }

    #[test]
    fn far_side_markers_cannot_be_picked() {
        let catalog = SignalCatalog::new(vec![Signal::new(
            9,
            "Far Beacon",
            GeoPoint::new(0.0, 257.0),
            ThreatLevel::Low,
            "1 GHz",
            10,
            "Antipode",
        )])
        .unwrap();
        let scene = GlobeScene::build(&catalog, &SphereProjector::default(), None);
        let marker = &scene.markers[0];
        assert!(marker.position.x < 0.0);
        assert!(scene
            .marker_near(marker.position.z, marker.position.y, 0.5)
            .is_none());
    }
}
