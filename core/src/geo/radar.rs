use crate::geo::point::{GeoPoint, PlanarPoint};
use serde::Serialize;
use std::f64::consts::PI;

/// Latitude span (degrees) that maps onto one `DISTANCE_SCALE` of radar range.
pub const LATITUDE_SPAN_DEG: f64 = 30.0;
pub const DISTANCE_SCALE: f64 = 3.0;
/// Blips are clamped inside this radius; the outermost ring sits at 4.0.
pub const MAX_RADAR_DISTANCE: f64 = 3.8;

pub const GRID_RADIUS: f64 = 4.0;
pub const RING_COUNT: usize = 4;
pub const KM_PER_RING_UNIT: f64 = 25.0;
pub const SPOKE_COUNT: usize = 12;
pub const SWEEP_SPAN_RAD: f64 = PI * 0.3;
pub const SWEEP_SEGMENTS: usize = 32;
pub const SWEEP_RATE_RAD_PER_SEC: f64 = 0.8;

/// Places emitters on the radar disk.
///
/// Distance from the centre grows with absolute latitude rather than true
/// range; the only guarantees are monotonic placement and clamping to
/// `max_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarProjector {
    pub max_distance: f64,
    pub scale: f64,
}

impl RadarProjector {
    pub fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            scale: DISTANCE_SCALE,
        }
    }

    pub fn distance(&self, latitude: f64) -> f64 {
        (latitude.abs() / LATITUDE_SPAN_DEG * self.scale).min(self.max_distance)
    }

    pub fn azimuth(&self, longitude: f64) -> f64 {
        (longitude + 180.0).to_radians()
    }

    pub fn project(&self, point: GeoPoint) -> PlanarPoint {
        let azimuth = self.azimuth(point.longitude);
        let distance = self.distance(point.latitude);
        PlanarPoint::new(distance * azimuth.cos(), distance * azimuth.sin())
    }
}

impl Default for RadarProjector {
    fn default() -> Self {
        Self::new(MAX_RADAR_DISTANCE)
    }
}

pub fn project_to_radar_disk(latitude: f64, longitude: f64, max_distance: f64) -> PlanarPoint {
    RadarProjector::new(max_distance).project(GeoPoint::new(latitude, longitude))
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeRing {
    pub radius: f64,
    pub label_km: f64,
    pub outermost: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Spoke {
    pub bearing_rad: f64,
    pub tip: PlanarPoint,
    pub major: bool,
}

impl Spoke {
    /// Major spokes carry a whole-degree bearing label.
    pub fn label(&self) -> Option<String> {
        self.major
            .then(|| format!("{:.0}°", self.bearing_rad.to_degrees()))
    }
}

/// Static radar furniture: range rings, spokes and the sweep beam.
#[derive(Debug, Clone, Copy)]
pub struct RadarGrid {
    pub radius: f64,
}

impl RadarGrid {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn rings(&self) -> Vec<RangeRing> {
        let step = self.radius / RING_COUNT as f64;
        (1..=RING_COUNT)
            .map(|index| {
                let radius = step * index as f64;
                RangeRing {
                    radius,
                    label_km: radius * KM_PER_RING_UNIT,
                    outermost: index == RING_COUNT,
                }
            })
            .collect()
    }

    pub fn spokes(&self) -> Vec<Spoke> {
        (0..SPOKE_COUNT)
            .map(|index| {
                let bearing_rad = index as f64 / SPOKE_COUNT as f64 * 2.0 * PI;
                Spoke {
                    bearing_rad,
                    tip: PlanarPoint::new(
                        bearing_rad.cos() * self.radius,
                        bearing_rad.sin() * self.radius,
                    ),
                    major: index % 3 == 0,
                }
            })
            .collect()
    }

    /// Leading-edge arc of the sweep beam at rotation `rotation_rad`.
    pub fn sweep_arc(&self, rotation_rad: f64) -> Vec<PlanarPoint> {
        (0..=SWEEP_SEGMENTS)
            .map(|index| {
                let angle = rotation_rad + index as f64 / SWEEP_SEGMENTS as f64 * SWEEP_SPAN_RAD;
                PlanarPoint::new(angle.cos() * self.radius, angle.sin() * self.radius)
            })
            .collect()
    }

    /// Sweep rotation after `elapsed_secs`, wrapped to one turn.
    pub fn sweep_rotation(elapsed_secs: f64) -> f64 {
        (elapsed_secs * SWEEP_RATE_RAD_PER_SEC).rem_euclid(2.0 * PI)
    }
}

impl Default for RadarGrid {
    fn default() -> Self {
        Self::new(GRID_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kolkata_lands_at_expected_range() {
        let p = project_to_radar_disk(22.5726, 88.3639, 3.8);
        let azimuth = (88.3639_f64 + 180.0).to_radians();
        let distance: f64 = 22.5726 / 30.0 * 3.0;
        assert!((distance - 2.25726).abs() < 1e-9);
        assert!((p.x - distance * azimuth.cos()).abs() < 1e-9);
        assert!((p.z - distance * azimuth.sin()).abs() < 1e-9);
        assert!((p.magnitude() - 2.257).abs() < 1e-3);
    }

    #[test]
    fn magnitude_never_exceeds_max_distance() {
        let projector = RadarProjector::new(3.8);
        let mut lat = -180.0;
        while lat <= 180.0 {
            for lng in [-180.0, -45.0, 0.0, 77.0, 180.0] {
                let p = projector.project(GeoPoint::new(lat, lng));
                assert!(p.magnitude() <= 3.8 + 1e-12, "lat {lat} lng {lng}");
            }
            lat += 2.5;
        }
    }

    #[test]
    fn distance_is_monotonic_then_clamped() {
        let projector = RadarProjector::default();
        assert!(projector.distance(10.0) < projector.distance(20.0));
        assert_eq!(projector.distance(50.0), MAX_RADAR_DISTANCE);
        assert_eq!(projector.distance(-80.0), MAX_RADAR_DISTANCE);
        assert_eq!(projector.distance(-15.0), projector.distance(15.0));
    }

    #[test]
    fn longitude_wraps_every_full_turn() {
        for lng in [-180.0, -90.0, 0.0, 77.2, 150.0] {
            let a = project_to_radar_disk(25.0, lng, 3.8);
            let b = project_to_radar_disk(25.0, lng + 360.0, 3.8);
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.z - b.z).abs() < 1e-9);
        }
    }

    #[test]
    fn equator_collapses_to_centre() {
        let p = project_to_radar_disk(0.0, 123.0, 3.8);
        assert_eq!(p.magnitude(), 0.0);
    }

    #[test]
    fn grid_has_labelled_rings_and_major_spokes() {
        let grid = RadarGrid::default();
        let rings = grid.rings();
        assert_eq!(rings.len(), 4);
        assert_eq!(rings[0].label_km, 25.0);
        assert!(rings[3].outermost);
        assert_eq!(rings[3].label_km, 100.0);

        let spokes = grid.spokes();
        assert_eq!(spokes.len(), 12);
        assert_eq!(spokes.iter().filter(|s| s.major).count(), 4);
        assert_eq!(spokes[3].label().as_deref(), Some("90°"));
        assert!(spokes[1].label().is_none());
    }

    #[test]
    fn sweep_arc_stays_on_grid_edge() {
        let grid = RadarGrid::default();
        let arc = grid.sweep_arc(RadarGrid::sweep_rotation(1.0));
        assert_eq!(arc.len(), SWEEP_SEGMENTS + 1);
        for point in arc {
            assert!((point.magnitude() - GRID_RADIUS).abs() < 1e-9);
        }
    }
}
