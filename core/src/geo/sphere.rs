use crate::geo::point::{GeoPoint, Point3};

/// Longitude that faces the viewer on the globe (the view is centred on India).
pub const REFERENCE_LONGITUDE_DEG: f64 = 77.0;

/// Radius of the globe surface in scene units.
pub const GLOBE_RADIUS: f64 = 2.0;

/// Maps geographic coordinates onto a sphere of fixed radius.
///
/// Colatitude is measured from the +y pole; azimuth is measured from the
/// reference longitude, so the reference meridian lands on the +x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    pub radius: f64,
    pub reference_longitude: f64,
}

impl SphereProjector {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            reference_longitude: REFERENCE_LONGITUDE_DEG,
        }
    }

    pub fn with_reference(radius: f64, reference_longitude: f64) -> Self {
        Self {
            radius,
            reference_longitude,
        }
    }

    pub fn project(&self, point: GeoPoint) -> Point3 {
        let colatitude = (90.0 - point.latitude).to_radians();
        let azimuth = (point.longitude - self.reference_longitude).to_radians();
        let ring = self.radius * colatitude.sin();

        Point3::new(
            ring * azimuth.cos(),
            self.radius * colatitude.cos(),
            ring * azimuth.sin(),
        )
    }

    /// Projects a whole polyline, keeping vertex order.
    pub fn project_path(&self, points: &[GeoPoint]) -> Vec<Point3> {
        points.iter().map(|&point| self.project(point)).collect()
    }
}

impl Default for SphereProjector {
    fn default() -> Self {
        Self::new(GLOBE_RADIUS)
    }
}

/// Projects onto a sphere of `radius` centred on the reference longitude.
pub fn project_to_sphere(latitude: f64, longitude: f64, radius: f64) -> Point3 {
    SphereProjector::new(radius).project(GeoPoint::new(latitude, longitude))
}

/// Globe overlays sit on slightly larger shells so they never clip into the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobeLayer {
    Surface,
    Border,
    Region,
    Emitter,
}

impl GlobeLayer {
    pub fn radius(self) -> f64 {
        match self {
            GlobeLayer::Surface => GLOBE_RADIUS,
            GlobeLayer::Border => 2.05,
            GlobeLayer::Region => 2.1,
            GlobeLayer::Emitter => 2.15,
        }
    }

    /// Shell radius for a globe whose surface is `surface_radius` instead of the default.
    pub fn scaled_radius(self, surface_radius: f64) -> f64 {
        self.radius() / GLOBE_RADIUS * surface_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn projected_points_lie_on_the_sphere() {
        let radius = 2.0;
        for lat in (-90..=90).step_by(15) {
            for lng in (-180..=180).step_by(20) {
                let p = project_to_sphere(lat as f64, lng as f64, radius);
                let r2 = p.x * p.x + p.y * p.y + p.z * p.z;
                assert!((r2 - radius * radius).abs() < 1e-9, "lat {lat} lng {lng}");
            }
        }
    }

    #[test]
    fn north_pole_ignores_longitude() {
        for lng in [-180.0, -77.0, 0.0, 77.0, 123.4, 180.0] {
            let p = project_to_sphere(90.0, lng, 3.0);
            assert!(p.x.abs() < EPS);
            assert!((p.y - 3.0).abs() < EPS);
            assert!(p.z.abs() < EPS);
        }
    }

    #[test]
    fn reference_meridian_faces_positive_x() {
        let p = project_to_sphere(0.0, REFERENCE_LONGITUDE_DEG, 2.0);
        assert!((p.x - 2.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn delhi_sits_near_the_forward_meridian() {
        let p = project_to_sphere(28.6139, 77.2090, 2.0);
        let colatitude = (90.0_f64 - 28.6139).to_radians();
        assert!((p.y - 2.0 * colatitude.cos()).abs() < EPS);
        assert!((p.y - 0.958).abs() < 1e-3);
        assert!((p.x - 1.756).abs() < 1e-3);
        assert!(p.z.abs() < 0.01);
    }

    #[test]
    fn layers_stack_outwards() {
        assert!(GlobeLayer::Surface.radius() < GlobeLayer::Border.radius());
        assert!(GlobeLayer::Border.radius() < GlobeLayer::Region.radius());
        assert!(GlobeLayer::Region.radius() < GlobeLayer::Emitter.radius());
        assert!((GlobeLayer::Emitter.scaled_radius(4.0) - 4.3).abs() < EPS);
    }

    #[test]
    fn project_path_preserves_order() {
        let projector = SphereProjector::default();
        let path = [GeoPoint::new(10.0, 70.0), GeoPoint::new(20.0, 80.0)];
        let projected = projector.project_path(&path);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[1], projector.project(path[1]));
    }
}
