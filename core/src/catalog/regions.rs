use crate::geo::GeoPoint;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Capital,
    Major,
    City,
}

impl RegionKind {
    pub fn color_hex(self) -> &'static str {
        match self {
            RegionKind::Capital => "#FFD700",
            RegionKind::Major => "#10B981",
            RegionKind::City => "#60A5FA",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            RegionKind::Capital => [0xFF, 0xD7, 0x00],
            RegionKind::Major => [0x10, 0xB9, 0x81],
            RegionKind::City => [0x60, 0xA5, 0xFA],
        }
    }
}

/// Named reference city drawn on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub position: GeoPoint,
    pub kind: RegionKind,
}

const fn region(name: &'static str, latitude: f64, longitude: f64, kind: RegionKind) -> Region {
    Region {
        name,
        position: GeoPoint::new(latitude, longitude),
        kind,
    }
}

const INDIA_REGIONS: [Region; 10] = [
    region("Delhi", 28.6139, 77.2090, RegionKind::Capital),
    region("Mumbai", 19.0760, 72.8777, RegionKind::Major),
    region("Bangalore", 12.9716, 77.5946, RegionKind::Major),
    region("Chennai", 13.0827, 80.2707, RegionKind::Major),
    region("Kolkata", 22.5726, 88.3639, RegionKind::Major),
    region("Hyderabad", 17.3850, 78.4867, RegionKind::Major),
    region("Pune", 18.5204, 73.8567, RegionKind::City),
    region("Ahmedabad", 23.0225, 72.5714, RegionKind::City),
    region("Jaipur", 26.9124, 75.7873, RegionKind::City),
    region("Lucknow", 26.8467, 80.9462, RegionKind::City),
];

// Simplified outline, clockwise from Kashmir; first and last vertex coincide.
#[rustfmt::skip]
const INDIA_BORDER: [(f64, f64); 46] = [
    (34.5, 74.5), (34.8, 76.0), (35.2, 77.5), (35.0, 78.5),
    (34.0, 79.0), (32.5, 80.0), (30.0, 81.0), (28.0, 82.0),
    (27.0, 88.0), (26.5, 89.0), (25.0, 90.0), (24.0, 91.5),
    (23.5, 92.5), (22.0, 93.0), (21.0, 92.5),
    (20.0, 90.0), (19.0, 85.0), (18.0, 84.0), (16.0, 82.0),
    (15.0, 80.5), (13.0, 80.0), (11.0, 79.5), (9.0, 78.5),
    (8.0, 77.5),
    (8.0, 77.0), (7.5, 76.5), (8.0, 76.0), (8.5, 77.0),
    (9.0, 76.0), (10.0, 75.5), (12.0, 75.0), (14.0, 74.5),
    (16.0, 73.5), (18.0, 73.0), (20.0, 72.5), (22.0, 70.0),
    (23.5, 68.5), (24.0, 68.0),
    (25.0, 68.5), (26.0, 70.0), (28.0, 70.5), (30.0, 71.0),
    (32.0, 72.0), (33.0, 73.0), (34.0, 74.0), (34.5, 74.5),
];

pub fn india_regions() -> &'static [Region] {
    &INDIA_REGIONS
}

/// Closed border polyline in (lat, lng) order.
pub fn india_border() -> Vec<GeoPoint> {
    INDIA_BORDER.iter().copied().map(GeoPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_is_closed() {
        let border = india_border();
        assert!(border.len() > 40);
        assert_eq!(border.first(), border.last());
    }

    #[test]
    fn delhi_is_the_only_capital() {
        let capitals: Vec<_> = india_regions()
            .iter()
            .filter(|r| r.kind == RegionKind::Capital)
            .collect();
        assert_eq!(capitals.len(), 1);
        assert_eq!(capitals[0].name, "Delhi");
        assert_eq!(capitals[0].kind.rgb(), [0xFF, 0xD7, 0x00]);
    }
}
