//! Resolución de zonas por coordenada
//!
//! Contención puramente geométrica: ray casting para polígonos y un
//! radio pequeño para las zonas de tipo Point (marcadores de carga).
//! Sin estado y seguro de llamar concurrentemente.

use crate::models::{Zone, ZoneGeometry};

/// Radio de contención para zonas Point, en grados (~25 m)
pub const POINT_ZONE_RADIUS_DEGREES: f64 = 0.00025;

/// Devuelve todas las zonas activas cuya geometría contiene el punto.
///
/// Puede devolver cero, una o varias zonas (las zonas se solapan y
/// anidan). El orden del resultado no está garantizado; la agregación
/// posterior es conmutativa, así que no importa.
pub fn resolve_zones<'a>(zones: &'a [Zone], latitude: f64, longitude: f64) -> Vec<&'a Zone> {
    zones
        .iter()
        .filter(|zone| zone.active && geometry_contains(&zone.geometry, latitude, longitude))
        .collect()
}

/// Comprueba si una geometría contiene el punto dado
pub fn geometry_contains(geometry: &ZoneGeometry, latitude: f64, longitude: f64) -> bool {
    match geometry {
        ZoneGeometry::Polygon(rings) => match rings.first() {
            Some(exterior) => point_in_ring(exterior, latitude, longitude),
            None => false,
        },
        ZoneGeometry::Point([lon, lat]) => {
            let dx = longitude - lon;
            let dy = latitude - lat;
            (dx * dx + dy * dy).sqrt() <= POINT_ZONE_RADIUS_DEGREES
        }
    }
}

/// Ray casting sobre el anillo exterior. Los puntos sobre el borde
/// cuentan como dentro.
fn point_in_ring(ring: &[[f64; 2]], latitude: f64, longitude: f64) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];

        if on_segment([xj, yj], [xi, yi], longitude, latitude) {
            return true;
        }

        let intersects = ((yi > latitude) != (yj > latitude))
            && (longitude < (xj - xi) * (latitude - yi) / (yj - yi) + xi);
        if intersects {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn on_segment(a: [f64; 2], b: [f64; 2], x: f64, y: f64) -> bool {
    const EPSILON: f64 = 1e-12;
    let cross = (b[0] - a[0]) * (y - a[1]) - (b[1] - a[1]) * (x - a[0]);
    if cross.abs() > EPSILON {
        return false;
    }
    let within_x = x >= a[0].min(b[0]) - EPSILON && x <= a[0].max(b[0]) + EPSILON;
    let within_y = y >= a[1].min(b[1]) - EPSILON && y <= a[1].max(b[1]) + EPSILON;
    within_x && within_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ZoneKind, ZoneRules};
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn make_zone(name: &str, kind: ZoneKind, geometry: ZoneGeometry, active: bool) -> Zone {
        Zone {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            city: "Stockholm".to_string(),
            description: None,
            geometry: Json(geometry),
            rules: Json(ZoneRules::default()),
            active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn square(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> ZoneGeometry {
        ZoneGeometry::Polygon(vec![vec![
            [min_lon, min_lat],
            [max_lon, min_lat],
            [max_lon, max_lat],
            [min_lon, max_lat],
            [min_lon, min_lat],
        ]])
    }

    #[test]
    fn point_inside_polygon_is_contained() {
        let geometry = square(18.0, 59.0, 18.1, 59.1);
        assert!(geometry_contains(&geometry, 59.05, 18.05));
    }

    #[test]
    fn point_outside_polygon_is_not_contained() {
        let geometry = square(18.0, 59.0, 18.1, 59.1);
        assert!(!geometry_contains(&geometry, 59.2, 18.05));
        assert!(!geometry_contains(&geometry, 59.05, 17.9));
    }

    #[test]
    fn point_on_boundary_counts_as_inside() {
        let geometry = square(18.0, 59.0, 18.1, 59.1);
        assert!(geometry_contains(&geometry, 59.0, 18.05));
        assert!(geometry_contains(&geometry, 59.05, 18.1));
    }

    #[test]
    fn point_zone_matches_within_radius() {
        let geometry = ZoneGeometry::Point([18.0686, 59.3293]);
        assert!(geometry_contains(&geometry, 59.3293, 18.0686));
        assert!(geometry_contains(&geometry, 59.3294, 18.0686));
        assert!(!geometry_contains(&geometry, 59.34, 18.0686));
    }

    #[test]
    fn resolve_returns_all_overlapping_zones() {
        let outer = make_zone(
            "slow zone",
            ZoneKind::SlowSpeed,
            square(18.0, 59.0, 18.2, 59.2),
            true,
        );
        let inner = make_zone(
            "no-go island",
            ZoneKind::NoGo,
            square(18.05, 59.05, 18.1, 59.1),
            true,
        );
        let elsewhere = make_zone(
            "parking",
            ZoneKind::Parking,
            square(19.0, 60.0, 19.1, 60.1),
            true,
        );
        let zones = vec![outer, inner, elsewhere];

        let hits = resolve_zones(&zones, 59.07, 18.07);
        assert_eq!(hits.len(), 2);

        let hits = resolve_zones(&zones, 59.15, 18.15);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, ZoneKind::SlowSpeed);

        let hits = resolve_zones(&zones, 55.0, 13.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn inactive_zones_are_skipped() {
        let zone = make_zone(
            "retired",
            ZoneKind::Parking,
            square(18.0, 59.0, 18.1, 59.1),
            false,
        );
        let zones = vec![zone];
        assert!(resolve_zones(&zones, 59.05, 18.05).is_empty());
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let geometry = ZoneGeometry::Polygon(vec![vec![[18.0, 59.0], [18.1, 59.1]]]);
        assert!(!geometry_contains(&geometry, 59.05, 18.05));
        let empty = ZoneGeometry::Polygon(vec![]);
        assert!(!geometry_contains(&empty, 59.05, 18.05));
    }
}
