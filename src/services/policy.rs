//! Agregación de políticas de zona
//!
//! Reduce el conjunto de zonas que contienen un punto a una única
//! política efectiva. Las reglas son conmutativas y asociativas: el
//! orden de entrada nunca cambia el resultado. Sobre la política
//! binaria se construye la clasificación de aparcamiento en tres
//! valores que decide el recargo.

use crate::models::{ParkingType, Zone, ZoneKind};

/// Política efectiva en un punto tras combinar todas las zonas que lo contienen
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EffectivePolicy {
    /// AND de ridingAllowed: la zona más restrictiva gana
    pub ride_allowed: bool,
    /// AND de parkingAllowed
    pub park_allowed: bool,
    /// MIN de maxSpeed: aplica el límite más estricto
    pub max_speed: f64,
    /// OR de (tipo == charging)
    pub has_charging: bool,
    /// false si el punto está fuera de todas las zonas conocidas.
    /// Distinto de "dentro de una zona restrictiva" aunque ambos casos
    /// prohíban circular: el mensaje al usuario debe diferenciarlos.
    pub in_zone: bool,
}

impl EffectivePolicy {
    /// Política fija para un punto fuera de todas las zonas
    pub fn outside_all_zones() -> Self {
        Self {
            ride_allowed: false,
            park_allowed: false,
            max_speed: 0.0,
            has_charging: false,
            in_zone: false,
        }
    }
}

/// Combina las zonas en una política efectiva.
pub fn aggregate(zones: &[&Zone]) -> EffectivePolicy {
    if zones.is_empty() {
        return EffectivePolicy::outside_all_zones();
    }

    let ride_allowed = zones.iter().all(|zone| zone.rules.riding_allowed);
    let park_allowed = zones.iter().all(|zone| zone.rules.parking_allowed);
    let max_speed = zones
        .iter()
        .map(|zone| zone.rules.max_speed)
        .fold(f64::INFINITY, f64::min);
    let has_charging = zones.iter().any(|zone| zone.kind == ZoneKind::Charging);

    EffectivePolicy {
        ride_allowed,
        park_allowed,
        max_speed,
        has_charging,
        in_zone: true,
    }
}

/// Clasifica el aparcamiento en el punto final del viaje.
///
/// - `designated`: parkAllowed y al menos una zona parking/charging.
/// - `forbidden`: dentro de alguna zona y parkAllowed es false.
/// - `free`: fuera de todas las zonas, o dentro de zonas que toleran
///   aparcar sin designarlo.
///
/// El recargo de la tarifa aplica a `free` y a `forbidden`; el sistema
/// no impide físicamente terminar el viaje en zona prohibida, solo lo
/// factura y lo marca.
pub fn classify_parking(zones: &[&Zone], policy: &EffectivePolicy) -> ParkingType {
    if !policy.in_zone {
        return ParkingType::Free;
    }
    if !policy.park_allowed {
        return ParkingType::Forbidden;
    }
    let in_designated = zones
        .iter()
        .any(|zone| matches!(zone.kind, ZoneKind::Parking | ZoneKind::Charging));
    if in_designated {
        ParkingType::Designated
    } else {
        ParkingType::Free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ZoneGeometry, ZoneRules};
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn make_zone(kind: ZoneKind, riding: bool, parking: bool, max_speed: f64) -> Zone {
        Zone {
            id: Uuid::new_v4(),
            name: format!("{} zone", kind),
            kind,
            city: "Stockholm".to_string(),
            description: None,
            geometry: Json(ZoneGeometry::Point([18.0, 59.0])),
            rules: Json(ZoneRules {
                riding_allowed: riding,
                parking_allowed: parking,
                max_speed,
            }),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_returns_fallback_policy() {
        let policy = aggregate(&[]);
        assert_eq!(policy, EffectivePolicy::outside_all_zones());
        assert!(!policy.in_zone);
        assert_eq!(policy.max_speed, 0.0);
    }

    #[test]
    fn restrictive_zone_wins_inside_overlap() {
        let slow = make_zone(ZoneKind::SlowSpeed, true, true, 10.0);
        let no_go = make_zone(ZoneKind::NoGo, false, false, 20.0);
        let policy = aggregate(&[&slow, &no_go]);
        assert!(!policy.ride_allowed);
        assert!(!policy.park_allowed);
        assert_eq!(policy.max_speed, 10.0);
        assert!(policy.in_zone);
    }

    #[test]
    fn min_speed_applies_across_overlapping_zones() {
        // slow-speed 10 solapada con parking 20
        let slow = make_zone(ZoneKind::SlowSpeed, true, true, 10.0);
        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        let policy = aggregate(&[&slow, &parking]);
        assert_eq!(policy.max_speed, 10.0);
        assert!(policy.park_allowed);
    }

    #[test]
    fn aggregation_is_order_invariant() {
        let a = make_zone(ZoneKind::SlowSpeed, true, true, 10.0);
        let b = make_zone(ZoneKind::NoParking, true, false, 25.0);
        let c = make_zone(ZoneKind::Charging, true, true, 15.0);

        let forward = aggregate(&[&a, &b, &c]);
        let reversed = aggregate(&[&c, &b, &a]);
        let shuffled = aggregate(&[&b, &c, &a]);
        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn charging_zone_sets_has_charging() {
        let charging = make_zone(ZoneKind::Charging, true, true, 15.0);
        let policy = aggregate(&[&charging]);
        assert!(policy.has_charging);

        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        assert!(!aggregate(&[&parking]).has_charging);
    }

    #[test]
    fn classify_outside_all_zones_is_free() {
        let policy = aggregate(&[]);
        assert_eq!(classify_parking(&[], &policy), ParkingType::Free);
    }

    #[test]
    fn classify_parking_zone_is_designated() {
        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        let zones = [&parking];
        let policy = aggregate(&zones);
        assert_eq!(classify_parking(&zones, &policy), ParkingType::Designated);
    }

    #[test]
    fn classify_charging_zone_is_designated() {
        let charging = make_zone(ZoneKind::Charging, true, true, 15.0);
        let zones = [&charging];
        let policy = aggregate(&zones);
        assert_eq!(classify_parking(&zones, &policy), ParkingType::Designated);
    }

    #[test]
    fn classify_no_go_zone_is_forbidden() {
        let no_go = make_zone(ZoneKind::NoGo, false, false, 0.0);
        let zones = [&no_go];
        let policy = aggregate(&zones);
        assert_eq!(classify_parking(&zones, &policy), ParkingType::Forbidden);
    }

    #[test]
    fn classify_tolerated_zone_is_free() {
        // Una zona slow-speed permite aparcar pero no lo designa
        let slow = make_zone(ZoneKind::SlowSpeed, true, true, 10.0);
        let zones = [&slow];
        let policy = aggregate(&zones);
        assert_eq!(classify_parking(&zones, &policy), ParkingType::Free);
    }

    #[test]
    fn parking_zone_overlapping_no_parking_is_forbidden() {
        // El AND manda: si otra zona prohíbe aparcar, no hay bahía que valga
        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        let no_parking = make_zone(ZoneKind::NoParking, true, false, 20.0);
        let zones = [&parking, &no_parking];
        let policy = aggregate(&zones);
        assert_eq!(classify_parking(&zones, &policy), ParkingType::Forbidden);
    }
}
