//! Modelo de Zone
//!
//! Zonas geográficas con reglas de circulación y aparcamiento.
//! El tipo de zona es un enum cerrado para que la agregación de
//! reglas sea exhaustiva.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Clasificación de la zona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "zone_kind")]
pub enum ZoneKind {
    #[sqlx(rename = "parking")]
    #[serde(rename = "parking")]
    Parking,
    #[sqlx(rename = "no-parking")]
    #[serde(rename = "no-parking")]
    NoParking,
    #[sqlx(rename = "slow-speed")]
    #[serde(rename = "slow-speed")]
    SlowSpeed,
    #[sqlx(rename = "no-go")]
    #[serde(rename = "no-go")]
    NoGo,
    #[sqlx(rename = "charging")]
    #[serde(rename = "charging")]
    Charging,
}

impl ZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Parking => "parking",
            ZoneKind::NoParking => "no-parking",
            ZoneKind::SlowSpeed => "slow-speed",
            ZoneKind::NoGo => "no-go",
            ZoneKind::Charging => "charging",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "parking" => Some(ZoneKind::Parking),
            "no-parking" => Some(ZoneKind::NoParking),
            "slow-speed" => Some(ZoneKind::SlowSpeed),
            "no-go" => Some(ZoneKind::NoGo),
            "charging" => Some(ZoneKind::Charging),
            _ => None,
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometría de la zona, serializada como JSONB.
///
/// Las coordenadas siguen la convención GeoJSON `[longitude, latitude]`.
/// Los polígonos llevan anillos; solo el exterior participa en la
/// comprobación de contención.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum ZoneGeometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    Point([f64; 2]),
}

/// Reglas que aplica la zona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRules {
    #[serde(rename = "ridingAllowed")]
    pub riding_allowed: bool,
    #[serde(rename = "parkingAllowed")]
    pub parking_allowed: bool,
    #[serde(rename = "maxSpeed")]
    pub max_speed: f64,
}

impl Default for ZoneRules {
    fn default() -> Self {
        Self {
            riding_allowed: true,
            parking_allowed: true,
            max_speed: 20.0,
        }
    }
}

/// Zone - mapea a la tabla zones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Zone {
    pub id: Uuid,
    pub name: String,
    pub kind: ZoneKind,
    pub city: String,
    pub description: Option<String>,
    pub geometry: Json<ZoneGeometry>,
    pub rules: Json<ZoneRules>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_serializes_like_geojson() {
        let geometry = ZoneGeometry::Point([18.0686, 59.3293]);
        let json = serde_json::to_value(&geometry).unwrap();
        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0], 18.0686);

        let polygon = ZoneGeometry::Polygon(vec![vec![
            [18.0, 59.0],
            [18.1, 59.0],
            [18.1, 59.1],
            [18.0, 59.0],
        ]]);
        let json = serde_json::to_value(&polygon).unwrap();
        assert_eq!(json["type"], "Polygon");
        assert!(json["coordinates"].is_array());
    }

    #[test]
    fn rules_use_camel_case_field_names() {
        let rules = ZoneRules::default();
        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json["ridingAllowed"], true);
        assert_eq!(json["parkingAllowed"], true);
        assert_eq!(json["maxSpeed"], 20.0);
    }

    #[test]
    fn zone_kind_labels_roundtrip() {
        for kind in [
            ZoneKind::Parking,
            ZoneKind::NoParking,
            ZoneKind::SlowSpeed,
            ZoneKind::NoGo,
            ZoneKind::Charging,
        ] {
            assert_eq!(ZoneKind::parse(kind.as_str()), Some(kind));
        }
    }
}
