use serde::{Deserialize, Serialize};

use crate::models::{Zone, ZoneGeometry, ZoneKind, ZoneRules};
use crate::services::policy::EffectivePolicy;

/// Request para crear una zona (admin)
#[derive(Debug, Deserialize)]
pub struct CreateZoneRequest {
    pub name: String,
    pub kind: ZoneKind,
    pub city: String,
    pub description: Option<String>,
    pub geometry: ZoneGeometry,
    pub rules: Option<ZoneRules>,
    pub active: Option<bool>,
}

/// Request para actualizar una zona (admin); solo los campos presentes
#[derive(Debug, Deserialize)]
pub struct UpdateZoneRequest {
    pub name: Option<String>,
    pub kind: Option<ZoneKind>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub geometry: Option<ZoneGeometry>,
    pub rules: Option<ZoneRules>,
    pub active: Option<bool>,
}

/// Filtros de listado de zonas
#[derive(Debug, Deserialize)]
pub struct ZoneFilters {
    /// Tipo de zona (parking, no-go, ...)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub city: Option<String>,
}

/// Query de comprobación de punto
#[derive(Debug, Deserialize)]
pub struct ZoneCheckQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response de /zones/check: zonas que contienen el punto y la
/// política efectiva agregada
#[derive(Debug, Serialize)]
pub struct ZoneCheckResponse {
    pub in_zone: bool,
    pub zones_count: usize,
    pub zones: Vec<Zone>,
    pub rules: EffectivePolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

/// Listado de zonas
#[derive(Debug, Serialize)]
pub struct ZoneListResponse {
    pub count: usize,
    pub zones: Vec<Zone>,
}

/// Listado de estaciones de carga (zonas de tipo charging)
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub count: usize,
    pub stations: Vec<Zone>,
}
