use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::zone_dto::{
    CreateZoneRequest, UpdateZoneRequest, ZoneCheckQuery, ZoneCheckResponse, ZoneFilters,
    ZoneListResponse,
};
use crate::models::{Zone, ZoneKind, ZoneRules};
use crate::repositories::ZoneRepository;
use crate::services::{geo, policy};
use crate::utils::errors::{not_found_error, AppError};

pub struct ZoneController {
    repository: ZoneRepository,
}

impl ZoneController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ZoneRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: ZoneFilters) -> Result<ZoneListResponse, AppError> {
        let kind = match filters.kind.as_deref() {
            Some(raw) => Some(
                ZoneKind::parse(raw)
                    .ok_or_else(|| AppError::Validation(format!("Invalid zone type '{}'", raw)))?,
            ),
            None => None,
        };

        let zones = self.repository.list_active(kind, filters.city).await?;
        Ok(ZoneListResponse {
            count: zones.len(),
            zones,
        })
    }

    /// Comprueba qué zonas contienen un punto y agrega sus reglas.
    /// "Fuera de toda zona" y "dentro de zona restrictiva" producen
    /// la misma política binaria pero avisos distintos.
    pub async fn check_point(&self, query: ZoneCheckQuery) -> Result<ZoneCheckResponse, AppError> {
        let (latitude, longitude) = match (query.latitude, query.longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => {
                return Err(AppError::BadRequest(
                    "latitude and longitude query parameters required".to_string(),
                ))
            }
        };

        let candidates = self
            .repository
            .list_active(None, None)
            .await
            .map_err(|e| AppError::SpatialQuery(e.to_string()))?;
        let containing = geo::resolve_zones(&candidates, latitude, longitude);
        let effective = policy::aggregate(&containing);

        let alert = if !effective.in_zone {
            Some("Outside all zones, riding is not allowed".to_string())
        } else if !effective.ride_allowed {
            Some("Inside a zone where riding is not allowed".to_string())
        } else {
            None
        };

        let zones: Vec<Zone> = containing.into_iter().cloned().collect();
        Ok(ZoneCheckResponse {
            in_zone: effective.in_zone,
            zones_count: zones.len(),
            zones,
            rules: effective,
            alert,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Zone, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))
    }

    pub async fn create(&self, request: CreateZoneRequest) -> Result<Zone, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Zone name is required".to_string()));
        }
        if let Some(rules) = &request.rules {
            if rules.max_speed < 0.0 {
                return Err(AppError::Validation(
                    "maxSpeed cannot be negative".to_string(),
                ));
            }
        }

        self.repository
            .create(
                request.name,
                request.kind,
                request.city,
                request.description,
                request.geometry,
                request.rules.unwrap_or_else(ZoneRules::default),
                request.active.unwrap_or(true),
            )
            .await
    }

    pub async fn update(&self, id: Uuid, request: UpdateZoneRequest) -> Result<Zone, AppError> {
        if let Some(rules) = &request.rules {
            if rules.max_speed < 0.0 {
                return Err(AppError::Validation(
                    "maxSpeed cannot be negative".to_string(),
                ));
            }
        }

        self.repository
            .update(
                id,
                request.name,
                request.kind,
                request.city,
                request.description,
                request.geometry,
                request.rules,
                request.active,
            )
            .await?
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<Zone, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))
    }
}
