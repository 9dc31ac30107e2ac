use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::zone_dto::StationListResponse;
use crate::models::{Zone, ZoneKind};
use crate::repositories::ZoneRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Las estaciones de carga son zonas de tipo `charging`; este
/// controlador solo restringe la vista.
pub struct StationController {
    repository: ZoneRepository,
}

impl StationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ZoneRepository::new(pool),
        }
    }

    pub async fn list(&self, city: Option<String>) -> Result<StationListResponse, AppError> {
        let stations = self
            .repository
            .list_active(Some(ZoneKind::Charging), city)
            .await?;

        Ok(StationListResponse {
            count: stations.len(),
            stations,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Zone, AppError> {
        let zone = self
            .repository
            .find_by_id(id)
            .await?
            .filter(|zone| zone.kind == ZoneKind::Charging)
            .ok_or_else(|| not_found_error("Station", &id.to_string()))?;

        Ok(zone)
    }
}
