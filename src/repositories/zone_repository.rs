use crate::models::{Zone, ZoneGeometry, ZoneKind, ZoneRules};
use crate::utils::errors::AppError;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ZoneRepository {
    pool: PgPool,
}

impl ZoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Zonas activas, con filtros opcionales por tipo y ciudad
    pub async fn list_active(
        &self,
        kind: Option<ZoneKind>,
        city: Option<String>,
    ) -> Result<Vec<Zone>, AppError> {
        let zones = sqlx::query_as::<_, Zone>(
            r#"
            SELECT * FROM zones
            WHERE active = TRUE
              AND ($1::zone_kind IS NULL OR kind = $1)
              AND ($2::text IS NULL OR city = $2)
            ORDER BY name
            "#,
        )
        .bind(kind)
        .bind(city)
        .fetch_all(&self.pool)
        .await?;

        Ok(zones)
    }

    /// Candidatas para la comprobación de contención de un punto.
    ///
    /// La contención geométrica se calcula en proceso (services::geo);
    /// aquí solo limitamos a zonas activas de la ciudad. Un fallo de
    /// esta consulta es un fallo duro de la operación de stop.
    pub async fn candidates_for_city(&self, city: &str) -> Result<Vec<Zone>, AppError> {
        let zones =
            sqlx::query_as::<_, Zone>("SELECT * FROM zones WHERE active = TRUE AND city = $1")
                .bind(city)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::SpatialQuery(e.to_string()))?;

        Ok(zones)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Zone>, AppError> {
        let zone = sqlx::query_as::<_, Zone>("SELECT * FROM zones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(zone)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        kind: ZoneKind,
        city: String,
        description: Option<String>,
        geometry: ZoneGeometry,
        rules: ZoneRules,
        active: bool,
    ) -> Result<Zone, AppError> {
        let zone = sqlx::query_as::<_, Zone>(
            r#"
            INSERT INTO zones (id, name, kind, city, description, geometry, rules, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(kind)
        .bind(city)
        .bind(description)
        .bind(Json(geometry))
        .bind(Json(rules))
        .bind(active)
        .fetch_one(&self.pool)
        .await?;

        Ok(zone)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        kind: Option<ZoneKind>,
        city: Option<String>,
        description: Option<String>,
        geometry: Option<ZoneGeometry>,
        rules: Option<ZoneRules>,
        active: Option<bool>,
    ) -> Result<Option<Zone>, AppError> {
        // Obtener la zona actual y fusionar los campos presentes
        let current = match self.find_by_id(id).await? {
            Some(zone) => zone,
            None => return Ok(None),
        };

        let zone = sqlx::query_as::<_, Zone>(
            r#"
            UPDATE zones
            SET name = $2, kind = $3, city = $4, description = $5,
                geometry = $6, rules = $7, active = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(kind.unwrap_or(current.kind))
        .bind(city.unwrap_or(current.city))
        .bind(description.or(current.description))
        .bind(geometry.map(Json).unwrap_or(current.geometry))
        .bind(rules.map(Json).unwrap_or(current.rules))
        .bind(active.unwrap_or(current.active))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(zone))
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Zone>, AppError> {
        let zone = sqlx::query_as::<_, Zone>("DELETE FROM zones WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(zone)
    }
}
