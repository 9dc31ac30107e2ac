use crate::models::{Scooter, ScooterStatus};
use crate::utils::errors::AppError;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

pub struct ScooterRepository {
    pool: PgPool,
}

impl ScooterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Scooter>, AppError> {
        let scooter = sqlx::query_as::<_, Scooter>("SELECT * FROM scooters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(scooter)
    }

    pub async fn list(
        &self,
        status: Option<ScooterStatus>,
        city: Option<String>,
    ) -> Result<Vec<Scooter>, AppError> {
        let scooters = sqlx::query_as::<_, Scooter>(
            r#"
            SELECT * FROM scooters
            WHERE ($1::scooter_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR city = $2)
            ORDER BY name
            "#,
        )
        .bind(status)
        .bind(city)
        .fetch_all(&self.pool)
        .await?;

        Ok(scooters)
    }

    /// Alta de un scooter en la flota (solo admin)
    pub async fn create(
        &self,
        name: String,
        city: String,
        latitude: f64,
        longitude: f64,
        battery: f64,
        status: ScooterStatus,
    ) -> Result<Scooter, AppError> {
        let scooter = sqlx::query_as::<_, Scooter>(
            r#"
            INSERT INTO scooters (id, name, city, latitude, longitude, battery, speed, status)
            VALUES ($1, $2, $3, $4, $5, $6, 0, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(city)
        .bind(latitude)
        .bind(longitude)
        .bind(battery)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(scooter)
    }

    /// Actualización administrativa: igual que la telemetría pero puede
    /// tocar también nombre y ciudad.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_admin(
        &self,
        id: Uuid,
        name: Option<String>,
        city: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        battery: Option<f64>,
        speed: Option<f64>,
        status: Option<ScooterStatus>,
    ) -> Result<Option<Scooter>, AppError> {
        let scooter = sqlx::query_as::<_, Scooter>(
            r#"
            UPDATE scooters
            SET name       = COALESCE($2, name),
                city       = COALESCE($3, city),
                latitude   = COALESCE($4, latitude),
                longitude  = COALESCE($5, longitude),
                battery    = COALESCE($6, battery),
                speed      = COALESCE($7, speed),
                status     = COALESCE($8, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(latitude)
        .bind(longitude)
        .bind(battery)
        .bind(speed)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(scooter)
    }

    /// Baja de un scooter. Si tiene viajes registrados la FK lo impide;
    /// eso se reporta como error de validación, no como fallo interno.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Scooter>, AppError> {
        let scooter =
            sqlx::query_as::<_, Scooter>("DELETE FROM scooters WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| match &e {
                    sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => {
                        AppError::Validation(
                            "Scooter has registered trips and cannot be deleted".to_string(),
                        )
                    }
                    _ => AppError::Database(e),
                })?;

        Ok(scooter)
    }

    /// Transición condicional de estado dentro de una transacción.
    ///
    /// El UPDATE solo aplica si el estado sigue siendo `from` en el
    /// momento de escribir; si otra petición ganó la carrera devuelve
    /// `None` y el llamador decide el error. Esto es lo que serializa
    /// start/stop por vehículo.
    pub async fn try_transition(
        conn: &mut PgConnection,
        id: Uuid,
        from: ScooterStatus,
        to: ScooterStatus,
        speed: f64,
    ) -> Result<Option<Scooter>, AppError> {
        let scooter = sqlx::query_as::<_, Scooter>(
            r#"
            UPDATE scooters
            SET status = $3, speed = $4, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .bind(speed)
        .fetch_optional(conn)
        .await?;

        Ok(scooter)
    }

    /// Actualización de telemetría: posición, batería, velocidad y
    /// estado administrativo. Solo toca los campos presentes.
    pub async fn update_telemetry(
        &self,
        id: Uuid,
        latitude: Option<f64>,
        longitude: Option<f64>,
        battery: Option<f64>,
        speed: Option<f64>,
        status: Option<ScooterStatus>,
    ) -> Result<Option<Scooter>, AppError> {
        let scooter = sqlx::query_as::<_, Scooter>(
            r#"
            UPDATE scooters
            SET latitude   = COALESCE($2, latitude),
                longitude  = COALESCE($3, longitude),
                battery    = COALESCE($4, battery),
                speed      = COALESCE($5, speed),
                status     = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(latitude)
        .bind(longitude)
        .bind(battery)
        .bind(speed)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(scooter)
    }
}
