use crate::models::{ParkingType, Position, Scooter, Trip, TripStatus};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

/// Fila de cobro para el listado administrativo de pagos: viaje
/// completado más el nombre del scooter.
#[derive(Debug, FromRow)]
pub struct PaymentRow {
    pub id: Uuid,
    pub user_id: String,
    pub scooter_name: String,
    pub cost: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea el viaje activo con la posición de salida del scooter.
    ///
    /// El índice único parcial sobre (scooter_id) WHERE status='active'
    /// respalda el invariante de un único viaje activo por vehículo.
    pub async fn insert_active(
        conn: &mut PgConnection,
        scooter: &Scooter,
        user_id: &str,
        start_time: DateTime<Utc>,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, scooter_id, user_id, start_time, start_city, start_latitude, start_longitude, cost, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, 'active')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(scooter.id)
        .bind(user_id)
        .bind(start_time)
        .bind(&scooter.city)
        .bind(scooter.latitude)
        .bind(scooter.longitude)
        .fetch_one(conn)
        .await?;

        Ok(trip)
    }

    /// El único viaje activo para (scooter, usuario). Un viaje activo
    /// de otro usuario no se devuelve nunca: para este usuario
    /// simplemente no existe.
    pub async fn find_active(
        &self,
        scooter_id: Uuid,
        user_id: &str,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE scooter_id = $1 AND user_id = $2 AND status = 'active'",
        )
        .bind(scooter_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Cierra el viaje: posición final, duración, coste y clasificación.
    /// Se llama exactamente una vez, dentro de la transacción de stop.
    pub async fn complete(
        conn: &mut PgConnection,
        trip_id: Uuid,
        end_time: DateTime<Utc>,
        end_position: &Position,
        parking_type: ParkingType,
        cost: Decimal,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET end_time = $2,
                end_city = $3,
                end_latitude = $4,
                end_longitude = $5,
                parking_type = $6,
                cost = $7,
                status = 'completed',
                updated_at = NOW()
            WHERE id = $1 AND status = 'active'
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(end_time)
        .bind(&end_position.city)
        .bind(end_position.latitude)
        .bind(end_position.longitude)
        .bind(parking_type)
        .bind(cost)
        .fetch_one(conn)
        .await?;

        Ok(trip)
    }

    /// Historial de viajes completados del usuario, más recientes primero
    pub async fn history(&self, user_id: &str) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE user_id = $1 AND status = 'completed'
            ORDER BY end_time DESC
            LIMIT 50
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Listado administrativo de viajes, con filtros opcionales
    pub async fn list_all(
        &self,
        status: Option<TripStatus>,
        user_id: Option<String>,
        limit: i64,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE ($1::trip_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR user_id = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(status)
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Cobros: viajes completados con el nombre del scooter, para el
    /// listado administrativo de pagos
    pub async fn payments(
        &self,
        user_id: Option<String>,
        limit: i64,
    ) -> Result<Vec<PaymentRow>, AppError> {
        let payments = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT t.id, t.user_id, COALESCE(s.name, 'Unknown') AS scooter_name,
                   t.cost, t.start_time, t.end_time
            FROM trips t
            LEFT JOIN scooters s ON s.id = t.scooter_id
            WHERE t.status = 'completed'
              AND ($1::text IS NULL OR t.user_id = $1)
            ORDER BY t.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Un viaje concreto. Si `requester` no es admin solo ve los suyos:
    /// el viaje de otro usuario se reporta como inexistente.
    pub async fn find_for_user(
        &self,
        trip_id: Uuid,
        requester: &str,
        is_admin: bool,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE id = $1 AND ($3 OR user_id = $2)",
        )
        .bind(trip_id)
        .bind(requester)
        .bind(is_admin)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }
}
