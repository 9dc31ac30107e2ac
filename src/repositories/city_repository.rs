use crate::models::City;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CityRepository {
    pool: PgPool,
}

impl CityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<City>, AppError> {
        let cities =
            sqlx::query_as::<_, City>("SELECT * FROM cities WHERE active = TRUE ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(cities)
    }
}
