use crate::models::User;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Listado administrativo, con filtro opcional por estado activo
    pub async fn list(&self, active: Option<bool>) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE ($1::boolean IS NULL OR active = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(active)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Decremento condicional del saldo: compare-and-decrement.
    ///
    /// Solo aplica si `balance >= amount` en el momento de escribir;
    /// devuelve `None` si el saldo no alcanza. El CHECK de la tabla
    /// (`balance >= 0`) es la segunda línea de defensa.
    pub async fn try_debit(
        conn: &mut PgConnection,
        user_id: &str,
        amount: Decimal,
    ) -> Result<Option<Decimal>, AppError> {
        let new_balance: Option<(Decimal,)> = sqlx::query_as(
            r#"
            UPDATE users
            SET balance = balance - $2, updated_at = NOW()
            WHERE user_id = $1 AND balance >= $2
            RETURNING balance
            "#,
        )
        .bind(user_id)
        .bind(amount)
        .fetch_optional(conn)
        .await?;

        Ok(new_balance.map(|(b,)| b))
    }

    /// Recarga de saldo (operación externa al motor de alquiler)
    pub async fn credit(&self, user_id: &str, amount: Decimal) -> Result<Option<Decimal>, AppError> {
        let new_balance: Option<(Decimal,)> = sqlx::query_as(
            r#"
            UPDATE users
            SET balance = balance + $2, updated_at = NOW()
            WHERE user_id = $1
            RETURNING balance
            "#,
        )
        .bind(user_id)
        .bind(amount)
        .fetch_optional(&self.pool)
        .await?;

        Ok(new_balance.map(|(b,)| b))
    }
}
