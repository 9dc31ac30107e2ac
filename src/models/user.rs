//! Modelo de User
//!
//! La identidad viene de un servicio externo; aquí solo guardamos el
//! saldo y los datos mínimos de perfil. El saldo nunca puede quedar
//! negativo (CHECK en la tabla + decremento condicional).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User - mapea a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Identificador del proveedor de identidad externo
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub balance: Decimal,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
