use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Response de perfil de usuario
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub balance: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            name: user.name,
            balance: user.balance,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

/// Response de saldo
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub user_id: String,
    pub balance: Decimal,
    pub currency: String,
}

/// Request de recarga de saldo
#[derive(Debug, Deserialize)]
pub struct FillupRequest {
    pub amount: Decimal,
}

/// Response de recarga
#[derive(Debug, Serialize)]
pub struct FillupResponse {
    pub message: String,
    pub user_id: String,
    pub new_balance: Decimal,
    pub amount_added: Decimal,
}
