use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::user_dto::{BalanceResponse, FillupRequest, FillupResponse, UserResponse};
use crate::middleware::AuthenticatedUser;
use crate::repositories::UserRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct UserController {
    repository: UserRepository,
    currency: String,
}

impl UserController {
    pub fn new(pool: PgPool, currency: String) -> Self {
        Self {
            repository: UserRepository::new(pool),
            currency,
        }
    }

    fn guard_access(requester: &AuthenticatedUser, user_id: &str) -> Result<(), AppError> {
        if !requester.can_access(user_id) {
            return Err(AppError::Forbidden(
                "Cannot access another user's data".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn get_profile(
        &self,
        user_id: &str,
        requester: &AuthenticatedUser,
    ) -> Result<UserResponse, AppError> {
        Self::guard_access(requester, user_id)?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", user_id))?;

        Ok(user.into())
    }

    pub async fn get_balance(
        &self,
        user_id: &str,
        requester: &AuthenticatedUser,
    ) -> Result<BalanceResponse, AppError> {
        Self::guard_access(requester, user_id)?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", user_id))?;

        Ok(BalanceResponse {
            user_id: user.user_id,
            balance: user.balance,
            currency: self.currency.clone(),
        })
    }

    /// Recarga de saldo; el incremento es condicional en la base de
    /// datos para convivir con cobros concurrentes.
    pub async fn fillup(
        &self,
        user_id: &str,
        requester: &AuthenticatedUser,
        request: FillupRequest,
    ) -> Result<FillupResponse, AppError> {
        Self::guard_access(requester, user_id)?;

        if request.amount <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Amount has to be greater than 0".to_string(),
            ));
        }

        let new_balance = self
            .repository
            .credit(user_id, request.amount)
            .await?
            .ok_or_else(|| not_found_error("User", user_id))?;

        Ok(FillupResponse {
            message: "Balance updated".to_string(),
            user_id: user_id.to_string(),
            new_balance,
            amount_added: request.amount,
        })
    }
}
