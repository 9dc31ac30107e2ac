//! Middleware de autenticación JWT
//!
//! Extrae el bearer token, lo verifica e inyecta el usuario
//! autenticado como extensión del request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Self-or-admin: puede leer/modificar los datos de `user_id`
    pub fn can_access(&self, user_id: &str) -> bool {
        self.user_id == user_id || self.is_admin()
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Middleware que exige rol admin; se apila después de auth_middleware
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_access_anyone() {
        let admin = AuthenticatedUser {
            user_id: "admin-1".to_string(),
            role: "admin".to_string(),
        };
        assert!(admin.can_access("someone-else"));
    }

    #[test]
    fn customer_can_only_access_self() {
        let user = AuthenticatedUser {
            user_id: "user-1".to_string(),
            role: "customer".to_string(),
        };
        assert!(user.can_access("user-1"));
        assert!(!user.can_access("user-2"));
    }
}
