//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Spatial query failed: {0}")]
    SpatialQuery(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Scooter is not available (current status: {current_status})")]
    VehicleUnavailable { current_status: String },

    #[error("Scooter is not in use (current status: {current_status})")]
    VehicleNotInUse { current_status: String },

    #[error("No active trip for scooter")]
    NoActiveTrip,

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Decimal, available: Decimal },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                eprintln!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::SpatialQuery(msg) => {
                eprintln!("Spatial query error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Spatial Query Error".to_string(),
                        message: "Could not resolve zones for the requested position".to_string(),
                        details: Some(json!({ "spatial_error": msg })),
                        code: Some("SPATIAL_QUERY_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                eprintln!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::VehicleUnavailable { current_status } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Scooter Not Available".to_string(),
                    message: "Scooter is not available".to_string(),
                    details: Some(json!({ "currentStatus": current_status })),
                    code: Some("VEHICLE_UNAVAILABLE".to_string()),
                },
            ),

            AppError::VehicleNotInUse { current_status } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Scooter Not In Use".to_string(),
                    message: "Scooter is not in use".to_string(),
                    details: Some(json!({ "currentStatus": current_status })),
                    code: Some("VEHICLE_NOT_IN_USE".to_string()),
                },
            ),

            AppError::NoActiveTrip => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "No Active Trip".to_string(),
                    message: "No active trip for scooter".to_string(),
                    details: None,
                    code: Some("NO_ACTIVE_TRIP".to_string()),
                },
            ),

            AppError::InsufficientBalance { required, available } => (
                StatusCode::PAYMENT_REQUIRED,
                ErrorResponse {
                    error: "Insufficient Balance".to_string(),
                    message: "Balance is not enough to pay for this trip".to_string(),
                    details: Some(json!({
                        "required": required,
                        "available": available,
                    })),
                    code: Some("INSUFFICIENT_BALANCE".to_string()),
                },
            ),

            AppError::Validation(msg) => {
                eprintln!("Validation error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                eprintln!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message: msg,
                        details: None,
                        code: Some("UNAUTHORIZED".to_string()),
                    },
                )
            }

            AppError::Forbidden(msg) => {
                eprintln!("Forbidden access: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse {
                        error: "Forbidden".to_string(),
                        message: msg,
                        details: None,
                        code: Some("FORBIDDEN".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_carries_amounts() {
        let err = AppError::InsufficientBalance {
            required: Decimal::new(35, 0),
            available: Decimal::new(5, 0),
        };
        let msg = err.to_string();
        assert!(msg.contains("35"));
        assert!(msg.contains("5"));
    }

    #[test]
    fn not_found_helper_formats_resource() {
        let err = not_found_error("Scooter", "abc");
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("Scooter with id 'abc' not found"));
    }
}
