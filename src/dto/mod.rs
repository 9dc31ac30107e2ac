//! DTOs de la API
//!
//! Records planos de request/response. Nada de identificadores ni
//! objetos de consulta de la capa de persistencia.

pub mod admin_dto;
pub mod city_dto;
pub mod rent_dto;
pub mod scooter_dto;
pub mod user_dto;
pub mod zone_dto;

use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
