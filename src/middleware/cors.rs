//! Middleware de CORS
//!
//! En desarrollo se acepta cualquier origen; en producción solo los
//! orígenes listados en CORS_ORIGINS.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::EnvironmentConfig;

pub fn cors_layer(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_production() && !config.cors_origins.is_empty() {
        restricted_layer(&config.cors_origins)
    } else {
        CorsLayer::very_permissive()
    }
}

fn restricted_layer(origins: &[String]) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
