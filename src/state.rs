//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El handle del simulador vive aquí para
//! que su ciclo de vida sea explícito y no haya estado global de módulo.

use sqlx::PgPool;

use crate::config::{EnvironmentConfig, PricingConfig};
use crate::services::SimulationHandle;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub pricing: PricingConfig,
    pub simulation: SimulationHandle,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, pricing: PricingConfig) -> Self {
        Self {
            pool,
            config,
            pricing,
            simulation: SimulationHandle::new(),
        }
    }
}
