//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno
//! y la tarifa de alquiler.

pub mod environment;
pub mod pricing;

pub use environment::*;
pub use pricing::PricingConfig;
