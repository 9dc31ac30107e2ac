//! Servicios de negocio
//!
//! El motor de alquiler vive aquí: resolución de zonas, agregación de
//! políticas, cálculo de coste y orquestación de sesiones. `geo`,
//! `policy` y `pricing` son puros y sin estado; `rental_service`
//! coordina los repositorios.

pub mod geo;
pub mod policy;
pub mod pricing;
pub mod rental_service;
pub mod simulation;

pub use rental_service::RentalService;
pub use simulation::SimulationHandle;
