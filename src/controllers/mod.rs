//! Controladores
//!
//! Validan la entrada, llaman a servicios/repositorios y convierten
//! los modelos a DTOs de respuesta.

pub mod admin_controller;
pub mod city_controller;
pub mod rent_controller;
pub mod scooter_controller;
pub mod station_controller;
pub mod user_controller;
pub mod zone_controller;
