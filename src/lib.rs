//! Motor de alquiler de scooters con tarificación por geocercas.
//!
//! Los módulos siguen el corte MVC habitual: routes → controllers →
//! repositories, con los servicios puros (geo, policy, pricing) y el
//! orquestador de sesiones en `services`.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
