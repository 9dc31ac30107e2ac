//! Modelos de dominio
//!
//! Structs que mapean a las tablas de PostgreSQL y los enums cerrados
//! de estado, tipo de zona y clasificación de aparcamiento.

pub mod city;
pub mod scooter;
pub mod trip;
pub mod user;
pub mod zone;

pub use city::City;
pub use scooter::{Scooter, ScooterStatus};
pub use trip::{ParkingType, Position, Trip, TripStatus};
pub use user::User;
pub use zone::{Zone, ZoneGeometry, ZoneKind, ZoneRules};
