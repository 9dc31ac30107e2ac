//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado. Las transiciones de estado y el saldo
//! usan UPDATEs condicionales para que las carreras se pierdan de
//! forma limpia en vez de pisar estado concurrente.

pub mod city_repository;
pub mod scooter_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod zone_repository;

pub use city_repository::CityRepository;
pub use scooter_repository::ScooterRepository;
pub use trip_repository::TripRepository;
pub use user_repository::UserRepository;
pub use zone_repository::ZoneRepository;
