use serde::Serialize;

use crate::dto::scooter_dto::Coordinates;
use crate::models::City;

/// Ciudad como la expone la API
#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub timezone: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            name: city.name,
            country: city.country,
            coordinates: Coordinates {
                latitude: city.latitude,
                longitude: city.longitude,
            },
            timezone: city.timezone,
        }
    }
}

/// Listado de ciudades disponibles
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub count: usize,
    pub cities: Vec<CityResponse>,
}
