//! Simulador de flota en memoria
//!
//! Productor de telemetría de ejemplo, completamente separado del
//! motor de alquiler: no toca la base de datos ni participa en
//! facturación ni invariantes de estado. El estado vive detrás de un
//! handle explícito propiedad del AppState, con start/stop
//! idempotentes; nada de globals de módulo.

use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;

const TICK_INTERVAL: Duration = Duration::from_secs(3);
const ROUTE_STEPS: usize = 20;
const ROUTE_STEP_SIZE: f64 = 0.0004;
const BATTERY_DRAIN_PER_TICK: f64 = 0.05;

/// Scooter simulado; solo telemetría, sin identidad en base de datos
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedScooter {
    pub id: usize,
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub battery: f64,
    pub speed: f64,
    pub status: String,
    #[serde(skip)]
    route: Vec<(f64, f64)>,
    #[serde(skip)]
    route_index: usize,
}

struct SimulationState {
    scooters: Vec<SimulatedScooter>,
    ticker: JoinHandle<()>,
}

/// Handle compartido del simulador. Clonar es barato; todos los clones
/// ven el mismo estado.
#[derive(Clone, Default)]
pub struct SimulationHandle {
    inner: Arc<RwLock<Option<SimulationState>>>,
}

impl SimulationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranca el simulador. Idempotente: si ya está corriendo no hace nada.
    pub async fn start(&self, scooter_count: usize) {
        let mut guard = self.inner.write().await;
        if guard.is_some() {
            info!("Simulation already running");
            return;
        }

        let scooters = generate_scooters(scooter_count);

        let shared = self.inner.clone();
        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                let mut guard = shared.write().await;
                match guard.as_mut() {
                    Some(state) => move_scooters(&mut state.scooters),
                    None => break,
                }
            }
        });

        *guard = Some(SimulationState { scooters, ticker });
        info!("Scooter simulation started ({} scooters)", scooter_count);
    }

    /// Detiene el simulador y descarta el estado. Idempotente.
    pub async fn stop(&self) {
        let mut guard = self.inner.write().await;
        match guard.take() {
            Some(state) => {
                state.ticker.abort();
                info!("Scooter simulation stopped");
            }
            None => info!("Simulation is not running"),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Copia del estado actual, para polling desde el frontend
    pub async fn snapshot(&self) -> Vec<SimulatedScooter> {
        match self.inner.read().await.as_ref() {
            Some(state) => state.scooters.clone(),
            None => Vec::new(),
        }
    }
}

fn generate_scooters(count: usize) -> Vec<SimulatedScooter> {
    let cities = [
        ("Stockholm", 59.3293, 18.0686),
        ("Göteborg", 57.7089, 11.9746),
        ("Malmö", 55.6050, 13.0038),
    ];

    let mut rng = rand::thread_rng();
    let mut scooters = Vec::with_capacity(count);

    for i in 0..count {
        let (city, lat, lng) = cities[i % cities.len()];

        let status_roll: f64 = rng.gen();
        let status = if status_roll < 0.1 {
            "Maintenance"
        } else if status_roll < 0.15 {
            "Off"
        } else {
            "Available"
        };

        let speed = if status == "Available" {
            rng.gen_range(0..=20) as f64
        } else {
            0.0
        };

        let latitude = lat + (rng.gen::<f64>() - 0.5) * 0.02;
        let longitude = lng + (rng.gen::<f64>() - 0.5) * 0.02;
        let route = generate_route(&mut rng, latitude, longitude);

        scooters.push(SimulatedScooter {
            id: i + 1,
            name: format!("SimScooter#{}", i + 1),
            city: city.to_string(),
            latitude,
            longitude,
            battery: rng.gen_range(0.0..100.0),
            speed,
            status: status.to_string(),
            route,
            route_index: 0,
        });
    }

    scooters
}

fn generate_route(rng: &mut impl Rng, latitude: f64, longitude: f64) -> Vec<(f64, f64)> {
    let mut route = Vec::with_capacity(ROUTE_STEPS);
    let mut lat = latitude;
    let mut lng = longitude;

    for _ in 0..ROUTE_STEPS {
        lat += (rng.gen::<f64>() - 0.5) * ROUTE_STEP_SIZE;
        lng += (rng.gen::<f64>() - 0.5) * ROUTE_STEP_SIZE;
        route.push((lat, lng));
    }

    route
}

fn move_scooters(scooters: &mut [SimulatedScooter]) {
    for scooter in scooters.iter_mut() {
        if scooter.speed == 0.0 {
            continue;
        }

        scooter.route_index = (scooter.route_index + 1) % scooter.route.len();
        let (latitude, longitude) = scooter.route[scooter.route_index];
        scooter.latitude = latitude;
        scooter.longitude = longitude;
        scooter.battery = (scooter.battery - BATTERY_DRAIN_PER_TICK).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_is_idempotent() {
        let handle = SimulationHandle::new();
        handle.start(10).await;
        handle.start(10).await;
        assert!(handle.is_running().await);
        assert_eq!(handle.snapshot().await.len(), 10);
        handle.stop().await;
    }

    #[tokio::test]
    async fn stop_clears_state_and_is_idempotent() {
        let handle = SimulationHandle::new();
        handle.start(5).await;
        handle.stop().await;
        assert!(!handle.is_running().await);
        assert!(handle.snapshot().await.is_empty());
        // Segundo stop no falla
        handle.stop().await;
    }

    #[tokio::test]
    async fn snapshot_without_start_is_empty() {
        let handle = SimulationHandle::new();
        assert!(handle.snapshot().await.is_empty());
    }

    #[test]
    fn moving_scooters_drains_battery_and_advances_route() {
        let mut rng = rand::thread_rng();
        let route = generate_route(&mut rng, 59.0, 18.0);
        let mut scooters = vec![SimulatedScooter {
            id: 1,
            name: "SimScooter#1".to_string(),
            city: "Stockholm".to_string(),
            latitude: 59.0,
            longitude: 18.0,
            battery: 50.0,
            speed: 10.0,
            status: "Available".to_string(),
            route,
            route_index: 0,
        }];

        move_scooters(&mut scooters);
        assert_eq!(scooters[0].route_index, 1);
        assert!(scooters[0].battery < 50.0);
    }

    #[test]
    fn parked_scooters_do_not_move() {
        let mut rng = rand::thread_rng();
        let route = generate_route(&mut rng, 59.0, 18.0);
        let mut scooters = vec![SimulatedScooter {
            id: 1,
            name: "SimScooter#1".to_string(),
            city: "Stockholm".to_string(),
            latitude: 59.0,
            longitude: 18.0,
            battery: 50.0,
            speed: 0.0,
            status: "Off".to_string(),
            route,
            route_index: 0,
        }];

        move_scooters(&mut scooters);
        assert_eq!(scooters[0].route_index, 0);
        assert_eq!(scooters[0].battery, 50.0);
    }
}
