//! Gestor de sesiones de alquiler
//!
//! Orquesta start/stop/historial por encima de los repositorios.
//! El stop es todo-o-nada: o se ejecuta completo el trío
//! {cobrar saldo, completar viaje, liberar scooter} en una
//! transacción, o no se muta nada. No hay reintentos internos:
//! cada fallo sube al llamador con detalle estructurado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::PricingConfig;
use crate::models::{
    scooter::RENTAL_START_SPEED, ParkingType, Position, Scooter, ScooterStatus, Trip, Zone,
};
use crate::repositories::{ScooterRepository, TripRepository, UserRepository, ZoneRepository};
use crate::services::geo;
use crate::services::policy::{self, EffectivePolicy};
use crate::services::pricing::{self, CostBreakdown};
use crate::utils::errors::{not_found_error, AppError};

/// Resultado de iniciar un alquiler
#[derive(Debug)]
pub struct StartOutcome {
    pub trip: Trip,
    pub scooter: Scooter,
}

/// Resultado de terminar un alquiler
#[derive(Debug)]
pub struct StopOutcome {
    pub trip: Trip,
    pub scooter: Scooter,
    pub breakdown: CostBreakdown,
    pub policy: EffectivePolicy,
    pub new_balance: Decimal,
}

/// Liquidación calculada de un viaje, antes de escribir nada.
/// Es pura: clasificación + coste + comprobación de saldo.
#[derive(Debug)]
pub struct Settlement {
    pub parking_type: ParkingType,
    pub policy: EffectivePolicy,
    pub breakdown: CostBreakdown,
}

/// Clasifica el punto final y calcula el coste; rechaza la liquidación
/// si el saldo disponible no cubre el total. No muta nada.
pub fn settle_trip(
    pricing: &PricingConfig,
    containing_zones: &[&Zone],
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    available_balance: Decimal,
) -> Result<Settlement, AppError> {
    let effective = policy::aggregate(containing_zones);
    let parking_type = policy::classify_parking(containing_zones, &effective);
    let breakdown = pricing::compute_cost(pricing, start_time, end_time, parking_type);

    if available_balance < breakdown.total {
        return Err(AppError::InsufficientBalance {
            required: breakdown.total,
            available: available_balance,
        });
    }

    Ok(Settlement {
        parking_type,
        policy: effective,
        breakdown,
    })
}

pub struct RentalService {
    pool: PgPool,
    pricing: PricingConfig,
}

impl RentalService {
    pub fn new(pool: PgPool, pricing: PricingConfig) -> Self {
        Self { pool, pricing }
    }

    /// Inicia un alquiler: guarda de estado + creación del viaje en una
    /// transacción. La transición condicional Available → In use es lo
    /// que garantiza que dos starts concurrentes no pueden ganar ambos.
    pub async fn start(&self, scooter_id: Uuid, user_id: &str) -> Result<StartOutcome, AppError> {
        let scooters = ScooterRepository::new(self.pool.clone());

        let scooter = scooters
            .find_by_id(scooter_id)
            .await?
            .ok_or_else(|| not_found_error("Scooter", &scooter_id.to_string()))?;

        if !scooter.status.can_start_rental() {
            return Err(AppError::VehicleUnavailable {
                current_status: scooter.status.to_string(),
            });
        }

        let mut tx = self.pool.begin().await?;

        let updated = ScooterRepository::try_transition(
            &mut *tx,
            scooter_id,
            ScooterStatus::Available,
            ScooterStatus::InUse,
            RENTAL_START_SPEED,
        )
        .await?;

        let scooter = match updated {
            Some(scooter) => scooter,
            None => {
                // Perdimos la carrera contra otro start; la transacción
                // se descarta sin haber escrito nada.
                tx.rollback().await?;
                let current = scooters
                    .find_by_id(scooter_id)
                    .await?
                    .ok_or_else(|| not_found_error("Scooter", &scooter_id.to_string()))?;
                return Err(AppError::VehicleUnavailable {
                    current_status: current.status.to_string(),
                });
            }
        };

        let trip = TripRepository::insert_active(&mut *tx, &scooter, user_id, Utc::now()).await?;

        tx.commit().await?;

        info!(
            trip_id = %trip.id,
            scooter_id = %scooter.id,
            user_id = %user_id,
            "Trip started"
        );

        Ok(StartOutcome { trip, scooter })
    }

    /// Termina un alquiler y liquida el coste.
    pub async fn stop(&self, scooter_id: Uuid, user_id: &str) -> Result<StopOutcome, AppError> {
        let scooters = ScooterRepository::new(self.pool.clone());
        let trips = TripRepository::new(self.pool.clone());
        let zones = ZoneRepository::new(self.pool.clone());
        let users = UserRepository::new(self.pool.clone());

        let scooter = scooters
            .find_by_id(scooter_id)
            .await?
            .ok_or_else(|| not_found_error("Scooter", &scooter_id.to_string()))?;

        if !scooter.status.can_stop_rental() {
            return Err(AppError::VehicleNotInUse {
                current_status: scooter.status.to_string(),
            });
        }

        // Un viaje activo de otro usuario cuenta como inexistente:
        // nunca se filtra la sesión ajena.
        let trip = trips
            .find_active(scooter_id, user_id)
            .await?
            .ok_or(AppError::NoActiveTrip)?;

        let user = users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", user_id))?;

        // Resolución de zonas en la posición final. Un fallo aquí es un
        // fallo duro del stop, sin reintentos.
        let candidates = zones.candidates_for_city(&scooter.city).await?;
        let containing = geo::resolve_zones(&candidates, scooter.latitude, scooter.longitude);

        let end_time = Utc::now();
        let settlement = settle_trip(
            &self.pricing,
            &containing,
            trip.start_time,
            end_time,
            user.balance,
        )?;

        let end_position = Position {
            city: scooter.city.clone(),
            latitude: scooter.latitude,
            longitude: scooter.longitude,
        };

        // Todo-o-nada: cobro condicional, cierre del viaje y liberación
        // del scooter en la misma transacción.
        let mut tx = self.pool.begin().await?;

        let new_balance =
            match UserRepository::try_debit(&mut *tx, user_id, settlement.breakdown.total).await? {
                Some(balance) => balance,
                None => {
                    // El saldo cambió entre la liquidación y el cobro.
                    tx.rollback().await?;
                    let fresh = users
                        .find_by_id(user_id)
                        .await?
                        .ok_or_else(|| not_found_error("User", user_id))?;
                    return Err(AppError::InsufficientBalance {
                        required: settlement.breakdown.total,
                        available: fresh.balance,
                    });
                }
            };

        let trip = TripRepository::complete(
            &mut *tx,
            trip.id,
            end_time,
            &end_position,
            settlement.parking_type,
            settlement.breakdown.total,
        )
        .await?;

        let scooter = match ScooterRepository::try_transition(
            &mut *tx,
            scooter_id,
            ScooterStatus::InUse,
            ScooterStatus::Available,
            0.0,
        )
        .await?
        {
            Some(scooter) => scooter,
            None => {
                // Alguien movió el scooter fuera de In use bajo nuestros
                // pies; descartamos el cobro y el cierre.
                tx.rollback().await?;
                let current = scooters
                    .find_by_id(scooter_id)
                    .await?
                    .ok_or_else(|| not_found_error("Scooter", &scooter_id.to_string()))?;
                return Err(AppError::VehicleNotInUse {
                    current_status: current.status.to_string(),
                });
            }
        };

        tx.commit().await?;

        info!(
            trip_id = %trip.id,
            scooter_id = %scooter.id,
            user_id = %user_id,
            cost = %settlement.breakdown.total,
            parking_type = settlement.parking_type.as_str(),
            "Trip completed"
        );

        Ok(StopOutcome {
            trip,
            scooter,
            breakdown: settlement.breakdown,
            policy: settlement.policy,
            new_balance,
        })
    }

    /// Historial de viajes completados del usuario
    pub async fn history(&self, user_id: &str) -> Result<Vec<Trip>, AppError> {
        let trips = TripRepository::new(self.pool.clone());
        trips.history(user_id).await
    }

    /// Detalle de un viaje; los no-admin solo ven los suyos
    pub async fn trip_detail(
        &self,
        trip_id: Uuid,
        requester: &str,
        is_admin: bool,
    ) -> Result<Trip, AppError> {
        let trips = TripRepository::new(self.pool.clone());
        trips
            .find_for_user(trip_id, requester, is_admin)
            .await?
            .ok_or_else(|| not_found_error("Trip", &trip_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ZoneGeometry, ZoneKind, ZoneRules};
    use chrono::Duration;
    use sqlx::types::Json;
    use std::str::FromStr;

    fn test_pricing() -> PricingConfig {
        PricingConfig {
            start_fee: Decimal::from_str("10").unwrap(),
            per_minute: Decimal::from_str("2.5").unwrap(),
            parking_fee: Decimal::from_str("15").unwrap(),
            currency: "SEK".to_string(),
        }
    }

    fn make_zone(kind: ZoneKind, riding: bool, parking: bool, max_speed: f64) -> Zone {
        Zone {
            id: Uuid::new_v4(),
            name: format!("{} zone", kind),
            kind,
            city: "Stockholm".to_string(),
            description: None,
            geometry: Json(ZoneGeometry::Point([18.0, 59.0])),
            rules: Json(ZoneRules {
                riding_allowed: riding,
                parking_allowed: parking,
                max_speed,
            }),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn settles_free_parking_outside_all_zones() {
        // 10 min fuera de toda zona, saldo de sobra
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let settlement =
            settle_trip(&test_pricing(), &[], start, end, Decimal::from(1000)).unwrap();

        assert_eq!(settlement.parking_type, ParkingType::Free);
        assert!(!settlement.policy.in_zone);
        assert_eq!(settlement.breakdown.total, Decimal::from(50));
    }

    #[test]
    fn settles_designated_parking_without_penalty() {
        // Mismo viaje pero dentro de zona parking
        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        let zones = [&parking];
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let settlement =
            settle_trip(&test_pricing(), &zones, start, end, Decimal::from(1000)).unwrap();

        assert_eq!(settlement.parking_type, ParkingType::Designated);
        assert_eq!(settlement.breakdown.total, Decimal::from(35));
    }

    #[test]
    fn settles_forbidden_parking_with_penalty_and_flag() {
        // Zona no-go: se factura con recargo y se marca
        let no_go = make_zone(ZoneKind::NoGo, false, false, 0.0);
        let zones = [&no_go];
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let settlement =
            settle_trip(&test_pricing(), &zones, start, end, Decimal::from(1000)).unwrap();

        assert_eq!(settlement.parking_type, ParkingType::Forbidden);
        assert!(settlement.policy.in_zone);
        assert!(!settlement.policy.park_allowed);
        assert_eq!(settlement.breakdown.total, Decimal::from(50));
    }

    #[test]
    fn rejects_settlement_when_balance_is_short() {
        // Coste 35 con saldo 5: InsufficientBalance{35, 5}
        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        let zones = [&parking];
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let err = settle_trip(&test_pricing(), &zones, start, end, Decimal::from(5)).unwrap_err();

        match err {
            AppError::InsufficientBalance {
                required,
                available,
            } => {
                assert_eq!(required, Decimal::from(35));
                assert_eq!(available, Decimal::from(5));
            }
            other => panic!("expected InsufficientBalance, got {:?}", other),
        }
    }

    #[test]
    fn exact_balance_is_enough() {
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let settlement = settle_trip(&test_pricing(), &[], start, end, Decimal::from(50)).unwrap();
        assert_eq!(settlement.breakdown.total, Decimal::from(50));
    }

    #[test]
    fn immediate_stop_charges_start_fee_plus_penalty_outside_zones() {
        // Round-trip: start y stop inmediatos en el mismo punto
        let start = Utc::now();
        let settlement =
            settle_trip(&test_pricing(), &[], start, start, Decimal::from(1000)).unwrap();
        assert_eq!(settlement.breakdown.duration_minutes, 0);
        assert_eq!(settlement.breakdown.total, Decimal::from(25));
    }

    #[test]
    fn settlement_is_zone_order_invariant() {
        let slow = make_zone(ZoneKind::SlowSpeed, true, true, 10.0);
        let parking = make_zone(ZoneKind::Parking, true, true, 20.0);
        let start = Utc::now();
        let end = start + Duration::minutes(10);

        let a = settle_trip(
            &test_pricing(),
            &[&slow, &parking],
            start,
            end,
            Decimal::from(1000),
        )
        .unwrap();
        let b = settle_trip(
            &test_pricing(),
            &[&parking, &slow],
            start,
            end,
            Decimal::from(1000),
        )
        .unwrap();

        assert_eq!(a.parking_type, b.parking_type);
        assert_eq!(a.policy, b.policy);
        assert_eq!(a.breakdown.total, b.breakdown.total);
        // Gana el límite de velocidad mínimo
        assert_eq!(a.policy.max_speed, 10.0);
    }
}
