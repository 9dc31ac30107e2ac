//! Cálculo de coste del viaje
//!
//! Todo el dinero se maneja con `Decimal`, nunca con floats. La
//! duración se factura en minutos enteros con redondeo half-up
//! (30 segundos redondean hacia arriba).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::models::ParkingType;

/// Desglose del coste de un viaje completado
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CostBreakdown {
    pub duration_minutes: i64,
    pub start_fee: Decimal,
    pub ride_fee: Decimal,
    pub parking_fee: Decimal,
    pub total: Decimal,
    pub currency: String,
}

/// Minutos facturables entre dos instantes, redondeo half-up.
///
/// Un viaje que termina antes de empezar (reloj ajustado) se factura
/// como cero minutos en vez de fallar.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds().max(0);
    (seconds + 30) / 60
}

/// Coste total: cargo fijo + minutos × tarifa + recargo de aparcamiento.
///
/// El recargo aplica a `free` y `forbidden`; aparcar en zona designada
/// no tiene recargo.
pub fn compute_cost(
    pricing: &PricingConfig,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    parking_type: ParkingType,
) -> CostBreakdown {
    let minutes = duration_minutes(start, end);
    let ride_fee = Decimal::from(minutes) * pricing.per_minute;
    let parking_fee = match parking_type {
        ParkingType::Designated => Decimal::ZERO,
        ParkingType::Free | ParkingType::Forbidden => pricing.parking_fee,
    };

    CostBreakdown {
        duration_minutes: minutes,
        start_fee: pricing.start_fee,
        ride_fee,
        parking_fee,
        total: pricing.start_fee + ride_fee + parking_fee,
        currency: pricing.currency.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    fn test_pricing() -> PricingConfig {
        PricingConfig {
            start_fee: Decimal::from_str("10").unwrap(),
            per_minute: Decimal::from_str("2.5").unwrap(),
            parking_fee: Decimal::from_str("15").unwrap(),
            currency: "SEK".to_string(),
        }
    }

    #[test]
    fn rounds_half_up_to_whole_minutes() {
        let start = Utc::now();
        assert_eq!(duration_minutes(start, start + Duration::seconds(29)), 0);
        assert_eq!(duration_minutes(start, start + Duration::seconds(30)), 1);
        assert_eq!(duration_minutes(start, start + Duration::seconds(89)), 1);
        assert_eq!(duration_minutes(start, start + Duration::seconds(90)), 2);
        assert_eq!(duration_minutes(start, start + Duration::minutes(10)), 10);
    }

    #[test]
    fn negative_elapsed_bills_zero_minutes() {
        let start = Utc::now();
        assert_eq!(duration_minutes(start, start - Duration::minutes(5)), 0);
    }

    #[test]
    fn ten_minutes_free_parking_costs_fifty() {
        // 10 + 10*2.5 + 15 = 50
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let breakdown = compute_cost(&test_pricing(), start, end, ParkingType::Free);
        assert_eq!(breakdown.duration_minutes, 10);
        assert_eq!(breakdown.total, Decimal::from_str("50").unwrap());
    }

    #[test]
    fn designated_parking_skips_penalty() {
        // 10 + 10*2.5 = 35
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let breakdown = compute_cost(&test_pricing(), start, end, ParkingType::Designated);
        assert_eq!(breakdown.parking_fee, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::from_str("35").unwrap());
    }

    #[test]
    fn forbidden_parking_pays_penalty() {
        // Aparcar en zona prohibida lleva la misma multa que free
        let start = Utc::now();
        let end = start + Duration::minutes(10);
        let breakdown = compute_cost(&test_pricing(), start, end, ParkingType::Forbidden);
        assert_eq!(breakdown.parking_fee, Decimal::from_str("15").unwrap());
        assert_eq!(breakdown.total, Decimal::from_str("50").unwrap());
    }

    #[test]
    fn near_zero_trip_costs_start_fee_plus_penalty_when_free() {
        let start = Utc::now();
        let breakdown = compute_cost(&test_pricing(), start, start, ParkingType::Free);
        assert_eq!(breakdown.duration_minutes, 0);
        assert_eq!(breakdown.total, Decimal::from_str("25").unwrap());

        let breakdown = compute_cost(&test_pricing(), start, start, ParkingType::Designated);
        assert_eq!(breakdown.total, Decimal::from_str("10").unwrap());
    }

    #[test]
    fn cost_is_exact_decimal_arithmetic() {
        // 7 minutos a 2.5 = 17.5, sin residuos de float
        let start = Utc::now();
        let end = start + Duration::minutes(7);
        let breakdown = compute_cost(&test_pricing(), start, end, ParkingType::Designated);
        assert_eq!(breakdown.ride_fee, Decimal::from_str("17.5").unwrap());
        assert_eq!(breakdown.total, Decimal::from_str("27.5").unwrap());
    }
}
