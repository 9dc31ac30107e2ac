//! Tarifa de alquiler
//!
//! Los precios se leen del entorno al arrancar; cambiarlos requiere
//! reiniciar el servidor.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Tarifa vigente para los viajes
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Cargo fijo por iniciar un viaje
    pub start_fee: Decimal,
    /// Coste por minuto de uso
    pub per_minute: Decimal,
    /// Recargo por aparcar fuera de una zona designada
    pub parking_fee: Decimal,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            start_fee: decimal_env("PRICING_START_FEE", "10"),
            per_minute: decimal_env("PRICING_PER_MINUTE", "2.5"),
            parking_fee: decimal_env("PRICING_PARKING_FEE", "15"),
            currency: env::var("PRICING_CURRENCY").unwrap_or_else(|_| "SEK".to_string()),
        }
    }
}

fn decimal_env(key: &str, default: &str) -> Decimal {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    Decimal::from_str(&raw)
        .unwrap_or_else(|_| panic!("{} must be a valid decimal number, got '{}'", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_tariff() {
        // No tocar el entorno en tests: construimos a mano con los defaults
        let pricing = PricingConfig {
            start_fee: Decimal::from_str("10").unwrap(),
            per_minute: Decimal::from_str("2.5").unwrap(),
            parking_fee: Decimal::from_str("15").unwrap(),
            currency: "SEK".to_string(),
        };
        assert_eq!(pricing.start_fee, Decimal::new(10, 0));
        assert_eq!(pricing.per_minute, Decimal::new(25, 1));
        assert_eq!(pricing.parking_fee, Decimal::new(15, 0));
    }
}
