//! Siembra de datos de demo: zonas, scooters y usuarios de prueba.
//!
//! Uso: `cargo run --bin seed` (requiere DATABASE_URL).

use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use scooter_rental::utils::jwt::{generate_token, JwtConfig};

struct ZoneSeed {
    name: &'static str,
    kind: &'static str,
    city: &'static str,
    geometry: Value,
    rules: Value,
}

fn zone_rules(riding: bool, parking: bool, max_speed: f64) -> Value {
    json!({
        "ridingAllowed": riding,
        "parkingAllowed": parking,
        "maxSpeed": max_speed,
    })
}

fn demo_zones() -> Vec<ZoneSeed> {
    vec![
        ZoneSeed {
            name: "Centralen parkering",
            kind: "parking",
            city: "Stockholm",
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [18.0580, 59.3290],
                    [18.0680, 59.3290],
                    [18.0680, 59.3390],
                    [18.0580, 59.3390],
                    [18.0580, 59.3290]
                ]]
            }),
            rules: zone_rules(true, true, 20.0),
        },
        ZoneSeed {
            name: "Gamla stan långsam zon",
            kind: "slow-speed",
            city: "Stockholm",
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [18.0660, 59.3220],
                    [18.0760, 59.3220],
                    [18.0760, 59.3280],
                    [18.0660, 59.3280],
                    [18.0660, 59.3220]
                ]]
            }),
            rules: zone_rules(true, false, 8.0),
        },
        ZoneSeed {
            name: "Kungsträdgården förbjuden zon",
            kind: "no-go",
            city: "Stockholm",
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [18.0700, 59.3300],
                    [18.0740, 59.3300],
                    [18.0740, 59.3330],
                    [18.0700, 59.3330],
                    [18.0700, 59.3300]
                ]]
            }),
            rules: zone_rules(false, false, 0.0),
        },
        ZoneSeed {
            name: "Sergels torg laddstation",
            kind: "charging",
            city: "Stockholm",
            geometry: json!({
                "type": "Point",
                "coordinates": [18.0649, 59.3326]
            }),
            rules: zone_rules(true, true, 20.0),
        },
        ZoneSeed {
            name: "Avenyn parkering",
            kind: "parking",
            city: "Göteborg",
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [11.9700, 57.7000],
                    [11.9800, 57.7000],
                    [11.9800, 57.7080],
                    [11.9700, 57.7080],
                    [11.9700, 57.7000]
                ]]
            }),
            rules: zone_rules(true, true, 20.0),
        },
        ZoneSeed {
            name: "Möllevången parkering",
            kind: "parking",
            city: "Malmö",
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [13.0000, 55.5900],
                    [13.0100, 55.5900],
                    [13.0100, 55.5980],
                    [13.0000, 55.5980],
                    [13.0000, 55.5900]
                ]]
            }),
            rules: zone_rules(true, true, 20.0),
        },
    ]
}

async fn seed_zones(pool: &PgPool) -> Result<(), sqlx::Error> {
    for city in ["Stockholm", "Göteborg", "Malmö"] {
        let deleted = sqlx::query("DELETE FROM zones WHERE city = $1")
            .bind(city)
            .execute(pool)
            .await?;
        info!("🗑️ {} zonas previas eliminadas en {}", deleted.rows_affected(), city);
    }

    let zones = demo_zones();
    for zone in &zones {
        sqlx::query(
            r#"
            INSERT INTO zones (name, kind, city, description, geometry, rules, active)
            VALUES ($1, $2::zone_kind, $3, $4, $5, $6, TRUE)
            "#,
        )
        .bind(zone.name)
        .bind(zone.kind)
        .bind(zone.city)
        .bind(format!("{} in {}", zone.name, zone.city))
        .bind(&zone.geometry)
        .bind(&zone.rules)
        .execute(pool)
        .await?;
    }
    info!("✅ {} zonas sembradas", zones.len());
    Ok(())
}

async fn seed_cities(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cities: [(&str, f64, f64); 3] = [
        ("Stockholm", 59.3327, 18.0656),
        ("Göteborg", 57.7089, 11.9746),
        ("Malmö", 55.6050, 13.0038),
    ];

    for (name, lat, lon) in cities {
        sqlx::query(
            r#"
            INSERT INTO cities (name, country, latitude, longitude, timezone, active)
            VALUES ($1, 'Sweden', $2, $3, 'Europe/Stockholm', TRUE)
            ON CONFLICT (name) DO UPDATE
            SET latitude = EXCLUDED.latitude, longitude = EXCLUDED.longitude
            "#,
        )
        .bind(name)
        .bind(lat)
        .bind(lon)
        .execute(pool)
        .await?;
    }
    info!("✅ {} ciudades sembradas", cities.len());
    Ok(())
}

async fn seed_scooters(pool: &PgPool) -> Result<(), sqlx::Error> {
    let scooters: [(&str, &str, f64, f64); 5] = [
        ("SparkRunners#21", "Stockholm", 59.3341, 18.0623),
        ("SparkRunners#22", "Stockholm", 59.3360, 18.0640),
        ("SparkRunners#23", "Stockholm", 59.3380, 18.0600),
        ("SparkRunners#24", "Göteborg", 57.7040, 11.9750),
        ("SparkRunners#25", "Malmö", 55.5940, 13.0050),
    ];

    sqlx::query("DELETE FROM trips").execute(pool).await?;
    sqlx::query("DELETE FROM scooters").execute(pool).await?;

    for (name, city, lat, lon) in scooters {
        sqlx::query(
            r#"
            INSERT INTO scooters (name, city, latitude, longitude, battery, speed, status)
            VALUES ($1, $2, $3, $4, 100, 0, 'Available')
            "#,
        )
        .bind(name)
        .bind(city)
        .bind(lat)
        .bind(lon)
        .execute(pool)
        .await?;
    }
    info!("✅ {} scooters creados", scooters.len());
    Ok(())
}

async fn seed_users(pool: &PgPool) -> Result<(), sqlx::Error> {
    let users: [(&str, &str, &str, &str, &str); 3] = [
        ("demo-user-1", "anna@example.com", "Anna Svensson", "200.00", "customer"),
        ("demo-user-2", "erik@example.com", "Erik Lindqvist", "50.00", "customer"),
        ("demo-admin", "admin@example.com", "Fleet Admin", "0.00", "admin"),
    ];

    for (user_id, email, name, balance, role) in users {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, email, name, balance, role, active)
            VALUES ($1, $2, $3, $4::numeric, $5, TRUE)
            ON CONFLICT (user_id) DO UPDATE
            SET email = EXCLUDED.email, name = EXCLUDED.name, balance = EXCLUDED.balance
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(name)
        .bind(balance)
        .bind(role)
        .execute(pool)
        .await?;
    }
    info!("✅ {} usuarios sembrados", users.len());

    // Con JWT_SECRET configurado se imprimen tokens de prueba para
    // poder llamar a la API autenticada directamente.
    if let Ok(secret) = std::env::var("JWT_SECRET") {
        let jwt_config = JwtConfig {
            secret,
            expiration: 86_400,
        };
        for (user_id, _, _, _, role) in users {
            match generate_token(user_id, role, &jwt_config) {
                Ok(token) => info!("🔑 {} ({}): {}", user_id, role, token),
                Err(e) => info!("⚠️ No se pudo generar token para {}: {}", user_id, e),
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL environment variable is required")?;

    info!("🔌 Conectando a PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    info!("✅ Conexión establecida");

    seed_cities(&pool).await?;
    seed_zones(&pool).await?;
    seed_scooters(&pool).await?;
    seed_users(&pool).await?;

    info!("🎉 Siembra completada");
    Ok(())
}
