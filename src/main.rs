use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use scooter_rental::config::{EnvironmentConfig, PricingConfig};
use scooter_rental::database::DatabaseConnection;
use scooter_rental::routes::create_app;
use scooter_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging: DEBUG en desarrollo, INFO en el resto
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🛴 Scooter Rental - Rental Session & Geofenced Pricing Engine");
    info!("=============================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    let pricing = PricingConfig::default();
    info!(
        "💰 Tarifa: startFee={} perMinute={} parkingFee={} ({})",
        pricing.start_fee, pricing.per_minute, pricing.parking_fee, pricing.currency
    );

    let app_state = AppState::new(pool, config.clone(), pricing);
    let app = create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/v1/status - Health check");
    info!("🛴 Endpoints - Rent:");
    info!("   POST /api/v1/rent/start/:id - Iniciar alquiler");
    info!("   POST /api/v1/rent/stop/:id - Terminar alquiler");
    info!("   GET  /api/v1/rent/history - Historial de viajes");
    info!("   GET  /api/v1/rent/history/:trip_id - Detalle de viaje");
    info!("🚦 Endpoints - Scooters:");
    info!("   GET  /api/v1/scooters - Listar scooters");
    info!("   GET  /api/v1/scooters/:id - Obtener scooter");
    info!("   POST /api/v1/scooters/:id/telemetry - Actualizar telemetría");
    info!("🗺  Endpoints - Zones:");
    info!("   GET  /api/v1/zones - Listar zonas");
    info!("   GET  /api/v1/zones/check - Comprobar punto");
    info!("   GET  /api/v1/zones/:id - Obtener zona");
    info!("   POST /api/v1/zones - Crear zona (admin)");
    info!("   PUT  /api/v1/zones/:id - Actualizar zona (admin)");
    info!("   DELETE /api/v1/zones/:id - Eliminar zona (admin)");
    info!("🔌 Endpoints - Stations:");
    info!("   GET  /api/v1/stations - Estaciones de carga");
    info!("   GET  /api/v1/stations/:id - Obtener estación");
    info!("🏙  Endpoints - Cities:");
    info!("   GET  /api/v1/cities - Ciudades disponibles");
    info!("👤 Endpoints - Users:");
    info!("   GET  /api/v1/users/:id - Perfil de usuario");
    info!("   GET  /api/v1/users/:id/balance - Saldo");
    info!("   POST /api/v1/users/:id/fillup - Recargar saldo");
    info!("🛠  Endpoints - Admin:");
    info!("   GET  /api/v1/admin/users - Listar usuarios");
    info!("   GET  /api/v1/admin/scooters - Listar flota");
    info!("   POST /api/v1/admin/scooters - Crear scooter");
    info!("   PUT  /api/v1/admin/scooters/:id - Actualizar scooter");
    info!("   DELETE /api/v1/admin/scooters/:id - Eliminar scooter");
    info!("   GET  /api/v1/admin/rides - Listar viajes");
    info!("   GET  /api/v1/admin/payments - Listar cobros");
    info!("💸 Endpoints - Pricing:");
    info!("   GET  /api/v1/pricing - Tarifa vigente");
    info!("🎮 Endpoints - Simulation:");
    info!("   POST /api/v1/simulation/start - Arrancar simulador");
    info!("   POST /api/v1/simulation/stop - Parar simulador");
    info!("   GET  /api/v1/simulation/state - Estado del simulador");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
