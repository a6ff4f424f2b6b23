// --- Calculadora de Asistencia - Archivo principal ---

use asistencia::config::AppConfig;
use asistencia::run_server;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    tracing::info!("=== Calculadora de Porcentaje de Asistencia (API) ===");
    let config = AppConfig::from_env()?;
    run_server(config).await
}
