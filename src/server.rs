use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::AppConfig;
use crate::error::FormError;
use crate::server_handlers::{
    absence_handler, current_handler, help_handler, index_handler, summary_handler, target_handler,
};

/// Rutas de la aplicación. Separado de `run_server` para poder montarlo en
/// los tests con `actix_web::test::init_service`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| FormError::InvalidJson(err.to_string()).into()),
    )
    .route("/", web::get().to(index_handler))
    .route("/help", web::get().to(help_handler))
    .route("/attendance", web::get().to(summary_handler))
    .route("/attendance/current", web::post().to(current_handler))
    .route("/attendance/target", web::post().to(target_handler))
    .route("/attendance/absence", web::post().to(absence_handler));
}

fn cors_for(config: &AppConfig) -> Cors {
    match &config.cors_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header(),
        None => Cors::permissive(),
    }
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    info!(
        bind = %config.bind,
        classes_per_day = config.classes_per_day,
        "Iniciando servidor en http://{}",
        config.bind
    );

    let bind = config.bind.clone();
    let data = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors_for(&data))
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(bind)?
    .run()
    .await
}
