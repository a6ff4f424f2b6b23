use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::AppConfig;
use crate::models::AttendanceForm;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Formulario HTML; los botones llaman a los endpoints JSON.
pub async fn index_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn help_handler(config: web::Data<AppConfig>) -> impl Responder {
    let example = AttendanceForm {
        total_classes: 100,
        attended_classes: 80,
        desired_percentage: 85.0,
        absent_days: 5,
    };

    let help = json!({
        "description": "Calculadora de porcentaje de asistencia. Los endpoints POST aceptan el mismo JSON (ver 'post_example'); los campos omitidos toman el valor inicial del formulario.",
        "endpoints": {
            "POST /attendance/current": "porcentaje actual",
            "POST /attendance/target": "clases/días necesarios para llegar a desired_percentage",
            "POST /attendance/absence": "impacto de faltar absent_days días",
            "GET /attendance": "formulario completo con parámetros en query"
        },
        "post_example": example,
        "get_example_query": "/attendance?total_classes=100&attended_classes=80&desired_percentage=85&absent_days=5",
        "classes_per_day": config.classes_per_day,
        "note": "attended_classes no puede superar total_classes; desired_percentage debe estar entre 0 y 100."
    });

    HttpResponse::Ok().json(help)
}
