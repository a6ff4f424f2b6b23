use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::api_json::{form_from_query, parse_form, validate_counts};
use crate::config::AppConfig;
use crate::error::FormError;
use crate::models::{Section, SummaryResponse};
use crate::report::{absence_report, current_report, target_report};

fn rejected(endpoint: &str, e: FormError) -> FormError {
    warn!(endpoint, error = %e, "formulario rechazado");
    e
}

/// POST /attendance/current
pub async fn current_handler(body: web::Json<serde_json::Value>) -> Result<HttpResponse, FormError> {
    let form = parse_form(body.into_inner()).map_err(|e| rejected("current", e))?;
    debug!(?form, "calculando porcentaje actual");
    let resp = current_report(&form).map_err(|e| rejected("current", e))?;
    Ok(HttpResponse::Ok().json(resp))
}

/// POST /attendance/target
/// "Calculate Classes/Days Needed for Target"
pub async fn target_handler(
    config: web::Data<AppConfig>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, FormError> {
    let form = parse_form(body.into_inner()).map_err(|e| rejected("target", e))?;
    debug!(?form, classes_per_day = config.classes_per_day, "calculando clases para objetivo");
    let resp = target_report(&form, config.classes_per_day).map_err(|e| rejected("target", e))?;
    Ok(HttpResponse::Ok().json(resp))
}

/// POST /attendance/absence
/// "Calculate Impact of Absence"
pub async fn absence_handler(
    config: web::Data<AppConfig>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, FormError> {
    let form = parse_form(body.into_inner()).map_err(|e| rejected("absence", e))?;
    debug!(?form, classes_per_day = config.classes_per_day, "calculando impacto de ausencia");
    let resp = absence_report(&form, config.classes_per_day).map_err(|e| rejected("absence", e))?;
    Ok(HttpResponse::Ok().json(resp))
}

/// GET /attendance?total_classes=..&attended_classes=..&desired_percentage=..&absent_days=..
/// Recalcula el formulario completo en una sola respuesta. Sólo
/// `attended > total` corta todo el formulario; un objetivo fuera de rango
/// queda como error dentro de `target`.
pub async fn summary_handler(
    config: web::Data<AppConfig>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, FormError> {
    let form = form_from_query(&query.into_inner()).map_err(|e| rejected("summary", e))?;
    debug!(?form, "recalculando formulario completo");
    validate_counts(&form).map_err(|e| rejected("summary", e))?;

    let target = target_report(&form, config.classes_per_day);
    if let Err(e) = &target {
        warn!(endpoint = "summary", error = %e, "objetivo rechazado");
    }

    let summary = SummaryResponse {
        current: current_report(&form).map_err(|e| rejected("summary", e))?,
        target: Section::from(target),
        absence: absence_report(&form, config.classes_per_day).map_err(|e| rejected("summary", e))?,
        generated_at: chrono::Utc::now(),
    };
    Ok(HttpResponse::Ok().json(summary))
}
