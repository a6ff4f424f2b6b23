use std::collections::HashMap;
use std::str::FromStr;

use crate::error::FormError;
pub use crate::models::AttendanceForm;

/// Parsea el formulario desde un JSON.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "total_classes": 100,
///   "attended_classes": 80,
///   "desired_percentage": 75.0,
///   "absent_days": 5
/// }
/// ```
///
/// Todos los campos son opcionales (valores iniciales del formulario:
/// 0, 0, 75.0, 1). No valida rangos; ver `validate_counts`.
pub fn parse_json_input(json_str: &str) -> Result<AttendanceForm, serde_json::Error> {
    serde_json::from_str::<AttendanceForm>(json_str)
}

/// Convierte el cuerpo ya recibido por actix en un formulario, pasando por
/// `parse_json_input`.
pub fn parse_form(value: serde_json::Value) -> Result<AttendanceForm, FormError> {
    let json_str = serde_json::to_string(&value).map_err(|e| FormError::InvalidJson(e.to_string()))?;
    parse_json_input(&json_str).map_err(|e| FormError::InvalidJson(e.to_string()))
}

/// Construye el formulario desde parámetros de query (GET /attendance).
/// Los parámetros vacíos o ausentes toman el valor por defecto.
pub fn form_from_query(query: &HashMap<String, String>) -> Result<AttendanceForm, FormError> {
    let defaults = AttendanceForm::default();
    Ok(AttendanceForm {
        total_classes: query_value(query, "total_classes")?.unwrap_or(defaults.total_classes),
        attended_classes: query_value(query, "attended_classes")?.unwrap_or(defaults.attended_classes),
        desired_percentage: query_value(query, "desired_percentage")?.unwrap_or(defaults.desired_percentage),
        absent_days: query_value(query, "absent_days")?.unwrap_or(defaults.absent_days),
    })
}

fn query_value<T: FromStr>(query: &HashMap<String, String>, field: &str) -> Result<Option<T>, FormError> {
    match query.get(field).map(|s| s.trim()) {
        Some(s) if !s.is_empty() => s
            .parse::<T>()
            .map(Some)
            .map_err(|_| FormError::InvalidNumber { field: field.to_string(), value: s.to_string() }),
        _ => Ok(None),
    }
}

/// Única validación previa al cálculo: no se puede haber asistido a más
/// clases de las dictadas.
pub fn validate_counts(form: &AttendanceForm) -> Result<(), FormError> {
    if form.attended_classes > form.total_classes {
        return Err(FormError::AttendedExceedsTotal);
    }
    Ok(())
}

/// El slider ya limita a 0-100; la API recibe valores arbitrarios.
pub fn validate_desired(desired_percentage: f64) -> Result<(), FormError> {
    if !desired_percentage.is_finite() || !(0.0..=100.0).contains(&desired_percentage) {
        return Err(FormError::PercentageOutOfRange);
    }
    Ok(())
}
