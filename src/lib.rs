// Biblioteca raíz del crate `asistencia`.
// Calculadora de porcentaje de asistencia expuesta como servicio HTTP con un
// formulario web.
pub mod calculator;
pub mod api_json;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod server;
mod server_handlers;

pub use calculator::{
    calculate_absent_impact, calculate_classes_needed, calculate_current_percentage, ClassesNeeded,
    TargetPlan, DEFAULT_CLASSES_PER_DAY,
};
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
