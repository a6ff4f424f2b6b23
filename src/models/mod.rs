// Estructuras de datos del formulario y de las respuestas

use serde::{Deserialize, Serialize};

use crate::calculator::TargetPlan;

pub const DEFAULT_DESIRED_PERCENTAGE: f64 = 75.0;
pub const DEFAULT_ABSENT_DAYS: u32 = 1;

fn default_desired_percentage() -> f64 {
    DEFAULT_DESIRED_PERCENTAGE
}

fn default_absent_days() -> u32 {
    DEFAULT_ABSENT_DAYS
}

/// Valores del formulario. Un mismo cuerpo sirve para los tres endpoints;
/// los campos ausentes toman el valor inicial de los widgets.
///
/// ```json
/// {
///   "total_classes": 120,
///   "attended_classes": 84,
///   "desired_percentage": 75.0,
///   "absent_days": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceForm {
    #[serde(default)]
    pub total_classes: u32,
    #[serde(default)]
    pub attended_classes: u32,
    #[serde(default = "default_desired_percentage")]
    pub desired_percentage: f64,
    #[serde(default = "default_absent_days")]
    pub absent_days: u32,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        AttendanceForm {
            total_classes: 0,
            attended_classes: 0,
            desired_percentage: DEFAULT_DESIRED_PERCENTAGE,
            absent_days: DEFAULT_ABSENT_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentResponse {
    pub current_percentage: f64,
    pub message: String,
}

/// Resultado de la calculadora de objetivo, tal como se muestra al usuario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetOutcome {
    AlreadyMet {
        current_percentage: f64,
        desired_percentage: f64,
    },
    AllRemaining {
        current_percentage: f64,
        desired_percentage: f64,
    },
    Plan {
        current_percentage: f64,
        desired_percentage: f64,
        plan: TargetPlan,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetResponse {
    pub outcome: TargetOutcome,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsenceImpact {
    pub absent_days: u32,
    pub absent_classes: u64,
    pub current_percentage: f64,
    pub new_percentage: f64,
    pub new_total: u64,
    pub percentage_drop: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsenceResponse {
    #[serde(flatten)]
    pub impact: AbsenceImpact,
    pub message: String,
}

/// Sección del formulario que puede fallar por sí sola. El error se muestra
/// dentro de la sección sin ocultar el resto.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ready(T),
    Rejected { error: String },
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Section<T> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Section::Ready(v),
            Err(e) => Section::Rejected { error: e.to_string() },
        }
    }
}

/// Respuesta completa del formulario (GET /attendance).
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub current: CurrentResponse,
    pub target: Section<TargetResponse>,
    pub absence: AbsenceResponse,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
