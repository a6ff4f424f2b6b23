//! Cálculos de asistencia.
//!
//! Tres funciones puras: porcentaje actual, clases necesarias para llegar a un
//! porcentaje objetivo e impacto de una ausencia. Ninguna falla: ante entradas
//! degeneradas (total 0) devuelven 0. La validación `attended <= total` la hace
//! quien llama (ver `api_json::validate_counts`).

use serde::Serialize;

/// Clases por día asumidas cuando no se configura otro valor.
pub const DEFAULT_CLASSES_PER_DAY: u32 = 6;

/// Resultado de `calculate_classes_needed`.
///
/// `AllRemaining` se mantiene separado de `Classes(0.0)`: pedir 100% nunca se
/// resuelve numéricamente.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ClassesNeeded {
    Classes(f64),
    AllRemaining,
}

impl ClassesNeeded {
    /// Cantidad numérica, o `None` si hay que asistir a todas las restantes.
    pub fn as_classes(&self) -> Option<f64> {
        match self {
            ClassesNeeded::Classes(x) => Some(*x),
            ClassesNeeded::AllRemaining => None,
        }
    }

    /// Campos derivados para mostrar (redondeo hacia arriba).
    pub fn plan(&self, classes_per_day: u32) -> Option<TargetPlan> {
        self.as_classes().map(|x| TargetPlan::new(x, classes_per_day))
    }
}

/// Clases y días adicionales, ya redondeados con `ceil`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetPlan {
    pub classes_needed: f64,
    pub classes_needed_rounded: u64,
    pub days_needed: u64,
    pub classes_per_day: u32,
}

impl TargetPlan {
    /// `classes_per_day` menor que 1 se toma como 1; el valor usado queda en
    /// el plan.
    pub fn new(classes_needed: f64, classes_per_day: u32) -> Self {
        let classes_per_day = classes_per_day.max(1);
        TargetPlan {
            classes_needed,
            classes_needed_rounded: classes_needed.ceil() as u64,
            days_needed: (classes_needed / f64::from(classes_per_day)).ceil() as u64,
            classes_per_day,
        }
    }
}

/// Porcentaje de asistencia actual (0 si no se ha dictado ninguna clase).
pub fn calculate_current_percentage(total_classes: u32, attended_classes: u32) -> f64 {
    if total_classes == 0 {
        return 0.0;
    }
    f64::from(attended_classes) / f64::from(total_classes) * 100.0
}

/// Clases adicionales (todas asistidas) para llegar a `desired_percentage`.
///
/// Resuelve `(attended + x) / (total + x) = desired / 100`:
/// `x = (desired * total - 100 * attended) / (100 - desired)`, nunca negativo.
pub fn calculate_classes_needed(
    total_classes: u32,
    attended_classes: u32,
    desired_percentage: f64,
) -> ClassesNeeded {
    if desired_percentage <= 0.0 {
        return ClassesNeeded::Classes(0.0);
    }
    if desired_percentage >= 100.0 {
        return ClassesNeeded::AllRemaining;
    }

    let total = f64::from(total_classes);
    let attended = f64::from(attended_classes);
    let required = (desired_percentage * total - 100.0 * attended) / (100.0 - desired_percentage);
    ClassesNeeded::Classes(required.max(0.0))
}

/// Porcentaje proyectado tras `absent_days` días de ausencia.
///
/// Las ausencias sólo suman al total; las clases asistidas no cambian.
/// Devuelve `(new_percentage, new_total)`.
pub fn calculate_absent_impact(
    total_classes: u32,
    attended_classes: u32,
    absent_days: u32,
    classes_per_day: u32,
) -> (f64, u64) {
    let absent_classes = u64::from(absent_days) * u64::from(classes_per_day);
    let new_total = u64::from(total_classes) + absent_classes;
    let new_percentage = if new_total > 0 {
        f64::from(attended_classes) / new_total as f64 * 100.0
    } else {
        0.0
    };
    (new_percentage, new_total)
}
