//! Arma las respuestas del formulario: llama a la calculadora y genera el
//! texto que se muestra en cada sección.
//!
//! El orden importa en la calculadora de objetivo: primero se revisa si el
//! porcentaje actual ya cumple la meta y sólo después se llama a
//! `calculate_classes_needed`, de modo que `AllRemaining` sólo aparece cuando
//! se pide 100% sin tenerlo.

use crate::api_json::{validate_counts, validate_desired};
use crate::calculator::{calculate_absent_impact, calculate_classes_needed, calculate_current_percentage};
use crate::error::FormError;
use crate::models::{
    AbsenceImpact, AbsenceResponse, AttendanceForm, CurrentResponse, TargetOutcome, TargetResponse,
};

pub fn current_report(form: &AttendanceForm) -> Result<CurrentResponse, FormError> {
    validate_counts(form)?;
    let current = calculate_current_percentage(form.total_classes, form.attended_classes);
    Ok(CurrentResponse {
        current_percentage: current,
        message: format!("Current Attendance: {:.2}%", current),
    })
}

pub fn target_report(form: &AttendanceForm, classes_per_day: u32) -> Result<TargetResponse, FormError> {
    validate_counts(form)?;
    validate_desired(form.desired_percentage)?;

    let current = calculate_current_percentage(form.total_classes, form.attended_classes);
    let desired = form.desired_percentage;

    if current >= desired {
        return Ok(TargetResponse {
            outcome: TargetOutcome::AlreadyMet { current_percentage: current, desired_percentage: desired },
            message: format!(
                "🎉 You already have {:.2}% attendance which meets your target of {}%!",
                current, desired
            ),
        });
    }

    let needed = calculate_classes_needed(form.total_classes, form.attended_classes, desired);
    let response = match needed.plan(classes_per_day) {
        None => TargetResponse {
            outcome: TargetOutcome::AllRemaining { current_percentage: current, desired_percentage: desired },
            message: "You need to attend all remaining classes to reach 100%".to_string(),
        },
        Some(plan) => TargetResponse {
            message: format!(
                "To reach {}% attendance from your current {:.2}%:\n\n\
                 📚 **Classes needed:** {} more classes\n\
                 📅 **Days needed:** {} days (assuming {} classes per day)\n\n\
                 🔹 *This means you should attend all classes for the next {} days*",
                desired,
                current,
                plan.classes_needed_rounded,
                plan.days_needed,
                plan.classes_per_day,
                plan.days_needed
            ),
            outcome: TargetOutcome::Plan { current_percentage: current, desired_percentage: desired, plan },
        },
    };
    Ok(response)
}

pub fn absence_report(form: &AttendanceForm, classes_per_day: u32) -> Result<AbsenceResponse, FormError> {
    validate_counts(form)?;

    let current = calculate_current_percentage(form.total_classes, form.attended_classes);
    let (new_percentage, new_total) =
        calculate_absent_impact(form.total_classes, form.attended_classes, form.absent_days, classes_per_day);
    let absent_classes = u64::from(form.absent_days) * u64::from(classes_per_day);
    let drop = current - new_percentage;

    Ok(AbsenceResponse {
        message: format!(
            "If you're absent for {} days (missing {} classes):\n\n\
             📉 **New attendance percentage:** {:.2}%\n\
             📊 **Total classes will become:** {}\n\
             🔻 **Percentage drop:** {:.2}%\n\n\
             ⚠️ *Your attendance will decrease from {:.2}% to {:.2}%*",
            form.absent_days, absent_classes, new_percentage, new_total, drop, current, new_percentage
        ),
        impact: AbsenceImpact {
            absent_days: form.absent_days,
            absent_classes,
            current_percentage: current,
            new_percentage,
            new_total,
            percentage_drop: drop,
        },
    })
}
