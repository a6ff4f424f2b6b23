use asistencia::*;

#[test]
fn test_current_percentage_en_rango() {
    for total in 0..=60u32 {
        for attended in 0..=total {
            let pct = calculate_current_percentage(total, attended);
            assert!((0.0..=100.0).contains(&pct), "total={} attended={} pct={}", total, attended, pct);
        }
    }
}

#[test]
fn test_classes_needed_cero_si_objetivo_no_positivo() {
    for desired in [0.0, -0.1, -50.0, f64::NEG_INFINITY] {
        assert_eq!(calculate_classes_needed(40, 10, desired), ClassesNeeded::Classes(0.0));
    }
}

#[test]
fn test_classes_needed_all_remaining_desde_100() {
    for (t, a) in [(0, 0), (10, 0), (10, 10), (57, 31)] {
        assert_eq!(calculate_classes_needed(t, a, 100.0), ClassesNeeded::AllRemaining);
        assert_eq!(calculate_classes_needed(t, a, 150.0), ClassesNeeded::AllRemaining);
    }
}

#[test]
fn test_classes_needed_reproduce_el_objetivo() {
    let objetivos = [10.0, 33.3, 50.0, 66.6, 75.0, 80.5, 90.0, 99.9];
    for total in [1u32, 7, 40, 100, 250] {
        for attended in [0, total / 3, total / 2] {
            for desired in objetivos {
                let x = calculate_classes_needed(total, attended, desired)
                    .as_classes()
                    .expect("objetivo < 100 debe ser numérico");
                assert!(x >= 0.0);
                if calculate_current_percentage(total, attended) >= desired {
                    continue;
                }
                let reached = (f64::from(attended) + x) / (f64::from(total) + x) * 100.0;
                assert!(
                    (reached - desired).abs() < 1e-6,
                    "total={} attended={} desired={} x={} reached={}",
                    total, attended, desired, x, reached
                );
            }
        }
    }
}

#[test]
fn test_classes_needed_objetivo_superado() {
    assert_eq!(calculate_classes_needed(100, 90, 50.0), ClassesNeeded::Classes(0.0));
}

#[test]
fn test_absent_impact_cero_dias_no_cambia() {
    for (t, a) in [(0u32, 0u32), (10, 3), (100, 75), (33, 33)] {
        let (pct, total) = calculate_absent_impact(t, a, 0, DEFAULT_CLASSES_PER_DAY);
        assert_eq!(pct, calculate_current_percentage(t, a));
        assert_eq!(total, u64::from(t));
    }
}

#[test]
fn test_absent_impact_ejemplo() {
    let (pct, total) = calculate_absent_impact(100, 80, 5, 6);
    assert_eq!(total, 130);
    assert!((pct - 61.54).abs() < 0.01);
}

#[test]
fn test_absent_impact_monotono() {
    let mut anterior = calculate_absent_impact(50, 20, 0, 6).0;
    for days in 1..=30 {
        let (pct, _) = calculate_absent_impact(50, 20, days, 6);
        assert!(pct < anterior, "days={} pct={} anterior={}", days, pct, anterior);
        anterior = pct;
    }
}

#[test]
fn test_absent_impact_sin_desbordar() {
    let (_, total) = calculate_absent_impact(u32::MAX, 0, u32::MAX, 6);
    assert_eq!(total, u64::from(u32::MAX) * 7);
}

#[test]
fn test_target_plan_dias() {
    let plan = calculate_classes_needed(100, 60, 75.0).plan(DEFAULT_CLASSES_PER_DAY).unwrap();
    assert_eq!(plan.classes_needed_rounded, 60);
    assert_eq!(plan.days_needed, 10);

    let plan = TargetPlan::new(0.5, 6);
    assert_eq!(plan.classes_needed_rounded, 1);
    assert_eq!(plan.days_needed, 1);
}
