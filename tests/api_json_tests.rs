use asistencia::api_json::*;
use asistencia::error::FormError;
use std::collections::HashMap;

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_parse_json_input() {
    let json_data = r#"
    {
        "total_classes": 100,
        "attended_classes": 80,
        "desired_percentage": 75.0,
        "absent_days": 5
    }
    "#;

    let form = parse_json_input(json_data).expect("Debe parsear el formulario");
    assert_eq!(form.total_classes, 100);
    assert_eq!(form.attended_classes, 80);
    assert_eq!(form.desired_percentage, 75.0);
    assert_eq!(form.absent_days, 5);
    assert_eq!(validate_counts(&form), Ok(()));
}

#[test]
fn test_parse_json_vacio_usa_valores_iniciales() {
    let form = parse_json_input("{}").unwrap();
    assert_eq!(form, AttendanceForm::default());
}

#[test]
fn test_form_from_query() {
    let form = form_from_query(&query(&[
        ("total_classes", "40"),
        ("attended_classes", " 30 "),
        ("desired_percentage", "82.5"),
        ("absent_days", ""),
    ]))
    .unwrap();
    assert_eq!(form.total_classes, 40);
    assert_eq!(form.attended_classes, 30);
    assert_eq!(form.desired_percentage, 82.5);
    assert_eq!(form.absent_days, 1);
}

#[test]
fn test_form_from_query_valor_invalido() {
    let err = form_from_query(&query(&[("total_classes", "diez")])).unwrap_err();
    assert_eq!(
        err,
        FormError::InvalidNumber { field: "total_classes".to_string(), value: "diez".to_string() }
    );
    assert!(form_from_query(&query(&[("absent_days", "-2")])).is_err());
}

#[test]
fn test_mensaje_de_validacion() {
    let form = AttendanceForm { total_classes: 3, attended_classes: 4, ..Default::default() };
    let err = validate_counts(&form).unwrap_err();
    assert_eq!(err.to_string(), "Attended classes cannot be more than total classes held!");
    assert_eq!(validate_desired(-1.0).unwrap_err().to_string(), "Percentage must be between 0 and 100");
}
