//! End-to-end: raw sensor package in, report line out.

use tempo::{Workout, WorkoutError, create_workout, sample_packages};

fn line(code: &str, fields: &[f64]) -> String {
    create_workout(code, fields)
        .and_then(|w| w.build_report())
        .unwrap()
        .render()
}

#[test]
fn swimming_report() {
    assert_eq!(
        line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn running_report() {
    assert_eq!(
        line("RUN", &[15000.0, 1.0, 75.0]),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
    );
}

#[test]
fn walking_report() {
    assert_eq!(
        line("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252."
    );
}

#[test]
fn sample_packages_in_order() {
    let types: Vec<String> = sample_packages()
        .iter()
        .map(|p| p.read().and_then(|w| w.build_report()).unwrap().training_type)
        .collect();
    assert_eq!(types, ["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn bad_packages_fail() {
    assert_eq!(
        create_workout("XYZ", &[1.0, 2.0, 3.0]).unwrap_err(),
        WorkoutError::UnknownWorkoutCode("XYZ".into())
    );
    assert!(matches!(
        create_workout("RUN", &[1.0, 2.0]),
        Err(WorkoutError::ArityMismatch { .. })
    ));
    assert!(matches!(
        create_workout("WLK", &[9000.0, 1.0, 75.0, 0.0]).and_then(|w| w.build_report()),
        Err(WorkoutError::DivisionByZero { divisor: "height_cm" })
    ));
}
