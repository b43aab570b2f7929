//! Display-ready workout summary.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Report {
    /// The fixed one-line summary, every number with three decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(calories_kcal: f64) -> Report {
        Report {
            training_type: "Running".into(),
            duration_hours: 1.5,
            distance_km: 12.0,
            mean_speed_kmh: 8.0,
            calories_kcal,
        }
    }

    #[test]
    fn fixed_template() {
        assert_eq!(
            report(1234.5678).render(),
            "Тип тренировки: Running; Длительность: 1.500 ч.; Дистанция: 12.000 км; Ср. скорость: 8.000 км/ч; Потрачено ккал: 1234.568."
        );
    }

    #[test]
    fn ties_round_to_even() {
        // 0.0625 and 0.1875 are exact in binary
        assert!(report(0.0625).render().ends_with("Потрачено ккал: 0.062."));
        assert!(report(0.1875).render().ends_with("Потрачено ккал: 0.188."));
    }

    #[test]
    fn json() {
        let value: serde_json::Value = serde_json::from_str(&report(10.0).to_json().unwrap()).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["mean_speed_kmh"], 8.0);
        assert_eq!(value["calories_kcal"], 10.0);
    }
}
