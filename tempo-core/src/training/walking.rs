use super::{MINUTES_PER_HOUR, Measurements, Workout, divide};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub measurements: Measurements,
    pub height_cm: f64,
}

impl SportsWalking {
    pub const WEIGHT_COEFF_1: f64 = 0.035;
    pub const WEIGHT_COEFF_2: f64 = 0.029;
    /// km/h to m/s.
    pub const KMH_TO_MS: f64 = 0.278;
    pub const CM_TO_M: f64 = 100.0;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            measurements: Measurements::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl Workout for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn calories_kcal(&self) -> Result<f64> {
        let m = &self.measurements;
        let speed_ms = self.mean_speed_kmh()? * Self::KMH_TO_MS;
        let height_m = self.height_cm / Self::CM_TO_M;
        let speed_term = divide(speed_ms.powi(2), height_m, "height_cm")?;
        Ok((Self::WEIGHT_COEFF_1 * m.weight_kg
            + speed_term * Self::WEIGHT_COEFF_2 * m.weight_kg)
            * m.duration_hours
            * MINUTES_PER_HOUR)
    }
}
