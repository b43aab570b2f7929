use super::{METERS_PER_KM, Measurements, Workout, divide};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub measurements: Measurements,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    /// Length of one stroke in meters.
    pub const STEP_LENGTH_M: f64 = 1.38;
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            measurements: Measurements::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }
}

impl Workout for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn step_length_m(&self) -> f64 {
        Self::STEP_LENGTH_M
    }

    /// Speed comes from pool geometry, not from strokes.
    fn mean_speed_kmh(&self) -> Result<f64> {
        let swum_km = self.pool_length_m * f64::from(self.pool_laps) / METERS_PER_KM;
        divide(swum_km, self.measurements.duration_hours, "duration_hours")
    }

    fn calories_kcal(&self) -> Result<f64> {
        let m = &self.measurements;
        Ok(
            (self.mean_speed_kmh()? + Self::SPEED_SHIFT)
                * Self::SPEED_MULTIPLIER
                * m.weight_kg
                * m.duration_hours,
        )
    }
}
