use super::{MINUTES_PER_HOUR, METERS_PER_KM, Measurements, Workout};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub measurements: Measurements,
}

impl Running {
    pub const SPEED_COEFF: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            measurements: Measurements::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl Workout for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn calories_kcal(&self) -> Result<f64> {
        let m = &self.measurements;
        let speed = self.mean_speed_kmh()?;
        Ok(
            (Self::SPEED_COEFF * speed + Self::SPEED_SHIFT) * m.weight_kg / METERS_PER_KM
                * m.duration_hours
                * MINUTES_PER_HOUR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calories_follow_speed() {
        let run = Running::new(15_000, 1.0, 75.0);
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh().unwrap() - 9.75).abs() < 1e-9);
        assert!((run.calories_kcal().unwrap() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn standing_still_burns_only_the_shift() {
        let run = Running::new(0, 0.5, 80.0);
        let expected = Running::SPEED_SHIFT * 80.0 / 1000.0 * 0.5 * 60.0;
        assert!((run.calories_kcal().unwrap() - expected).abs() < 1e-9);
    }
}
