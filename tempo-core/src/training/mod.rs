//! Workout model.
//!
//! Every discipline shares the [`Workout`] interface: distance, mean speed,
//! calories and the report built from them. [`Measurements`] is the raw
//! sensor data common to all of them; on its own it has no calorie formula.
//! [`Training`] is the closed set of disciplines the dispatcher can build.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::{Result, WorkoutError};
use crate::package::WorkoutCode;
use crate::report::Report;

pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Length of one stride in meters.
pub const STEP_LENGTH_M: f64 = 0.65;

pub(crate) fn divide(numerator: f64, divisor: f64, name: &'static str) -> Result<f64> {
    if divisor == 0.0 {
        return Err(WorkoutError::DivisionByZero { divisor: name });
    }
    Ok(numerator / divisor)
}

pub trait Workout {
    /// Display name used in reports.
    fn training_type(&self) -> &'static str;

    fn measurements(&self) -> &Measurements;

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.measurements().action_count) * self.step_length_m() / METERS_PER_KM
    }

    fn mean_speed_kmh(&self) -> Result<f64> {
        divide(
            self.distance_km(),
            self.measurements().duration_hours,
            "duration_hours",
        )
    }

    fn calories_kcal(&self) -> Result<f64> {
        Err(WorkoutError::UnsupportedOperation {
            training_type: self.training_type(),
        })
    }

    /// Compute a fresh report from the current field values.
    fn build_report(&self) -> Result<Report> {
        Ok(Report {
            training_type: self.training_type().to_string(),
            duration_hours: self.measurements().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories_kcal: self.calories_kcal()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Strides or strokes.
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Measurements {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

impl Workout for Measurements {
    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn measurements(&self) -> &Measurements {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Training::Running(_) => WorkoutCode::Running,
            Training::SportsWalking(_) => WorkoutCode::SportsWalking,
            Training::Swimming(_) => WorkoutCode::Swimming,
        }
    }

    fn inner(&self) -> &dyn Workout {
        match self {
            Training::Running(w) => w,
            Training::SportsWalking(w) => w,
            Training::Swimming(w) => w,
        }
    }
}

// Every method is forwarded so the variants' overrides are the ones that run.
impl Workout for Training {
    fn training_type(&self) -> &'static str {
        self.inner().training_type()
    }

    fn measurements(&self) -> &Measurements {
        self.inner().measurements()
    }

    fn step_length_m(&self) -> f64 {
        self.inner().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> Result<f64> {
        self.inner().mean_speed_kmh()
    }

    fn calories_kcal(&self) -> Result<f64> {
        self.inner().calories_kcal()
    }

    fn build_report(&self) -> Result<Report> {
        self.inner().build_report()
    }
}

impl From<Running> for Training {
    fn from(w: Running) -> Self {
        Training::Running(w)
    }
}

impl From<SportsWalking> for Training {
    fn from(w: SportsWalking) -> Self {
        Training::SportsWalking(w)
    }
}

impl From<Swimming> for Training {
    fn from(w: Swimming) -> Self {
        Training::Swimming(w)
    }
}
