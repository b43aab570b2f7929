//! Sensor packages and the code-to-workout dispatcher.
//!
//! A package is what the tracker sends: a three letter workout code plus the
//! workout's fields in declaration order, e.g. `RUN:15000,1,75`.

use crate::error::{Result, WorkoutError};
use crate::training::{Running, SportsWalking, Swimming, Training};
use log::debug;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    pub fn training_type(self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "Swimming",
            WorkoutCode::Running => "Running",
            WorkoutCode::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names, in the order a package carries them.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
            WorkoutCode::Running => &["action_count", "duration_hours", "weight_kg"],
            WorkoutCode::SportsWalking => {
                &["action_count", "duration_hours", "weight_kg", "height_cm"]
            }
        }
    }

    pub fn arity(self) -> usize {
        self.field_names().len()
    }

    /// Build the workout for this code from positional fields.
    pub fn build(self, fields: &[f64]) -> Result<Training> {
        let training: Training = match self {
            WorkoutCode::Running => {
                let [action, duration, weight] = self.unpack::<3>(fields)?;
                Running::new(count("action_count", action)?, duration, weight).into()
            }
            WorkoutCode::SportsWalking => {
                let [action, duration, weight, height] = self.unpack::<4>(fields)?;
                SportsWalking::new(count("action_count", action)?, duration, weight, height).into()
            }
            WorkoutCode::Swimming => {
                let [action, duration, weight, length, laps] = self.unpack::<5>(fields)?;
                Swimming::new(
                    count("action_count", action)?,
                    duration,
                    weight,
                    length,
                    count("pool_laps", laps)?,
                )
                .into()
            }
        };

        debug!("built {} from {:?}", self.training_type(), fields);
        Ok(training)
    }

    fn unpack<const N: usize>(self, fields: &[f64]) -> Result<[f64; N]> {
        <[f64; N]>::try_from(fields).map_err(|_| WorkoutError::ArityMismatch {
            code: self.as_str(),
            expected: N,
            actual: fields.len(),
        })
    }
}

fn count(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        WorkoutCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutCode(s.to_string()))
    }
}

/// Construct the workout named by `code` from its positional fields.
pub fn create_workout(code: &str, fields: &[f64]) -> Result<Training> {
    code.parse::<WorkoutCode>()?.build(fields)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: WorkoutCode,
    pub fields: Vec<f64>,
}

impl Package {
    pub fn new(code: WorkoutCode, fields: Vec<f64>) -> Self {
        Self { code, fields }
    }

    pub fn read(&self) -> Result<Training> {
        self.code.build(&self.fields)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.fields.iter().map(|v| v.to_string()).collect();
        write!(f, "{}:{}", self.code, fields.join(","))
    }
}

impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        let (code, rest) = s
            .split_once(':')
            .ok_or_else(|| WorkoutError::malformed(s, "expected CODE:FIELDS"))?;
        let code = code.trim().parse::<WorkoutCode>()?;
        let fields = rest
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|e| WorkoutError::malformed(s, format!("{:?}: {}", v.trim(), e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Package { code, fields })
    }
}

/// The reference packages a tracker sends for one session of each discipline.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new(WorkoutCode::Swimming, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new(WorkoutCode::Running, vec![15000.0, 1.0, 75.0]),
        Package::new(WorkoutCode::SportsWalking, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
