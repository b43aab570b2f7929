use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, WorkoutError>;

#[derive(Debug, Clone, PartialEq, ThisError)]
#[non_exhaustive]
pub enum WorkoutError {
    #[error("unknown workout code: {0:?}")]
    UnknownWorkoutCode(String),

    #[error("{code} expects {expected} fields, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("division by zero: {divisor} is 0")]
    DivisionByZero { divisor: &'static str },

    #[error("{training_type} has no calorie formula")]
    UnsupportedOperation { training_type: &'static str },

    #[error("invalid value for {field}: {value} is not a whole non-negative count")]
    InvalidField { field: &'static str, value: f64 },

    #[error("malformed package {input:?}: {reason}")]
    MalformedPackage { input: String, reason: String },
}

impl WorkoutError {
    pub fn malformed<D: std::fmt::Display>(input: &str, reason: D) -> Self {
        WorkoutError::MalformedPackage {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
