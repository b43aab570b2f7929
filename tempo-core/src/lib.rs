pub mod error;
pub mod logging;
pub mod package;
pub mod report;
pub mod training;

pub use error::{Result, WorkoutError};
pub use package::{Package, WorkoutCode, create_workout, sample_packages};
pub use report::Report;
pub use training::{Measurements, Running, SportsWalking, Swimming, Training, Workout};
