use envy::Error as EnvyError;
use serde_json::Error as SerdeJsonError;
use stack_string::StackString;
use std::{fmt::Error as FmtError, num::ParseFloatError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown workout kind {0}")]
    UnknownWorkoutKind(StackString),
    #[error("Workout {code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid value {value} for {field}")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("Workout duration must be nonzero")]
    ZeroDuration,
    #[error("ParseFloatError {0}")]
    ParseFloatError(#[from] ParseFloatError),
    #[error("SerdeJsonError {0}")]
    SerdeJsonError(#[from] SerdeJsonError),
    #[error("EnvyError {0}")]
    EnvyError(#[from] EnvyError),
    #[error("io Error {0}")]
    IoError(#[from] std::io::Error),
    #[error("FmtError {0}")]
    FmtError(#[from] FmtError),
    #[error("{0}")]
    StaticCustomError(&'static str),
    #[error("{0}")]
    CustomError(StackString),
}
