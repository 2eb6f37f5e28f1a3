use workout_lib::errors::WorkoutError as Error;
use workout_utils::{
    workout_types::WorkoutTypes,
    workout_util::{
        check_duration, convert_count, get_distance, METERS_PER_KM, MINUTES_PER_HOUR,
        STEP_LENGTH_M,
    },
};

use crate::training::TrainingTrait;

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    /// # Errors
    /// Return error if `duration` is zero
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, Error> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight,
        })
    }
}

impl TryFrom<&[f64]> for Running {
    type Error = Error;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        match data {
            [action, duration, weight] => {
                Self::new(convert_count("action", *action)?, *duration, *weight)
            }
            _ => Err(Error::ArityMismatch {
                code: WorkoutTypes::Running.to_code(),
                expected: WorkoutTypes::Running.n_parameters(),
                actual: data.len(),
            }),
        }
    }
}

impl TrainingTrait for Running {
    fn workout_type(&self) -> WorkoutTypes {
        WorkoutTypes::Running
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn get_distance(&self) -> f64 {
        get_distance(self.action, STEP_LENGTH_M)
    }

    fn get_spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.get_mean_speed() - CALORIES_SPEED_SHIFT) * self.weight
            / METERS_PER_KM
            * self.duration
            * MINUTES_PER_HOUR
    }
}
