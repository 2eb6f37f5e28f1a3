use workout_lib::errors::WorkoutError as Error;
use workout_utils::{
    workout_types::WorkoutTypes,
    workout_util::{check_duration, convert_count, get_distance, METERS_PER_KM},
};

use crate::training::TrainingTrait;

/// Meters covered per stroke
pub const STROKE_LENGTH_M: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    /// Pool length in meters
    pub length_pool: f64,
    pub count_pool: u64,
}

impl Swimming {
    /// # Errors
    /// Return error if `duration` is zero
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> Result<Self, Error> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight,
            length_pool,
            count_pool,
        })
    }
}

impl TryFrom<&[f64]> for Swimming {
    type Error = Error;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        match data {
            [action, duration, weight, length_pool, count_pool] => Self::new(
                convert_count("action", *action)?,
                *duration,
                *weight,
                *length_pool,
                convert_count("count_pool", *count_pool)?,
            ),
            _ => Err(Error::ArityMismatch {
                code: WorkoutTypes::Swimming.to_code(),
                expected: WorkoutTypes::Swimming.n_parameters(),
                actual: data.len(),
            }),
        }
    }
}

impl TrainingTrait for Swimming {
    fn workout_type(&self) -> WorkoutTypes {
        WorkoutTypes::Swimming
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn get_distance(&self) -> f64 {
        get_distance(self.action, STROKE_LENGTH_M)
    }

    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / METERS_PER_KM / self.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + CALORIES_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.weight
    }
}
