use log::debug;

use workout_lib::errors::WorkoutError as Error;
use workout_utils::workout_types::WorkoutTypes;

use crate::{
    running::Running, sports_walking::SportsWalking, swimming::Swimming, training::TrainingTrait,
};

/// One workout built from a sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl WorkoutRecord {
    /// Build a record from one of the sensor codes `SWM`, `RUN` or `WLK`.
    /// # Errors
    /// Return `UnknownWorkoutKind` for any other code, or the construction
    /// error of the selected workout
    pub fn create(workout_code: &str, data: &[f64]) -> Result<Self, Error> {
        let workout_type = WorkoutTypes::from_code(workout_code)?;
        Self::from_workout_type(workout_type, data)
    }

    /// # Errors
    /// Return `ArityMismatch` if `data` doesn't hold exactly the positional
    /// fields of `workout_type`
    pub fn from_workout_type(workout_type: WorkoutTypes, data: &[f64]) -> Result<Self, Error> {
        debug!("{workout_type} {data:?}");
        let record = match workout_type {
            WorkoutTypes::Running => Self::Running(Running::try_from(data)?),
            WorkoutTypes::SportsWalking => Self::SportsWalking(SportsWalking::try_from(data)?),
            WorkoutTypes::Swimming => Self::Swimming(Swimming::try_from(data)?),
        };
        Ok(record)
    }

    fn as_training(&self) -> &dyn TrainingTrait {
        match self {
            Self::Running(x) => x,
            Self::SportsWalking(x) => x,
            Self::Swimming(x) => x,
        }
    }
}

impl TrainingTrait for WorkoutRecord {
    fn workout_type(&self) -> WorkoutTypes {
        self.as_training().workout_type()
    }

    fn duration(&self) -> f64 {
        self.as_training().duration()
    }

    fn get_distance(&self) -> f64 {
        self.as_training().get_distance()
    }

    fn get_mean_speed(&self) -> f64 {
        self.as_training().get_mean_speed()
    }

    fn get_spent_calories(&self) -> f64 {
        self.as_training().get_spent_calories()
    }
}

/// Read data from sensors.
/// # Errors
/// Return error if `workout_code` is unknown or `data` is malformed
pub fn read_package(workout_code: &str, data: &[f64]) -> Result<WorkoutRecord, Error> {
    WorkoutRecord::create(workout_code, data)
}
