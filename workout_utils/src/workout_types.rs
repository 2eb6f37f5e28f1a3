use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use stack_string::StackString;
use std::{collections::HashMap, fmt, str::FromStr};

use workout_lib::errors::WorkoutError as Error;

static WORKOUT_TYPE_MAP: Lazy<HashMap<&'static str, WorkoutTypes>> =
    Lazy::new(init_workout_type_map);

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "StackString", try_from = "StackString")]
pub enum WorkoutTypes {
    Running,
    SportsWalking,
    Swimming,
}

impl fmt::Display for WorkoutTypes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_code())
    }
}

impl From<WorkoutTypes> for StackString {
    fn from(item: WorkoutTypes) -> StackString {
        StackString::from_display(item)
    }
}

impl WorkoutTypes {
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Swimming, Self::Running, Self::SportsWalking]
    }

    /// Sensor package code
    #[must_use]
    pub fn to_code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Training type shown in reports
    #[must_use]
    pub fn to_label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Positional fields of a sensor package, in the order they arrive.
    #[must_use]
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    #[must_use]
    pub fn n_parameters(self) -> usize {
        self.parameter_names().len()
    }

    /// Exact match on the three sensor codes.
    /// # Errors
    /// Return `UnknownWorkoutKind` if `code` is not `SWM`, `RUN` or `WLK`
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            _ => Err(Error::UnknownWorkoutKind(code.into())),
        }
    }
}

impl FromStr for WorkoutTypes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match WORKOUT_TYPE_MAP.get(s.to_lowercase().as_str()) {
            Some(workout) => Ok(*workout),
            None => Err(Error::UnknownWorkoutKind(s.into())),
        }
    }
}

impl TryFrom<&str> for WorkoutTypes {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl TryFrom<StackString> for WorkoutTypes {
    type Error = Error;
    fn try_from(s: StackString) -> Result<Self, Self::Error> {
        Self::from_str(s.as_str())
    }
}

fn init_workout_type_map() -> HashMap<&'static str, WorkoutTypes> {
    let mut m: HashMap<_, _> = [
        ("run", WorkoutTypes::Running),
        ("running", WorkoutTypes::Running),
        ("wlk", WorkoutTypes::SportsWalking),
        ("walk", WorkoutTypes::SportsWalking),
        ("walking", WorkoutTypes::SportsWalking),
        ("sportswalking", WorkoutTypes::SportsWalking),
        ("sports_walking", WorkoutTypes::SportsWalking),
        ("swm", WorkoutTypes::Swimming),
        ("swim", WorkoutTypes::Swimming),
        ("swimming", WorkoutTypes::Swimming),
    ]
    .iter()
    .map(|(k, v)| (*k, *v))
    .collect();
    m.shrink_to_fit();
    m
}

#[must_use]
pub fn get_workout_type_map() -> &'static HashMap<&'static str, WorkoutTypes> {
    &WORKOUT_TYPE_MAP
}
