use workout_lib::errors::WorkoutError as Error;
use workout_utils::{
    workout_types::WorkoutTypes,
    workout_util::{
        check_duration, check_height, convert_count, get_distance, MINUTES_PER_HOUR,
        STEP_LENGTH_M,
    },
};

use crate::training::TrainingTrait;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    /// Height in cm
    pub height: f64,
}

impl SportsWalking {
    /// # Errors
    /// Return error if `duration` is zero or `height` is not positive
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self, Error> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight,
            height: check_height(height)?,
        })
    }
}

impl TryFrom<&[f64]> for SportsWalking {
    type Error = Error;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        match data {
            [action, duration, weight, height] => Self::new(
                convert_count("action", *action)?,
                *duration,
                *weight,
                *height,
            ),
            _ => Err(Error::ArityMismatch {
                code: WorkoutTypes::SportsWalking.to_code(),
                expected: WorkoutTypes::SportsWalking.n_parameters(),
                actual: data.len(),
            }),
        }
    }
}

impl TrainingTrait for SportsWalking {
    fn workout_type(&self) -> WorkoutTypes {
        WorkoutTypes::SportsWalking
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn get_distance(&self) -> f64 {
        get_distance(self.action, STEP_LENGTH_M)
    }

    fn get_spent_calories(&self) -> f64 {
        // speed^2 / height is floor divided, height is always positive
        let speed_height = self.get_mean_speed().powi(2).div_euclid(self.height);
        (CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MINUTES_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use workout_lib::errors::WorkoutError as Error;

    use crate::{sports_walking::SportsWalking, training::TrainingTrait};

    #[test]
    fn test_sports_walking() -> Result<(), Error> {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0)?;
        assert_abs_diff_eq!(walking.get_distance(), 5.85, epsilon = 1e-9);
        assert_abs_diff_eq!(walking.get_mean_speed(), 5.85, epsilon = 1e-9);
        assert_abs_diff_eq!(walking.get_spent_calories(), 157.5, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_sports_walking_floor_division() -> Result<(), Error> {
        let walking = SportsWalking::new(30_000, 1.5, 80.0, 180.0)?;
        let speed = walking.get_mean_speed();
        assert_abs_diff_eq!(speed, 13.0, epsilon = 1e-9);
        // 169 / 180 floors to 0
        assert_abs_diff_eq!(
            walking.get_spent_calories(),
            0.035 * 80.0 * 1.5 * 60.0,
            epsilon = 1e-9
        );

        // 380.25 / 180 floors to 2
        let walking = SportsWalking::new(30_000, 1.0, 80.0, 180.0)?;
        let expected = (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * 60.0;
        assert_abs_diff_eq!(walking.get_spent_calories(), expected, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_sports_walking_try_from() -> Result<(), Error> {
        let walking = SportsWalking::try_from([9000.0, 1.0, 75.0, 180.0].as_slice())?;
        assert_abs_diff_eq!(walking.height, 180.0);
        assert!(matches!(
            SportsWalking::try_from([9000.0, 1.0, 75.0].as_slice()),
            Err(Error::ArityMismatch {
                code: "WLK",
                expected: 4,
                actual: 3
            })
        ));
        Ok(())
    }

    #[test]
    fn test_sports_walking_rejects_zero_height() {
        assert!(matches!(
            SportsWalking::new(9000, 1.0, 75.0, 0.0),
            Err(Error::InvalidInput { field: "height", .. })
        ));
        assert!(matches!(
            SportsWalking::try_from([9000.0, 1.0, 75.0, -180.0].as_slice()),
            Err(Error::InvalidInput { field: "height", .. })
        ));
    }
}
