use workout_utils::{workout_types::WorkoutTypes, workout_util::get_mean_speed};

use crate::info_message::InfoMessage;

/// Distance, speed and calorie formulas shared by every workout kind.
pub trait TrainingTrait {
    fn workout_type(&self) -> WorkoutTypes;

    /// Duration in hours
    fn duration(&self) -> f64;

    /// Distance in km
    fn get_distance(&self) -> f64;

    /// Average speed in km/h
    fn get_mean_speed(&self) -> f64 {
        get_mean_speed(self.get_distance(), self.duration())
    }

    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.workout_type(),
            duration: self.duration(),
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}
