use workout_utils::workout_types::WorkoutTypes;

/// Summary of a completed workout, numbers are kept unrounded until the
/// report is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoMessage {
    pub training_type: WorkoutTypes,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn training_type_label(&self) -> &'static str {
        self.training_type.to_label()
    }
}
