use workout_lib::errors::WorkoutError as Error;

pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Meters covered per step
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance in km for `action` steps (or strokes) of `step_length` meters.
#[must_use]
pub fn get_distance(action: u64, step_length: f64) -> f64 {
    action as f64 * step_length / METERS_PER_KM
}

/// Average speed in km/h.
#[must_use]
pub fn get_mean_speed(distance: f64, duration: f64) -> f64 {
    distance / duration
}

/// Convert a raw sensor value into a count.
/// # Errors
/// Return `InvalidInput` if `value` is negative, fractional or not finite
pub fn convert_count(field: &'static str, value: f64) -> Result<u64, Error> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(Error::InvalidInput { field, value })
    }
}

/// # Errors
/// Return `ZeroDuration` when `duration` is zero
pub fn check_duration(duration: f64) -> Result<f64, Error> {
    if duration == 0.0 {
        Err(Error::ZeroDuration)
    } else {
        Ok(duration)
    }
}

/// # Errors
/// Return `InvalidInput` unless `height` is a positive number
pub fn check_height(height: f64) -> Result<f64, Error> {
    if height > 0.0 && height.is_finite() {
        Ok(height)
    } else {
        Err(Error::InvalidInput {
            field: "height",
            value: height,
        })
    }
}
