use anyhow::Error;
use approx::assert_abs_diff_eq;

use workout_lib::errors::WorkoutError;
use workout_models::{
    training::TrainingTrait,
    workout_record::{read_package, WorkoutRecord},
};
use workout_utils::{
    workout_types::WorkoutTypes,
    workout_util::{get_distance, STEP_LENGTH_M},
};

#[test]
fn test_running_package() -> Result<(), Error> {
    let info = read_package("RUN", &[15000.0, 1.0, 75.0])?.show_training_info();
    assert_eq!(info.training_type, WorkoutTypes::Running);
    assert_abs_diff_eq!(info.distance, 9.75, epsilon = 1e-9);
    assert_abs_diff_eq!(info.speed, 9.75, epsilon = 1e-9);
    assert_abs_diff_eq!(info.calories, 699.75, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_swimming_package() -> Result<(), Error> {
    let info = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?.show_training_info();
    assert_eq!(info.training_type, WorkoutTypes::Swimming);
    assert_abs_diff_eq!(info.speed, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(info.calories, 336.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_sports_walking_package() -> Result<(), Error> {
    let info = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])?.show_training_info();
    assert_eq!(info.training_type, WorkoutTypes::SportsWalking);
    assert_abs_diff_eq!(info.distance, 5.85, epsilon = 1e-9);
    assert_abs_diff_eq!(info.speed, 5.85, epsilon = 1e-9);
    assert_abs_diff_eq!(info.calories, 157.5, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_distance_uses_step_length() -> Result<(), Error> {
    for action in [0_u64, 1, 720, 9000, 15000] {
        let record = WorkoutRecord::create("RUN", &[action as f64, 2.0, 70.0])?;
        assert_abs_diff_eq!(
            record.get_distance(),
            action as f64 * STEP_LENGTH_M / 1000.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(record.get_distance(), get_distance(action, STEP_LENGTH_M));
    }
    let record = WorkoutRecord::create("SWM", &[1000.0, 1.0, 80.0, 25.0, 40.0])?;
    assert_abs_diff_eq!(record.get_distance(), 1.38, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_unknown_code_never_constructs() {
    for code in ["", "run", "BIKE", "SWIM", "WLKX"] {
        assert!(matches!(
            WorkoutRecord::create(code, &[1.0, 1.0, 1.0]),
            Err(WorkoutError::UnknownWorkoutKind(_))
        ));
    }
}

#[test]
fn test_zero_duration_fails_fast() {
    for (code, data) in [
        ("RUN", vec![15000.0, 0.0, 75.0]),
        ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        assert!(matches!(
            WorkoutRecord::create(code, &data),
            Err(WorkoutError::ZeroDuration)
        ));
    }
}

#[test]
fn test_walking_height_must_be_positive() {
    for height in [0.0, -180.0] {
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, height]),
            Err(WorkoutError::InvalidInput {
                field: "height",
                ..
            })
        ));
    }
}
