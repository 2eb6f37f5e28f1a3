use log::debug;
use serde::Serialize;
use stack_string::{format_sstr, StackString};

use workout_lib::errors::WorkoutError as Error;
use workout_models::info_message::InfoMessage;

use crate::workout_report_options::{ReportFormat, ReportLocale, WorkoutReportOptions};

#[derive(Serialize, Debug, PartialEq)]
struct InfoMessageEntry {
    training_type: &'static str,
    duration: StackString,
    distance: StackString,
    speed: StackString,
    calories: StackString,
}

impl From<&InfoMessage> for InfoMessageEntry {
    fn from(info: &InfoMessage) -> Self {
        Self {
            training_type: info.training_type_label(),
            duration: format_sstr!("{:.3}", info.duration),
            distance: format_sstr!("{:.3}", info.distance),
            speed: format_sstr!("{:.3}", info.speed),
            calories: format_sstr!("{:.3}", info.calories),
        }
    }
}

/// Render the fixed one line summary, every number with three fraction digits.
#[must_use]
pub fn render(info: &InfoMessage, locale: ReportLocale) -> StackString {
    let training_type = info.training_type_label();
    match locale {
        ReportLocale::En => format_sstr!(
            "Training type: {training_type}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: \
             {:.3} km/h; Calories burned: {:.3}.",
            info.duration,
            info.distance,
            info.speed,
            info.calories,
        ),
        ReportLocale::Ru => format_sstr!(
            "Тип тренировки: {training_type}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. \
             скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            info.duration,
            info.distance,
            info.speed,
            info.calories,
        ),
    }
}

/// # Errors
/// Return error if serialization fails
pub fn render_json(info: &InfoMessage) -> Result<StackString, Error> {
    let entry: InfoMessageEntry = info.into();
    let js = serde_json::to_string(&entry)?;
    Ok(js.into())
}

/// # Errors
/// Return error if serialization fails
pub fn generate_report(
    info: &InfoMessage,
    options: &WorkoutReportOptions,
) -> Result<StackString, Error> {
    debug!("{info:?} {options:?}");
    match options.format {
        ReportFormat::Txt => Ok(render(info, options.locale)),
        ReportFormat::Json => render_json(info),
    }
}
