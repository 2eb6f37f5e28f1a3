#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod workout_report_options;
pub mod workout_report_txt;
