#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

pub mod info_message;
pub mod running;
pub mod sports_walking;
pub mod swimming;
pub mod training;
pub mod workout_record;
