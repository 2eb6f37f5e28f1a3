use log::debug;
use serde::Deserialize;
use stack_string::StackString;
use std::{
    ops::Deref,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::errors::WorkoutError as Error;

/// `WorkoutConfig` holds configuration information which can be set either
/// through environment variables or the config.env file, see the dotenvy crate
/// for more information about the config file format.  Every variable carries
/// the `WORKOUT_` prefix, e.g. `WORKOUT_REPORT_LOCALE=ru`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct WorkoutConfigInner {
    #[serde(default = "default_report_locale")]
    pub report_locale: StackString,
    #[serde(default = "default_report_format")]
    pub report_format: StackString,
    pub packages_file: Option<PathBuf>,
}

fn default_report_locale() -> StackString {
    "en".into()
}

fn default_report_format() -> StackString {
    "txt".into()
}

impl Default for WorkoutConfigInner {
    fn default() -> Self {
        Self {
            report_locale: default_report_locale(),
            report_format: default_report_format(),
            packages_file: None,
        }
    }
}

impl WorkoutConfigInner {
    /// Deserialize the `WORKOUT_` prefixed entries of `vars`, anything else is
    /// ignored.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("WORKOUT_")
            .from_iter(vars)
            .map_err(Into::into)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutConfig(Arc<WorkoutConfigInner>);

impl WorkoutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_inner(inner: WorkoutConfigInner) -> Self {
        Self(Arc::new(inner))
    }

    /// Pull configuration from a file if it exists,
    /// first look for the file passed in explicitly,
    /// then try `${CONFIG_DIR}/workout_rust/config.env`,
    /// then a config.env file in the current directory,
    /// on top of the default behaviour of dotenvy.
    pub fn get_config(fname: Option<&Path>) -> Result<Self, Error> {
        let default_fname = dirs::config_dir()
            .map(|d| d.join("workout_rust").join("config.env"))
            .unwrap_or_else(|| PathBuf::from("config.env"));

        let env_file = match fname {
            Some(fname) if fname.exists() => fname,
            _ => default_fname.as_path(),
        };

        dotenvy::dotenv().ok();

        if env_file.exists() {
            debug!("loading config from {}", env_file.display());
            dotenvy::from_path(env_file).ok();
        } else if Path::new("config.env").exists() {
            dotenvy::from_filename("config.env").ok();
        }

        let conf = WorkoutConfigInner::from_vars(std::env::vars())?;
        Ok(Self(Arc::new(conf)))
    }
}

impl Deref for WorkoutConfig {
    type Target = WorkoutConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
