use log::{debug, error, info};
use stack_string::{format_sstr, StackString};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use workout_lib::{errors::WorkoutError as Error, workout_config::WorkoutConfig};
use workout_models::{
    training::TrainingTrait,
    workout_record::{read_package, WorkoutRecord},
};
use workout_reports::{
    workout_report_options::WorkoutReportOptions, workout_report_txt::generate_report,
};
use workout_utils::workout_types::WorkoutTypes;

/// A workout code together with its raw sensor values.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPackage {
    pub code: StackString,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<StackString>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Aliases such as `running` or `swm` resolve to their sensor code before
    /// the package is read.
    /// # Errors
    /// Return error if the code is unknown or the values don't fit the workout
    pub fn read(&self) -> Result<WorkoutRecord, Error> {
        let workout_type: WorkoutTypes = self.code.as_str().parse()?;
        read_package(workout_type.to_code(), &self.data)
    }
}

impl FromStr for WorkoutPackage {
    type Err = Error;

    /// Parse `CODE v1 v2 ...`, values separated by whitespace or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        let code = tokens
            .next()
            .ok_or(Error::StaticCustomError("Empty workout package"))?;
        let data = tokens
            .map(str::parse::<f64>)
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(Self::new(code, data))
    }
}

/// Sample sensor packages.
#[must_use]
pub fn default_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub processed: usize,
    pub failed: usize,
}

#[derive(Debug, Default, Clone)]
pub struct WorkoutCli {
    pub config: WorkoutConfig,
    pub options: WorkoutReportOptions,
}

impl WorkoutCli {
    #[must_use]
    pub fn new(config: WorkoutConfig, options: WorkoutReportOptions) -> Self {
        Self { config, options }
    }

    /// # Errors
    /// Return error if the package can't be read or the report can't be rendered
    pub fn process_package(&self, package: &WorkoutPackage) -> Result<StackString, Error> {
        let info = package.read()?.show_training_info();
        debug!("{} {info:?}", package.code);
        generate_report(&info, &self.options)
    }

    /// Write one report line per package, in order.  A package that fails is
    /// logged and counted, the remaining packages are still processed.
    /// # Errors
    /// Return error if writing to `out` fails
    pub fn process_packages(
        &self,
        packages: impl IntoIterator<Item = WorkoutPackage>,
        out: &mut impl Write,
    ) -> Result<ProcessSummary, Error> {
        let mut summary = ProcessSummary::default();
        for package in packages {
            let result = self.process_package(&package);
            Self::write_result(result, package.code.as_str(), out, &mut summary)?;
        }
        Ok(summary)
    }

    /// Like `process_packages`, reading one package per line.  Blank lines and
    /// lines starting with `#` are skipped.
    /// # Errors
    /// Return error if reading from `input` or writing to `out` fails
    pub fn process_lines(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
    ) -> Result<ProcessSummary, Error> {
        let mut summary = ProcessSummary::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let result = line
                .parse::<WorkoutPackage>()
                .and_then(|package| self.process_package(&package));
            let label = format_sstr!("line {}", idx + 1);
            Self::write_result(result, label.as_str(), out, &mut summary)?;
        }
        Ok(summary)
    }

    fn write_result(
        result: Result<StackString, Error>,
        label: &str,
        out: &mut impl Write,
        summary: &mut ProcessSummary,
    ) -> Result<(), Error> {
        match result {
            Ok(report) => {
                writeln!(out, "{report}")?;
                summary.processed += 1;
            }
            Err(e) => {
                error!("{label}: {e}");
                summary.failed += 1;
            }
        }
        Ok(())
    }

    pub fn log_summary(summary: &ProcessSummary) {
        info!(
            "processed {} packages, {} failed",
            summary.processed, summary.failed
        );
    }
}
