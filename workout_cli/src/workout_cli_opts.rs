use anyhow::{format_err, Error};
use clap::{Parser, Subcommand};
use std::{
    fs::File,
    io::{stdin, stdout, BufReader, Write},
    path::PathBuf,
};

use workout_lib::workout_config::WorkoutConfig;
use workout_reports::workout_report_options::{ReportFormat, ReportLocale, WorkoutReportOptions};
use workout_utils::workout_types::WorkoutTypes;

use crate::workout_cli::{default_packages, ProcessSummary, WorkoutCli, WorkoutPackage};

#[derive(Parser, Debug, PartialEq)]
#[command(name = "workout-rust-cli", about = "Render training summaries from sensor packages")]
pub struct WorkoutCliOpts {
    /// Report language (en, ru)
    #[arg(short, long, global = true)]
    pub locale: Option<ReportLocale>,
    /// Output format (txt, json)
    #[arg(short, long, global = true)]
    pub format: Option<ReportFormat>,
    /// Config file, defaults to ${CONFIG_DIR}/workout_rust/config.env
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<WorkoutCommand>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum WorkoutCommand {
    /// Render the sample packages
    Demo,
    /// Render a single package, e.g. `report RUN 15000 1 75`
    Report {
        workout_type: WorkoutTypes,
        #[arg(required = true, allow_negative_numbers = true)]
        data: Vec<f64>,
    },
    /// Render one package per line of `file`, the configured packages file or stdin
    Batch {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl WorkoutCliOpts {
    /// # Errors
    /// Return error if config init fails, output can't be written or any
    /// package fails
    pub fn process_args() -> Result<(), Error> {
        let opts = Self::parse();
        let mut out = stdout().lock();
        opts.run(&mut out)
    }

    /// # Errors
    /// Return error if config init fails, output can't be written or any
    /// package fails
    pub fn run(self, out: &mut impl Write) -> Result<(), Error> {
        let config = WorkoutConfig::get_config(self.config.as_deref())?;
        let mut options = WorkoutReportOptions::from_config(&config)?;
        if let Some(locale) = self.locale {
            options.locale = locale;
        }
        if let Some(format) = self.format {
            options.format = format;
        }
        let cli = WorkoutCli::new(config, options);

        let summary = match self.command.unwrap_or(WorkoutCommand::Demo) {
            WorkoutCommand::Demo => cli.process_packages(default_packages(), out)?,
            WorkoutCommand::Report { workout_type, data } => {
                let package = WorkoutPackage::new(workout_type.to_code(), data);
                cli.process_packages([package], out)?
            }
            WorkoutCommand::Batch { file } => {
                match file.or_else(|| cli.config.packages_file.clone()) {
                    Some(fname) => {
                        let f = BufReader::new(File::open(&fname)?);
                        cli.process_lines(f, out)?
                    }
                    None => cli.process_lines(stdin().lock(), out)?,
                }
            }
        };
        out.flush()?;
        WorkoutCli::log_summary(&summary);
        check_summary(summary)
    }
}

fn check_summary(summary: ProcessSummary) -> Result<(), Error> {
    if summary.failed > 0 {
        Err(format_err!(
            "{} of {} packages failed",
            summary.failed,
            summary.failed + summary.processed
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Error;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use workout_reports::workout_report_options::{ReportFormat, ReportLocale};
    use workout_utils::workout_types::WorkoutTypes;

    use crate::workout_cli_opts::{WorkoutCliOpts, WorkoutCommand};

    #[test]
    fn test_parse_report_args() -> Result<(), Error> {
        let opts = WorkoutCliOpts::try_parse_from([
            "workout-rust-cli",
            "--locale",
            "ru",
            "report",
            "walking",
            "9000",
            "1",
            "75",
            "180",
        ])?;
        assert_eq!(opts.locale, Some(ReportLocale::Ru));
        assert_eq!(opts.format, None);
        assert_eq!(
            opts.command,
            Some(WorkoutCommand::Report {
                workout_type: WorkoutTypes::SportsWalking,
                data: vec![9000.0, 1.0, 75.0, 180.0],
            })
        );
        Ok(())
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let result = WorkoutCliOpts::try_parse_from(["workout-rust-cli", "report", "BIK", "1"]);
        assert!(result.is_err());
        let result = WorkoutCliOpts::try_parse_from(["workout-rust-cli", "report", "RUN"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_batch_args() -> Result<(), Error> {
        let opts = WorkoutCliOpts::try_parse_from([
            "workout-rust-cli",
            "batch",
            "--file",
            "packages.txt",
            "--format",
            "json",
        ])?;
        assert_eq!(opts.format, Some(ReportFormat::Json));
        assert_eq!(
            opts.command,
            Some(WorkoutCommand::Batch {
                file: Some("packages.txt".into())
            })
        );
        let opts = WorkoutCliOpts::try_parse_from(["workout-rust-cli"])?;
        assert_eq!(opts.command, None);
        Ok(())
    }

    #[test]
    fn test_run_batch_file() -> Result<(), Error> {
        let mut packages = NamedTempFile::new()?;
        writeln!(packages, "SWM 720 1 80 25 40")?;
        writeln!(packages, "RUN 15000 1 75")?;

        let opts = WorkoutCliOpts {
            locale: Some(ReportLocale::En),
            format: Some(ReportFormat::Txt),
            config: None,
            command: Some(WorkoutCommand::Batch {
                file: Some(packages.path().to_path_buf()),
            }),
        };
        let mut out = Vec::new();
        opts.run(&mut out)?;
        let output = String::from_utf8(out)?;
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Training type: Swimming;"));
        assert!(lines[1].ends_with("Calories burned: 699.750."));
        Ok(())
    }

    #[test]
    fn test_run_reports_failures() {
        let opts = WorkoutCliOpts {
            locale: Some(ReportLocale::En),
            format: Some(ReportFormat::Txt),
            config: None,
            command: Some(WorkoutCommand::Report {
                workout_type: WorkoutTypes::Running,
                data: vec![15000.0, 0.0, 75.0],
            }),
        };
        let mut out = Vec::new();
        let result = opts.run(&mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
