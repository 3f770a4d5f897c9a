use std::env;
use std::path::PathBuf;

use chrono::Utc;

use crate::cli::Cli;
use crate::consts::{DEFAULT_LOOKBACK_DAYS, OUTPUT_FILE_NAME};
use crate::error::AppError;
use crate::metadata::SystemMetadata;
use crate::record;
use crate::report;
use crate::scan;
use crate::utils::{Timezone, set_scan_debug};

/// Redirects the report file when set; the default sits next to the executable.
const OUTPUT_ENV: &str = "NEWAPPS_OUTPUT";

/// Fully resolved run parameters, after CLI, config file, and environment
/// have been reconciled.
pub(crate) struct AppConfig {
    pub(crate) days: i64,
    pub(crate) sources: bool,
    pub(crate) timezone: Timezone,
    pub(crate) roots: Vec<PathBuf>,
    pub(crate) output_path: PathBuf,
}

impl AppConfig {
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let days = cli.days.unwrap_or(DEFAULT_LOOKBACK_DAYS);
        if days <= 0 {
            return Err(AppError::InvalidDays);
        }
        let timezone = Timezone::parse(cli.timezone.as_deref())?;
        Ok(AppConfig {
            days,
            sources: cli.sources,
            timezone,
            roots: scan::install_roots(),
            output_path: output_path()?,
        })
    }
}

fn output_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = env::var(OUTPUT_ENV) {
        return Ok(PathBuf::from(path));
    }
    let exe = env::current_exe().map_err(AppError::OutputPath)?;
    Ok(exe.with_file_name(OUTPUT_FILE_NAME))
}

/// Run one scan-and-report cycle: gather, print to stdout, mirror to file.
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    set_scan_debug(cli.debug);
    let config = AppConfig::from_cli(cli)?;

    let records = record::gather(
        &config.roots,
        config.days,
        config.sources,
        &SystemMetadata,
        Utc::now(),
    );
    let lines = report::build_report(&records, config.days, config.timezone, config.sources);

    // Stdout first, so the listing survives a failed file write.
    println!("{}", lines.join("\n"));
    report::write_report(&config.output_path, &lines).map_err(AppError::WriteReport)
}
