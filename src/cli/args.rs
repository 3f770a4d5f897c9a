//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::Parser;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "newapps")]
#[command(about = "List recently installed macOS applications", version)]
pub(crate) struct Cli {
    /// Number of days to look back (default: 14)
    #[arg(short, long, value_name = "DAYS", allow_negative_numbers = true)]
    pub(crate) days: Option<i64>,

    /// Show where each application was downloaded from
    #[arg(short, long)]
    pub(crate) sources: bool,

    /// Timezone for date display (e.g., "Asia/Shanghai", "UTC", "America/New_York")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Enable debug output (show scan details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Only apply config values if CLI didn't explicitly set them
        // For boolean flags, config only applies if CLI is false (default)
        if !self.sources && config.sources {
            self.sources = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Options: only apply if CLI didn't set them
        if self.days.is_none() {
            self.days = config.days;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }
}
