/// Lookback window applied when neither the CLI nor the config file sets one
pub(crate) const DEFAULT_LOOKBACK_DAYS: i64 = 14;

/// Report file written beside the executable (overridable via `NEWAPPS_OUTPUT`)
pub(crate) const OUTPUT_FILE_NAME: &str = "latest_installs.txt";

/// Placeholder printed when source lookup is enabled but no URL resolved
pub(crate) const UNKNOWN: &str = "unknown";

/// Report timestamp layout: "2025-01-15 09:30:00 UTC"
pub(crate) const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";
