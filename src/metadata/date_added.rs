//! Spotlight "date added" lookup
//!
//! `mdls -raw` prints an offset-qualified stamp ("2025-01-15 09:30:00 +0000"),
//! the literal `(null)` when the index has no value, or nothing at all.
//! Anything that is not a parsable stamp excludes the bundle; it is never an
//! error.

use chrono::{DateTime, FixedOffset};
use std::path::Path;

use super::MetadataSource;
use crate::utils::scan_debug_enabled;

pub(crate) const DATE_ADDED_ATTR: &str = "kMDItemDateAdded";

/// `mdls -raw` date layout, UTC offset included
const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

const NULL_SENTINEL: &str = "(null)";

/// When the bundle was indexed as added, offset preserved as reported.
pub(crate) fn date_added(meta: &dyn MetadataSource, path: &Path) -> Option<DateTime<FixedOffset>> {
    let raw = meta.spotlight_attribute(DATE_ADDED_ATTR, path)?;
    let raw = raw.trim();
    if raw.is_empty() || raw == NULL_SENTINEL {
        return None;
    }
    match DateTime::parse_from_str(raw, DATE_ADDED_FORMAT) {
        Ok(added) => Some(added),
        Err(err) => {
            if scan_debug_enabled() {
                eprintln!(
                    "Unparsable date-added {:?} for {}: {}",
                    raw,
                    path.display(),
                    err
                );
            }
            None
        }
    }
}
