//! Install records
//!
//! Couples a discovered bundle with its Spotlight date-added timestamp and,
//! when requested, the URL it was downloaded from.

use std::path::PathBuf;

use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::consts::UNKNOWN;
use crate::metadata::{self, MetadataSource};
use crate::scan;
use crate::utils::scan_debug_enabled;

/// One application bundle that passed the lookback filter.
#[derive(Debug, Clone)]
pub(crate) struct InstallRecord {
    /// When Spotlight recorded the bundle's arrival.
    pub(crate) added: DateTime<FixedOffset>,
    /// Absolute path of the bundle.
    pub(crate) path: PathBuf,
    /// Download origin, when one was asked for and could be recovered.
    pub(crate) source: Option<String>,
}

impl InstallRecord {
    /// Final path component, or a placeholder for paths with no name.
    pub(crate) fn display_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(UNKNOWN)
    }
}

/// Collects every bundle under `roots` whose date-added falls within the
/// last `days` days of `now`, newest first. Bundles without a readable
/// timestamp are dropped. Ties keep discovery order.
pub(crate) fn gather(
    roots: &[PathBuf],
    days: i64,
    want_sources: bool,
    meta: &dyn MetadataSource,
    now: DateTime<Utc>,
) -> Vec<InstallRecord> {
    // A span too large for the calendar keeps everything.
    let cutoff = Duration::try_days(days)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut records = Vec::new();
    for root in roots {
        for bundle in scan::bundles_under(root) {
            let Some(added) = metadata::date_added(meta, &bundle) else {
                if scan_debug_enabled() {
                    eprintln!("No date-added recorded for {}", bundle.display());
                }
                continue;
            };
            if added.with_timezone(&Utc) < cutoff {
                continue;
            }
            let source = if want_sources {
                metadata::source_url(meta, &bundle)
            } else {
                None
            };
            records.push(InstallRecord {
                added,
                path: bundle,
                source,
            });
        }
    }
    records.sort_by(|a, b| b.added.cmp(&a.added));
    records
}
