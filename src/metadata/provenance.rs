//! Download provenance lookup
//!
//! Where a bundle came from, per the metadata the OS stamps on downloads:
//! `com.apple.metadata:kMDItemWhereFroms` holds a plist of candidate URLs,
//! and `com.apple.quarantine` holds a semicolon-delimited record whose last
//! field is the source URL when the downloading agent recorded one. Missing
//! attributes, failing tools, and undecodable payloads all mean "no source".

use serde::Deserialize;
use std::path::Path;

use super::MetadataSource;
use crate::utils::scan_debug_enabled;

pub(crate) const WHERE_FROMS_ATTR: &str = "com.apple.metadata:kMDItemWhereFroms";
pub(crate) const QUARANTINE_ATTR: &str = "com.apple.quarantine";

/// Quarantine records carry `flags;timestamp;agent;url` once complete.
const QUARANTINE_MIN_FIELDS: usize = 4;

/// The where-froms plist is a list of strings for browser downloads but a
/// bare string for some older writers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WhereFroms {
    Many(Vec<String>),
    One(String),
}

impl WhereFroms {
    fn into_candidates(self) -> Vec<String> {
        match self {
            WhereFroms::Many(urls) => urls,
            WhereFroms::One(url) => vec![url],
        }
    }
}

/// Resolve the download source URL for a bundle: where-froms first, then the
/// quarantine record.
pub(crate) fn source_url(meta: &dyn MetadataSource, path: &Path) -> Option<String> {
    where_froms_url(meta, path).or_else(|| quarantine_url(meta, path))
}

fn where_froms_url(meta: &dyn MetadataSource, path: &Path) -> Option<String> {
    let payload = meta.extended_attribute(WHERE_FROMS_ATTR, path)?;
    let json = meta.plist_to_json(&payload)?;
    let decoded: WhereFroms = match serde_json::from_str(&json) {
        Ok(decoded) => decoded,
        Err(err) => {
            if scan_debug_enabled() {
                eprintln!("Undecodable where-froms for {}: {}", path.display(), err);
            }
            return None;
        }
    };
    decoded
        .into_candidates()
        .into_iter()
        .find(|candidate| is_http_url(candidate))
}

fn quarantine_url(meta: &dyn MetadataSource, path: &Path) -> Option<String> {
    let payload = meta.extended_attribute(QUARANTINE_ATTR, path)?;
    let record = String::from_utf8(payload).ok()?;
    let fields: Vec<&str> = record.trim().split(';').collect();
    if fields.len() < QUARANTINE_MIN_FIELDS {
        return None;
    }
    let last = fields.last()?.trim();
    if is_http_url(last) {
        Some(last.to_string())
    } else {
        None
    }
}

/// Absolute HTTP(S) URL: scheme prefix plus a non-empty remainder.
fn is_http_url(value: &str) -> bool {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}
