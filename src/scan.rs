//! Bundle discovery
//!
//! Walks the conventional install locations for `.app` bundles. A match is
//! never descended into, so helper bundles nested under `Contents/` are
//! reported only through their outermost parent.

use std::env;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::scan_debug_enabled;

/// Replaces the scanned roots when set (platform path-list syntax).
const ROOTS_ENV: &str = "NEWAPPS_ROOTS";

/// Conventional install locations: system-wide, system utilities, per-user.
pub(crate) fn install_roots() -> Vec<PathBuf> {
    if let Ok(raw) = env::var(ROOTS_ENV) {
        return env::split_paths(&raw).collect();
    }
    let mut roots = vec![
        PathBuf::from("/Applications"),
        PathBuf::from("/Applications/Utilities"),
    ];
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Applications"));
    }
    roots
}

/// Top-level `.app` bundles under `root`. A missing root yields nothing;
/// order is whatever the walk produced.
pub(crate) fn bundles_under(root: &Path) -> Vec<PathBuf> {
    let mut bundles = Vec::new();
    if !root.is_dir() {
        return bundles;
    }
    let mut walker = WalkDir::new(root).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if scan_debug_enabled() {
                    eprintln!("Skipping unreadable entry under {}: {}", root.display(), err);
                }
                continue;
            }
        };
        if entry.file_type().is_dir() && is_bundle(entry.path()) {
            bundles.push(entry.into_path());
            walker.skip_current_dir();
        }
    }
    bundles
}

/// A bundle is a directory whose name ends in `.app`.
fn is_bundle(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "app")
}
