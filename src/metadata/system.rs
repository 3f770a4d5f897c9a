//! System utility invocations
//!
//! Real metadata access shells out to the macOS tools: `mdls` for the
//! Spotlight index, `xattr` for extended attributes, `plutil` to turn binary
//! plists into JSON. Every invocation is read-only; a missing tool, non-zero
//! exit, or garbled output is treated as attribute absence.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use super::MetadataSource;
use crate::utils::scan_debug_enabled;

pub(crate) struct SystemMetadata;

impl MetadataSource for SystemMetadata {
    fn spotlight_attribute(&self, attribute: &str, path: &Path) -> Option<String> {
        let output = match Command::new("mdls")
            .args(["-name", attribute, "-raw"])
            .arg(path)
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                if scan_debug_enabled() {
                    eprintln!("mdls failed to start: {err}");
                }
                return None;
            }
        };
        if !output.status.success() {
            if scan_debug_enabled() {
                eprintln!("mdls -name {} failed for {}", attribute, path.display());
            }
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }

    fn extended_attribute(&self, attribute: &str, path: &Path) -> Option<Vec<u8>> {
        let output = Command::new("xattr")
            .args(["-px", attribute])
            .arg(path)
            .output()
            .ok()?;
        // Unset attributes exit non-zero; that is the common case, not a fault.
        if !output.status.success() {
            return None;
        }
        let dump = String::from_utf8(output.stdout).ok()?;
        decode_hex_dump(&dump)
    }

    fn plist_to_json(&self, payload: &[u8]) -> Option<String> {
        let mut child = Command::new("plutil")
            .args(["-convert", "json", "-o", "-", "--", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .ok()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(payload).ok()?;
        }

        let output = child.wait_with_output().ok()?;
        if !output.status.success() {
            if scan_debug_enabled() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                eprintln!("plutil rejected payload: {}", stderr.trim());
            }
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }
}

/// `xattr -px` prints whitespace-separated hex byte pairs, wrapped in lines.
fn decode_hex_dump(dump: &str) -> Option<Vec<u8>> {
    dump.split_whitespace()
        .map(|pair| u8::from_str_radix(pair, 16).ok())
        .collect()
}
