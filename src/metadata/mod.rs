//! Metadata lookups for application bundles
//!
//! Everything the OS knows about a bundle flows through the `MetadataSource`
//! trait so tests can substitute a fake for the real system utilities.

mod date_added;
mod provenance;
mod system;

use std::path::Path;

pub(crate) use date_added::date_added;
pub(crate) use provenance::source_url;
pub(crate) use system::SystemMetadata;

#[cfg(test)]
pub(crate) use date_added::DATE_ADDED_ATTR;
#[cfg(test)]
pub(crate) use provenance::WHERE_FROMS_ATTR;

/// Read-only access to per-file metadata maintained by the OS.
///
/// The production implementation shells out to `mdls`, `xattr`, and `plutil`;
/// every method treats tool failure the same as attribute absence.
pub(crate) trait MetadataSource {
    /// Value of a Spotlight attribute as printed by `mdls -raw`.
    fn spotlight_attribute(&self, attribute: &str, path: &Path) -> Option<String>;

    /// Raw bytes of an extended attribute.
    fn extended_attribute(&self, attribute: &str, path: &Path) -> Option<Vec<u8>>;

    /// JSON rendering of a property-list payload.
    fn plist_to_json(&self, payload: &[u8]) -> Option<String>;
}
