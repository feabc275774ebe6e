use crate::locations::{Locations, TOOLCHAIN_NAME};
use anyhow::{Context, Result};
use std::fs;

/// List installed versions by scanning the SDK directory's immediate
/// entries and stripping the `go` tag from each name (`go1.21.5` ->
/// `1.21.5`).
///
/// Order is directory-listing order, which is platform-defined and not
/// sorted. An empty directory yields an empty list; an unreadable or
/// missing directory is an error.
pub fn installed_versions(locations: &Locations) -> Result<Vec<String>> {
    let entries = fs::read_dir(&locations.sdk).with_context(|| {
        format!(
            "SDK directory {} could not be read",
            locations.sdk.display()
        )
    })?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!(
                "SDK directory {} could not be read",
                locations.sdk.display()
            )
        })?;
        let name = entry.file_name().to_string_lossy().to_string();
        versions.push(strip_version_tag(&name).to_string());
    }

    Ok(versions)
}

/// A version counts as installed when either artifact exists: the
/// versioned binary in the bin directory or the SDK tree.
pub fn is_installed(version: &str, locations: &Locations) -> bool {
    locations.versioned_binary(version).is_file() || locations.sdk_tree(version).is_dir()
}

fn strip_version_tag(name: &str) -> &str {
    name.strip_prefix(TOOLCHAIN_NAME).unwrap_or(name)
}
