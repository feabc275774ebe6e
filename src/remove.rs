use crate::locations::{Locations, TOOLCHAIN_NAME};
use crate::registry;
use anyhow::{anyhow, Context, Result};
use std::fs;

/// Delete whichever of `version`'s two artifacts exist: the versioned
/// binary (single file) and the SDK tree (recursive). Either one being
/// absent already is fine; neither existing is a not-installed error.
///
/// The active symlink is deliberately left alone even when this leaves it
/// dangling; the post-removal advisory tells the user to re-run `set`.
pub fn remove(version: &str, locations: &Locations) -> Result<()> {
    let binary = locations.versioned_binary(version);
    let tree = locations.sdk_tree(version);

    if !registry::is_installed(version, locations) {
        return Err(anyhow!(
            "go version {} is not installed. Run `gover list` to see the installed versions",
            version
        ));
    }

    if binary.is_file() {
        fs::remove_file(&binary).with_context(|| {
            format!(
                "go version {} binary {} could not be removed",
                version,
                binary.display()
            )
        })?;
    }

    if tree.is_dir() {
        fs::remove_dir_all(&tree).with_context(|| {
            format!(
                "go version {} SDK tree {} could not be removed",
                version,
                tree.display()
            )
        })?;
    }

    advise_after_removal(locations);
    Ok(())
}

/// The removed version may have been the active one; nothing is
/// auto-repaired, so point the user at the fix.
fn advise_after_removal(locations: &Locations) {
    if which::which(TOOLCHAIN_NAME).is_ok() {
        return;
    }

    let remaining = if locations.sdk.is_dir() {
        registry::installed_versions(locations)
            .map(|versions| versions.len())
            .unwrap_or(0)
    } else {
        0
    };

    if remaining == 0 {
        tracing::warn!(
            "No go binary resolves on PATH and no versions remain installed. Run `gover get <version>` to install and set a new one."
        );
    } else {
        tracing::warn!(
            "No go binary resolves on PATH; the removed version may have been the default. Run `gover set <version>` to pick a new one."
        );
    }
}
