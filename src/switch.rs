use crate::locations::Locations;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Repoint the active-version symlink(s) at `version`'s binaries.
///
/// The `go` link always targets the versioned binary in the bin directory.
/// When the version's SDK tree ships a `gofmt`, the companion `gofmt` link
/// is switched identically; older trees without one are skipped.
pub fn set_default(version: &str, locations: &Locations) -> Result<()> {
    let target = locations.versioned_binary(version);
    if !target.is_file() {
        return Err(anyhow!(
            "go version {} is not installed. Run `gover install {}` and try again",
            version,
            version
        ));
    }

    relink(&locations.default_link(), &target)
        .with_context(|| format!("The default go version could not be set to {}", version))?;

    let fmt_target = locations.sdk_fmt_binary(version);
    if fmt_target.is_file() {
        relink(&locations.fmt_link(), &fmt_target)
            .with_context(|| format!("The default gofmt could not be set to {}", version))?;
    } else {
        tracing::debug!("go{} ships no gofmt; leaving the gofmt link alone", version);
    }

    Ok(())
}

/// Remove any existing entry at `link` (checked with a link-aware stat so a
/// dangling symlink still counts), then create a fresh symlink to `target`.
fn relink(link: &Path, target: &Path) -> Result<()> {
    if fs::symlink_metadata(link).is_ok() {
        fs::remove_file(link)
            .with_context(|| format!("Existing link {} could not be removed", link.display()))?;
    }

    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "Link {} -> {} could not be created",
            link.display(),
            target.display()
        )
    })?;
    #[cfg(not(unix))]
    fs::copy(target, link).with_context(|| {
        format!(
            "Copy {} -> {} could not be created",
            target.display(),
            link.display()
        )
    })?;

    Ok(())
}
