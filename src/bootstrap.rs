use crate::download::{download_file, extract_archive};
use crate::locations::{Locations, TOOLCHAIN_NAME};
use crate::platform::{archive_name, archive_url, get_system_info};
use crate::registry;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The toolchain binary that will drive an install: whatever `go` is on
/// PATH, a previously installed versioned binary, or a freshly downloaded
/// throwaway toolchain. Recomputed on every install, never persisted.
pub enum Bootstrap {
    /// Canonical `go` resolved from the search path.
    System(PathBuf),
    /// A `go<version>` binary from an earlier install.
    Installed { binary: PathBuf },
    /// A toolchain unpacked into a scoped temporary directory. The guard
    /// removes the whole tree when the bootstrap is dropped, on success
    /// and failure alike.
    Temporary { binary: PathBuf, _guard: TempDir },
}

impl Bootstrap {
    pub fn installer(&self) -> &Path {
        match self {
            Bootstrap::System(path) => path,
            Bootstrap::Installed { binary } => binary,
            Bootstrap::Temporary { binary, .. } => binary,
        }
    }
}

/// Pure selection order, separated from the I/O so it can be tested:
/// system PATH binary first, then the first enumerated installed version,
/// then a temporary download.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Choice {
    System(PathBuf),
    Installed(String),
    Temporary,
}

fn choose(system: Option<PathBuf>, installed: &[String]) -> Choice {
    if let Some(path) = system {
        return Choice::System(path);
    }
    if let Some(first) = installed.first() {
        return Choice::Installed(first.clone());
    }
    Choice::Temporary
}

/// Resolve which binary installs `version`. The fallback chain never
/// requires the user to have a toolchain pre-installed.
pub async fn resolve(version: &str, locations: &Locations) -> Result<Bootstrap> {
    // Installed versions only matter once nothing resolves on PATH. A
    // missing SDK directory counts as zero installed here, so a fresh
    // machine falls through to the temporary download instead of failing.
    let installed = if locations.sdk.is_dir() {
        registry::installed_versions(locations)?
    } else {
        Vec::new()
    };

    match choose(which::which(TOOLCHAIN_NAME).ok(), &installed) {
        Choice::System(path) => {
            tracing::debug!("Using system go at {}", path.display());
            Ok(Bootstrap::System(path))
        }
        Choice::Installed(fallback) => {
            tracing::warn!(
                "No default go version has been set. Using the existing go{} to install go{}.",
                fallback,
                version
            );
            Ok(Bootstrap::Installed {
                binary: locations.versioned_binary(&fallback),
            })
        }
        Choice::Temporary => acquire_temporary(version).await,
    }
}

/// Download and unpack a toolchain into a scoped temp dir and hand back
/// its `go` binary. The toolchain is used once to install the permanent
/// target version and is never registered as installed itself.
async fn acquire_temporary(version: &str) -> Result<Bootstrap> {
    tracing::warn!("No go toolchain found anywhere. Installing a temporary one.");

    let tmp = TempDir::new().context("Temporary bootstrap directory could not be created")?;
    let platform = get_system_info();

    let archive = tmp.path().join(archive_name(version, &platform));
    let url = archive_url(version, &platform);
    download_file(&url, &archive)
        .await
        .with_context(|| format!("go{} bootstrap archive could not be downloaded", version))?;

    extract_archive(&archive, tmp.path())?;

    // Release archives unpack to a single `go/` tree
    let binary = tmp.path().join(TOOLCHAIN_NAME).join("bin").join(TOOLCHAIN_NAME);
    if !binary.is_file() {
        return Err(anyhow!(
            "Extracted archive did not contain a go binary at {}",
            binary.display()
        ));
    }

    Ok(Bootstrap::Temporary {
        binary,
        _guard: tmp,
    })
}
