use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

pub const TOOLCHAIN_NAME: &str = "go";
pub const FMT_TOOL_NAME: &str = "gofmt";

/// The two well-known directories everything else is keyed off: the bin
/// directory holding versioned binaries plus the active symlink(s), and the
/// SDK directory holding one unpacked toolchain tree per installed version.
///
/// Resolved once per invocation and passed by reference; no component reads
/// the environment after this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub bin: PathBuf,
    pub sdk: PathBuf,
}

impl Locations {
    /// Resolve the location pair from `$GOPATH` and `$HOME`, warning
    /// whenever a documented fallback kicks in.
    pub fn resolve() -> Result<Self> {
        let home = match non_empty_var("HOME") {
            Some(home) => PathBuf::from(home),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| anyhow!("$HOME is not set and no home directory could be determined"))?;
                tracing::warn!("$HOME not set. Using default value of {}", home.display());
                home
            }
        };

        let gopath = match non_empty_var("GOPATH") {
            Some(gopath) => PathBuf::from(gopath),
            None => {
                let gopath = home.join("go");
                tracing::warn!("$GOPATH not set. Using default value of {}", gopath.display());
                gopath
            }
        };

        let locations = Self {
            bin: gopath.join("bin"),
            sdk: home.join("sdk"),
        };
        tracing::debug!("Bin directory: {}", locations.bin.display());
        tracing::debug!("SDK directory: {}", locations.sdk.display());
        Ok(locations)
    }

    /// `<bin>/go<version>` - the version-specific binary the dl wrapper
    /// installs.
    pub fn versioned_binary(&self, version: &str) -> PathBuf {
        self.bin.join(format!("{}{}", TOOLCHAIN_NAME, version))
    }

    /// `<sdk>/go<version>` - the full unpacked toolchain tree.
    pub fn sdk_tree(&self, version: &str) -> PathBuf {
        self.sdk.join(format!("{}{}", TOOLCHAIN_NAME, version))
    }

    /// `<bin>/go` - the active-version symlink.
    pub fn default_link(&self) -> PathBuf {
        self.bin.join(TOOLCHAIN_NAME)
    }

    /// `<bin>/gofmt` - the companion formatter symlink.
    pub fn fmt_link(&self) -> PathBuf {
        self.bin.join(FMT_TOOL_NAME)
    }

    /// `<sdk>/go<version>/bin/gofmt` - the formatter a version's SDK tree
    /// ships, when it ships one.
    pub fn sdk_fmt_binary(&self, version: &str) -> PathBuf {
        self.sdk_tree(version).join("bin").join(FMT_TOOL_NAME)
    }

    #[cfg(test)]
    pub fn at(root: &std::path::Path) -> Self {
        Self {
            bin: root.join("bin"),
            sdk: root.join("sdk"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
