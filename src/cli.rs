use clap::{Parser, Subcommand};

fn get_version() -> &'static str {
    const BASE_VERSION: &str = env!("CARGO_PKG_VERSION");

    // If there's a git tag at HEAD, use just the tag (release build)
    if let Some(tag) = option_env!("GOVER_GIT_TAG") {
        return tag;
    }

    // Not on a tag - include commit hash and branch (dev build)
    let commit = option_env!("GOVER_GIT_COMMIT").unwrap_or("unknown");
    let branch = option_env!("GOVER_GIT_BRANCH").unwrap_or("unknown");

    // Return a static string by leaking the formatted string
    // This is safe because it only happens once at startup
    let version = format!("v{}-{} ({})", BASE_VERSION, commit, branch);
    Box::leak(version.into_boxed_str())
}

#[derive(Parser)]
#[command(name = "gover")]
#[command(about = "A CLI manager for side-by-side Go toolchain versions")]
#[command(version = get_version())]
pub struct Cli {
    /// Increase verbosity (use multiple times for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Point at the upstream Go release history
    Releases,

    /// Install a Go version as a version-specific binary (e.g. go1.21.5)
    #[command(
        after_help = "Examples:\n  gover install 1.21.5\n  gover install 1.19\n\nThe version is installed side by side; run 'gover set <version>' to make it the default."
    )]
    Install {
        /// The Go version to install (e.g. '1.21.5')
        version: String,
    },

    /// Install a Go version and set it as the default, in one step
    Get {
        /// The Go version to install and activate
        version: String,
    },

    /// List all installed Go versions
    List,

    /// Set the default Go version via the bin-directory symlink
    Set {
        /// The installed version to activate
        version: String,
    },

    /// Remove an installed Go version (binary and SDK tree)
    Remove {
        /// The version to remove
        version: String,
    },

    /// Show the current gover version
    Version,
}
