use crate::bootstrap;
use crate::locations::Locations;
use anyhow::Result;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// A streamed subprocess has three outcomes; spawn failure and non-zero
/// exit are distinct error kinds so callers can tell "tool missing" from
/// "tool ran and failed".
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{command} could not be started: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("{command} exited with {status}")]
    NonZero { command: String, status: ExitStatus },
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("go{version} could not be installed. Please ensure it is a valid version.\n{source}")]
    FetchAndBuild { version: String, source: ExecError },
    #[error("go{version} was installed but its platform payload could not be downloaded.\n{source}")]
    PayloadDownload { version: String, source: ExecError },
}

/// Install `version` using whatever bootstrap toolchain resolves. Exactly
/// two subprocesses run, in order, with inherited stdio so the user sees
/// the underlying tool's own progress text:
///
/// 1. `<installer> install golang.org/dl/go<version>@latest`
/// 2. `<bin>/go<version> download`
///
/// On success the dl wrapper has placed `go<version>` in the bin directory
/// by its own convention; nothing is copied or relocated here.
pub async fn install(version: &str, locations: &Locations) -> Result<()> {
    let bootstrap = bootstrap::resolve(version, locations).await?;

    let module = format!("golang.org/dl/go{}@latest", version);
    tracing::info!("Installing go{} via {}", version, module);
    run_streaming(bootstrap.installer(), &["install", &module]).map_err(|source| {
        InstallError::FetchAndBuild {
            version: version.to_string(),
            source,
        }
    })?;

    let versioned = locations.versioned_binary(version);
    tracing::info!("Downloading the go{} platform payload", version);
    run_streaming(&versioned, &["download"]).map_err(|source| InstallError::PayloadDownload {
        version: version.to_string(),
        source,
    })?;

    Ok(())
}

fn run_streaming(program: &Path, args: &[&str]) -> Result<(), ExecError> {
    let command = format!("{} {}", program.display(), args.join(" "));
    tracing::debug!("Running: {}", command);

    // stdin/stdout/stderr are inherited; the subprocess talks to the user
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| ExecError::Spawn {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ExecError::NonZero { command, status })
    }
}
