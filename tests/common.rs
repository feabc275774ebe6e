use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// Shared harness for the integration tests: every test gets a throwaway
// HOME/GOPATH so nothing touches the real toolchain directories.
// Some helpers are only used by a subset of the test binaries.
#[allow(dead_code)]
pub struct TestContext {
    pub _temp_dir: TempDir,
    pub home: PathBuf,
    pub bin_dir: PathBuf,
    pub sdk_dir: PathBuf,
    pub bin_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        let bin_dir = home.join("go").join("bin");
        let sdk_dir = home.join("sdk");
        let bin_path = PathBuf::from(env!("CARGO_BIN_EXE_gover"));

        Self {
            _temp_dir: temp_dir,
            home,
            bin_dir,
            sdk_dir,
            bin_path,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.bin_path);
        cmd.env("HOME", &self.home);
        cmd.env("GOPATH", self.home.join("go"));
        cmd
    }

    /// Drop a fake `go<version>` binary into the bin directory.
    pub fn install_binary(&self, version: &str) -> PathBuf {
        std::fs::create_dir_all(&self.bin_dir).expect("Failed to create bin dir");
        let path = self.bin_dir.join(format!("go{}", version));
        std::fs::write(&path, "#!/bin/sh\n").expect("Failed to write fake binary");
        path
    }

    /// Create a fake `go<version>` SDK tree in the sdk directory.
    pub fn install_sdk_tree(&self, version: &str) -> PathBuf {
        let tree = self.sdk_dir.join(format!("go{}", version));
        std::fs::create_dir_all(tree.join("bin")).expect("Failed to create sdk tree");
        tree
    }
}

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }
}

#[allow(dead_code)]
impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        if !self.status.success() {
            panic!(
                "Command failed with status {:?}\nstdout: {}\nstderr: {}",
                self.status.code(),
                self.stdout,
                self.stderr
            );
        }
        self
    }

    pub fn assert_failure(&self) -> &Self {
        if self.status.success() {
            panic!(
                "Command unexpectedly succeeded\nstdout: {}\nstderr: {}",
                self.stdout, self.stderr
            );
        }
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Stdout did not contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Stderr did not contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
