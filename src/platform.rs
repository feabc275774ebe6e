#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub os: String,
    pub arch: String,
}

/// Host OS/arch in Go's release nomenclature.
pub fn get_system_info() -> PlatformInfo {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    let normalized_os = match os {
        "macos" => "darwin".to_string(),
        _ => os.to_string(),
    };

    let normalized_arch = match arch {
        "x86_64" => "amd64".to_string(),
        "aarch64" => "arm64".to_string(),
        "x86" | "i686" => "386".to_string(),
        _ => arch.to_string(),
    };

    PlatformInfo {
        os: normalized_os,
        arch: normalized_arch,
    }
}

/// Release archive URL for a version on a given platform, e.g.
/// `https://go.dev/dl/go1.21.5.linux-amd64.tar.gz`.
pub fn archive_url(version: &str, platform: &PlatformInfo) -> String {
    format!(
        "https://go.dev/dl/go{}.{}-{}.{}",
        version,
        platform.os,
        platform.arch,
        archive_extension(platform)
    )
}

/// Archive filename for a version, used for the local download target.
pub fn archive_name(version: &str, platform: &PlatformInfo) -> String {
    format!("go{}.{}", version, archive_extension(platform))
}

fn archive_extension(platform: &PlatformInfo) -> &'static str {
    if platform.os == "windows" {
        "zip"
    } else {
        "tar.gz"
    }
}
