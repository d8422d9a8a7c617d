//! Host operating-system detection and the well-known folders discovery searches.

use std::path::PathBuf;

/// Operating-system family the host editor runs on.
///
/// Resolved once with [`HostPlatform::current`]; everything downstream takes it
/// as a value so each branch can be exercised on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    /// Windows: executables under the per-user and per-machine program folders.
    Windows,
    /// macOS: `.app` bundles launched through `open`.
    MacOs,
    /// Linux and any other Unix: plain binaries in well-known `bin` directories.
    Linux,
}

impl HostPlatform {
    /// The family this binary was compiled for. Unknown targets fall back to
    /// the Linux conventions.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }
}

impl std::fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

/// Well-known directories discovery searches under.
///
/// Every field is optional: a folder the OS cannot report simply contributes no
/// candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownFolders {
    /// `%LOCALAPPDATA%` on Windows.
    pub local_app_data: Option<PathBuf>,
    /// `%ProgramFiles%` on Windows.
    pub program_files: Option<PathBuf>,
    /// `%ProgramFiles(x86)%` on Windows.
    pub program_files_x86: Option<PathBuf>,
    /// System-wide applications folder (`/Applications` on macOS).
    pub applications: Option<PathBuf>,
    /// The user's home directory.
    pub home: Option<PathBuf>,
}

impl KnownFolders {
    /// Resolve the folders from the running OS.
    pub fn detect() -> Self {
        Self {
            local_app_data: dirs::data_local_dir(),
            program_files: env_dir("ProgramFiles"),
            program_files_x86: env_dir("ProgramFiles(x86)"),
            applications: Some(PathBuf::from("/Applications")),
            home: dirs::home_dir(),
        }
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
