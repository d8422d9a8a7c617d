//! Installation descriptors and the capability interface hosts program against.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::request::OpenRequest;

/// A `major.minor.patch` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
    /// Patch component.
    pub patch: u32,
}

impl Version {
    /// Build a version from its components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version reported for installations whose real version is not probed.
pub const PLACEHOLDER_VERSION: Version = Version::new(1, 0, 0);

/// One discovered editor binary or application bundle.
///
/// Only discovery builds these, after checking the path exists. The path is not
/// re-checked later, so a descriptor goes stale if the editor is uninstalled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    name: String,
    path: PathBuf,
    version: Version,
    is_prerelease: bool,
}

impl Installation {
    pub(crate) fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
            version: PLACEHOLDER_VERSION,
            is_prerelease: false,
        }
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path to the executable or `.app` bundle.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Installed version, or [`PLACEHOLDER_VERSION`].
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Whether this is an insiders/preview build.
    pub const fn is_prerelease(&self) -> bool {
        self.is_prerelease
    }
}

/// Source language a host asks a project generator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C# projects.
    CSharp,
}

/// Flavour of project files the host build system should emit for an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectGenerator {
    /// SDK-style `.csproj` files, as expected by language-server based editors.
    SdkStyle,
    /// Legacy full-framework `.csproj` files.
    Legacy,
}

/// What the host can do with one installed editor.
pub trait EditorInstallation {
    /// The descriptor this editor was discovered as.
    fn describe(&self) -> &Installation;

    /// Launch the editor at the requested location without waiting on it.
    ///
    /// Returns `Ok(true)` once the process has been started. Whether the editor
    /// actually opened the file afterwards is not observed.
    fn open(&self, request: &OpenRequest) -> Result<bool>;

    /// Project generator to use for `language`, if the editor supports it.
    fn generator_for(&self, language: Language) -> Option<ProjectGenerator>;

    /// Whether Roslyn analyzers should be wired into generated projects.
    fn supports_analyzers(&self) -> bool {
        false
    }

    /// Newest language version the editor's tooling understands.
    fn latest_language_version(&self) -> Version;

    /// Analyzer assemblies shipped with the editor.
    fn analyzers(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Drop editor-specific configuration into `project_dir`. Never overwrites.
    fn create_workspace_files(&self, project_dir: &Path) -> Result<()>;
}
