//! Turns an [`OpenRequest`] into a process launch for the current platform.

mod arguments;
mod runner;


pub use arguments::{build_start_info, grammar_arguments, StartInfo, BUNDLE_OPENER};
pub use runner::{augmented_path, DetachedRunner, ProcessRunner};

use anyhow::Result;
use std::path::Path;

use crate::config::{Config, Grammar};
use crate::installation::{
    EditorInstallation, Installation, Language, ProjectGenerator, Version,
};
use crate::platform::HostPlatform;
use crate::request::OpenRequest;
use crate::workspace;

/// An Electron-based editor (VS Code family) driven through its command line.
#[derive(Debug, Clone)]
pub struct ElectronEditor<R = DetachedRunner> {
    installation: Installation,
    grammar: Grammar,
    platform: HostPlatform,
    runner: R,
    workspace_files: bool,
}

impl ElectronEditor<DetachedRunner> {
    /// Editor on the running host, spawning real processes.
    pub const fn new(installation: Installation, grammar: Grammar) -> Self {
        Self::with_runner(installation, grammar, HostPlatform::current(), DetachedRunner)
    }

    /// Editor on the running host with grammar and workspace-file policy taken
    /// from `config`.
    pub const fn from_config(installation: Installation, config: &Config) -> Self {
        Self::new(installation, config.editor.grammar)
            .with_workspace_files(config.workspace.create_files)
    }
}

impl<R: ProcessRunner> ElectronEditor<R> {
    /// Editor with an explicit platform and process-start primitive.
    pub const fn with_runner(
        installation: Installation,
        grammar: Grammar,
        platform: HostPlatform,
        runner: R,
    ) -> Self {
        Self {
            installation,
            grammar,
            platform,
            runner,
            workspace_files: true,
        }
    }

    /// Whether [`ElectronEditor::open_project`] writes companion files first.
    #[must_use]
    pub const fn with_workspace_files(mut self, enabled: bool) -> Self {
        self.workspace_files = enabled;
        self
    }

    /// Open a location the way a host does on project open: companion files
    /// are written first when enabled, then the editor is launched.
    pub fn open_project(&self, request: &OpenRequest) -> Result<bool> {
        if self.workspace_files {
            self.create_workspace_files(request.workspace())?;
        }
        self.open(request)
    }

    /// The launch `open` would perform for `request`.
    pub fn start_info(&self, request: &OpenRequest) -> StartInfo {
        build_start_info(self.platform, self.grammar, self.installation.path(), request)
    }
}

impl<R: ProcessRunner> EditorInstallation for ElectronEditor<R> {
    fn describe(&self) -> &Installation {
        &self.installation
    }

    fn open(&self, request: &OpenRequest) -> Result<bool> {
        check_quotable(request.workspace())?;
        if let Some(file) = request.file() {
            check_quotable(file)?;
        }
        check_quotable(self.installation.path())?;
        let info = self.start_info(request);
        tracing::info!(
            "Opening {} in {} ({}:{})",
            request.workspace().display(),
            self.installation.name(),
            request.file().map_or_else(String::new, |f| f.display().to_string()),
            request.line()
        );
        self.runner.start(&info)?;
        Ok(true)
    }

    fn generator_for(&self, language: Language) -> Option<ProjectGenerator> {
        match language {
            Language::CSharp => Some(ProjectGenerator::SdkStyle),
        }
    }

    fn supports_analyzers(&self) -> bool {
        true
    }

    fn latest_language_version(&self) -> Version {
        Version::new(11, 0, 0)
    }

    fn create_workspace_files(&self, project_dir: &Path) -> Result<()> {
        workspace::create_workspace_files(project_dir).map(|_| ())
    }
}

/// Arguments are wrapped in double quotes with no escaping, so a path holding
/// a `"` would be split or merged on the way to the editor.
fn check_quotable(path: &Path) -> Result<()> {
    if path.to_string_lossy().contains('"') {
        anyhow::bail!("Cannot pass {} to the editor: path contains '\"'", path.display());
    }
    Ok(())
}
