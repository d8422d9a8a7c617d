use std::path::{Path, PathBuf};

use crate::config::Grammar;
use crate::platform::HostPlatform;
use crate::request::OpenRequest;

/// Helper that launches macOS application bundles.
pub const BUNDLE_OPENER: &str = "open";

/// Everything the process-start primitive needs for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartInfo {
    /// Executable to start.
    pub program: PathBuf,
    /// Pre-formatted argument string, quoted for the target platform.
    pub arguments: String,
    /// Route the child's output to the host's own streams instead of discarding it.
    pub redirect: bool,
    /// `program` is a bare helper name looked up on `PATH` rather than a path
    /// to an installation. Arguments are still passed verbatim, never through a
    /// shell interpreter.
    pub shell: bool,
}

/// Argument string for `request` in `grammar`, before any platform wrapping.
pub fn grammar_arguments(grammar: Grammar, request: &OpenRequest) -> String {
    let workspace = request.workspace().display();
    match (grammar, request.file()) {
        (Grammar::Goto, Some(file)) => format!(
            "\"{workspace}\" -g \"{}\":{}:{}",
            file.display(),
            request.line(),
            request.column()
        ),
        (Grammar::LineColumn, Some(file)) => format!(
            "\"{}\" --line {} --column {}",
            file.display(),
            request.line(),
            request.column()
        ),
        (Grammar::Goto | Grammar::LineColumn, None) => format!("\"{workspace}\""),
    }
}

/// The full launch for `application` on `platform`.
///
/// Bundles on macOS go through [`BUNDLE_OPENER`] with
/// `-n "<application>" --args` in front of the editor's own arguments; every
/// other platform executes `application` directly.
pub fn build_start_info(
    platform: HostPlatform,
    grammar: Grammar,
    application: &Path,
    request: &OpenRequest,
) -> StartInfo {
    let arguments = grammar_arguments(grammar, request);
    match platform {
        HostPlatform::MacOs => StartInfo {
            program: PathBuf::from(BUNDLE_OPENER),
            arguments: format!("-n \"{}\" --args {arguments}", application.display()),
            redirect: false,
            shell: true,
        },
        HostPlatform::Windows | HostPlatform::Linux => StartInfo {
            program: application.to_path_buf(),
            arguments,
            redirect: false,
            shell: false,
        },
    }
}
