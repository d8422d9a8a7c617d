//! Editor-integration configuration, persisted as TOML.

mod ops;


use serde::{Deserialize, Serialize};

/// Product name of the editor this integration targets by default.
pub const DEFAULT_EDITOR_NAME: &str = "Antigravity";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which editor to look for and how to talk to it.
    pub editor: EditorConfig,
    /// Optional search locations.
    pub search: SearchConfig,
    /// Companion files emitted into opened projects.
    pub workspace: WorkspaceConfig,
}

/// The external editor being integrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Product name. Used as the Windows executable stem and the macOS bundle prefix.
    pub name: String,
    /// File name of the Linux binary, e.g. "antigravity"
    pub binary: String,
    /// Command-line convention the editor understands.
    pub grammar: Grammar,
    /// Remembered installation, re-validated instead of rescanning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Toggles for the optional search locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Windows: also look under the system-wide Program Files folders.
    pub program_files: bool,
    /// macOS: also look under `~/Applications`.
    pub user_applications: bool,
    /// Linux: also look in `/snap/bin`.
    pub snap: bool,
    /// Linux: conventional binary directories, searched in order.
    pub linux_dirs: Vec<String>,
}

/// Companion files emitted into opened projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Write `.vscode/settings.json` when a project is opened.
    pub create_files: bool,
}

/// Argument convention for "open workspace and jump to a location".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    /// `"<workspace>" -g "<file>":<line>:<column>`
    #[default]
    Goto,
    /// `"<file>" --line <line> --column <column>`
    LineColumn,
}

impl std::str::FromStr for Grammar {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "goto" | "a" => Ok(Self::Goto),
            "line-column" | "b" => Ok(Self::LineColumn),
            _ => anyhow::bail!("Unknown grammar: {s} (expected \"goto\" or \"line-column\")"),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Goto => write!(f, "goto"),
            Self::LineColumn => write!(f, "line-column"),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_EDITOR_NAME.to_string(),
            binary: DEFAULT_EDITOR_NAME.to_ascii_lowercase(),
            grammar: Grammar::default(),
            path: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            program_files: true,
            user_applications: true,
            snap: true,
            linux_dirs: ["/usr/bin", "/bin", "/usr/local/bin"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self { create_files: true }
    }
}
