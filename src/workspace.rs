//! Companion configuration dropped into opened projects.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

const VSCODE_DIR: &str = ".vscode";
const SETTINGS_FILENAME: &str = "settings.json";

/// Settings that hide engine metadata from the editor's explorer and map
/// serialized asset extensions to YAML.
pub fn workspace_settings() -> Value {
    json!({
        "files.exclude": {
            "**/*.meta": true,
            "**/*.unity": true,
            "**/*.prefab": true,
            "**/*.asset": true,
            "Library/": true,
            "ProjectSettings/": true,
            "Temp/": true
        },
        "files.associations": {
            "*.asset": "yaml",
            "*.meta": "yaml",
            "*.prefab": "yaml",
            "*.unity": "yaml"
        }
    })
}

/// Write `.vscode/settings.json` under `project_dir` unless it already exists.
///
/// Returns the path written, or `None` when an existing file was left alone.
pub fn create_workspace_files(project_dir: &Path) -> Result<Option<PathBuf>> {
    let dir = project_dir.join(VSCODE_DIR);
    let settings = dir.join(SETTINGS_FILENAME);
    if settings.exists() {
        tracing::debug!("Keeping existing {}", settings.display());
        return Ok(None);
    }

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let content = serde_json::to_string_pretty(&workspace_settings())
        .context("Failed to serialize workspace settings")?;
    std::fs::write(&settings, content)
        .with_context(|| format!("Failed to write {}", settings.display()))?;
    tracing::info!("Wrote {}", settings.display());
    Ok(Some(settings))
}
