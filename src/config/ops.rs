use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Location of the config file: `~/.config/editor-launch/config.toml`
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("editor-launch").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "editor.name" => Ok(self.editor.name.clone()),
            "editor.binary" => Ok(self.editor.binary.clone()),
            "editor.grammar" => Ok(self.editor.grammar.to_string()),
            "editor.path" => Ok(self.editor.path.clone().unwrap_or_default()),
            "search.program_files" => Ok(self.search.program_files.to_string()),
            "search.user_applications" => Ok(self.search.user_applications.to_string()),
            "search.snap" => Ok(self.search.snap.to_string()),
            "search.linux_dirs" => Ok(self.search.linux_dirs.join(":")),
            "workspace.create_files" => Ok(self.workspace.create_files.to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor.name" => self.editor.name = value.to_string(),
            "editor.binary" => self.editor.binary = value.to_string(),
            "editor.grammar" => self.editor.grammar = value.parse()?,
            "editor.path" => {
                self.editor.path = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "search.program_files" => self.search.program_files = parse_bool(value)?,
            "search.user_applications" => self.search.user_applications = parse_bool(value)?,
            "search.snap" => self.search.snap = parse_bool(value)?,
            "search.linux_dirs" => {
                self.search.linux_dirs = value
                    .split(':')
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            "workspace.create_files" => self.workspace.create_files = parse_bool(value)?,
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value.parse::<bool>()
        .with_context(|| format!("Invalid boolean value: {value}"))
}
