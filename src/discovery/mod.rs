//! Finds installations of the configured editor on the host.
//!
//! Discovery never fails: missing directories, unreadable folders and paths
//! that do not look like the editor are skipped, since "not installed here"
//! is the common case.

mod candidates;

#[cfg(test)]
mod tests;

pub use candidates::{is_candidate, search_locations, SearchLocation};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::installation::Installation;
use crate::platform::{HostPlatform, KnownFolders};

/// Discovery for one editor integration on one platform.
#[derive(Debug, Clone)]
pub struct Discovery {
    config: Config,
    platform: HostPlatform,
    folders: KnownFolders,
}

impl Discovery {
    /// Discovery on the running host.
    pub fn new(config: Config) -> Self {
        let platform = HostPlatform::current();
        tracing::debug!("Searching for {} on {platform}", config.editor.name);
        Self::with_environment(config, platform, KnownFolders::detect())
    }

    /// Discovery against an explicit platform and folder layout.
    pub const fn with_environment(
        config: Config,
        platform: HostPlatform,
        folders: KnownFolders,
    ) -> Self {
        Self { config, platform, folders }
    }

    /// The configuration this discovery searches for.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Platform the search follows.
    pub const fn platform(&self) -> HostPlatform {
        self.platform
    }

    /// Every deduplicated candidate path, in search order, before validation.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let mut seen = HashSet::new();
        search_locations(
            self.platform,
            &self.config.editor,
            &self.config.search,
            &self.folders,
        )
        .into_iter()
        .flat_map(|location| location.expand())
        .filter(move |path| seen.insert(path.clone()))
    }

    /// Installations found on this host, yielded lazily in search order.
    pub fn installations(&self) -> impl Iterator<Item = Installation> + '_ {
        self.candidates().filter_map(move |path| self.validate(path))
    }

    /// Validate one caller-supplied path, e.g. a remembered editor location.
    ///
    /// `None` and empty paths are rejected without touching the filesystem.
    pub fn try_discover(&self, path: Option<&Path>) -> Option<Installation> {
        let path = path.filter(|p| !p.as_os_str().is_empty())?;
        self.validate(path.to_path_buf())
    }

    /// Default selection: the remembered `editor.path` if it still validates,
    /// otherwise the first installation found.
    pub fn resolve(&self) -> Option<Installation> {
        if let Some(remembered) = self.config.editor.path.as_deref() {
            if let Some(install) = self.try_discover(Some(Path::new(remembered))) {
                return Some(install);
            }
            tracing::warn!("Configured editor path {remembered} is not a valid installation, rescanning");
        }
        self.installations().next()
    }

    fn validate(&self, path: PathBuf) -> Option<Installation> {
        if !is_candidate(self.platform, &self.config.editor, &path) {
            tracing::debug!("Rejected candidate {}", path.display());
            return None;
        }
        tracing::info!("Found {} at {}", self.config.editor.name, path.display());
        Some(Installation::new(self.config.editor.name.clone(), path))
    }
}
