use std::path::{Path, PathBuf};

use crate::config::{EditorConfig, SearchConfig};
use crate::platform::{HostPlatform, KnownFolders};

const SNAP_BIN: &str = "/snap/bin";

/// Where to look for one candidate installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLocation {
    /// A single fully-formed path.
    File(PathBuf),
    /// Every entry of `dir` named `<prefix>*.app` (prefix is case-sensitive).
    Bundles {
        /// Directory holding application bundles.
        dir: PathBuf,
        /// Required start of the bundle name.
        prefix: String,
    },
}

/// The locations to search on `platform`, in search order.
///
/// Pure: nothing here touches the filesystem.
pub fn search_locations(
    platform: HostPlatform,
    editor: &EditorConfig,
    search: &SearchConfig,
    folders: &KnownFolders,
) -> Vec<SearchLocation> {
    match platform {
        HostPlatform::Windows => {
            let exe = format!("{}.exe", editor.name);
            let mut roots: Vec<PathBuf> = Vec::new();
            if let Some(local) = &folders.local_app_data {
                roots.push(local.join("Programs"));
                roots.push(local.clone());
            }
            if search.program_files {
                roots.extend(folders.program_files.iter().cloned());
                roots.extend(folders.program_files_x86.iter().cloned());
            }
            roots
                .into_iter()
                .map(|root| SearchLocation::File(root.join(&editor.name).join(&exe)))
                .collect()
        }
        HostPlatform::MacOs => {
            let mut dirs: Vec<PathBuf> = folders.applications.iter().cloned().collect();
            if search.user_applications {
                dirs.extend(folders.home.iter().map(|h| h.join("Applications")));
            }
            dirs.into_iter()
                .map(|dir| SearchLocation::Bundles {
                    dir,
                    prefix: editor.name.clone(),
                })
                .collect()
        }
        HostPlatform::Linux => {
            let mut dirs: Vec<&str> = search.linux_dirs.iter().map(String::as_str).collect();
            if search.snap {
                dirs.push(SNAP_BIN);
            }
            dirs.into_iter()
                .map(|dir| SearchLocation::File(Path::new(dir).join(&editor.binary)))
                .collect()
        }
    }
}

impl SearchLocation {
    /// Concrete candidate paths for this location.
    ///
    /// A bundle directory that is missing or unreadable yields nothing.
    pub fn expand(&self) -> Vec<PathBuf> {
        match self {
            Self::File(path) => vec![path.clone()],
            Self::Bundles { dir, prefix } => {
                let Ok(entries) = std::fs::read_dir(dir) else {
                    tracing::trace!("Skipping unreadable {}", dir.display());
                    return Vec::new();
                };
                let mut found: Vec<PathBuf> = entries
                    .filter_map(Result::ok)
                    .filter(|entry| {
                        let name = entry.file_name();
                        let name = name.to_string_lossy();
                        name.starts_with(prefix.as_str()) && name.ends_with(".app")
                    })
                    .map(|entry| entry.path())
                    .collect();
                found.sort();
                found
            }
        }
    }
}

/// Whether `path` exists in the form `platform` expects and is named after the
/// product: `*<name>*.exe` files on Windows, `*<name>*.app` directories on
/// macOS, files ending in the binary name on Linux. Names compare
/// case-insensitively and only the final path component is inspected.
pub fn is_candidate(platform: HostPlatform, editor: &EditorConfig, path: &Path) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy().to_lowercase();

    match platform {
        HostPlatform::Windows => {
            path.is_file()
                && file_name.ends_with(".exe")
                && file_name.contains(&editor.name.to_lowercase())
        }
        HostPlatform::MacOs => {
            path.is_dir()
                && file_name.ends_with(".app")
                && file_name.contains(&editor.name.to_lowercase())
        }
        HostPlatform::Linux => {
            path.is_file() && file_name.ends_with(&editor.binary.to_lowercase())
        }
    }
}
