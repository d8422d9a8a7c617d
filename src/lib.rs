//! Locate an installed external code editor and open a workspace in it at a
//! given file, line and column.
//!
//! A host first finds installations with [`Discovery`], picks one, wraps it in
//! an [`ElectronEditor`] and calls [`ElectronEditor::open_project`], which
//! writes the workspace companion files (when enabled) before
//! [`EditorInstallation::open`]:
//!
//! ```no_run
//! use std::path::Path;
//! use editor_launch::{Config, Discovery, ElectronEditor, OpenRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let discovery = Discovery::new(config.clone());
//! if let Some(install) = discovery.resolve() {
//!     let editor = ElectronEditor::from_config(install, &config);
//!     let request = OpenRequest::new(
//!         Some(Path::new("/proj/Assets/Player.cs")),
//!         42,
//!         8,
//!         Path::new("/proj/Game.sln"),
//!     );
//!     editor.open_project(&request)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod installation;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod request;
pub mod workspace;

pub use config::{Config, Grammar};
pub use discovery::Discovery;
pub use installation::{EditorInstallation, Installation};
pub use launcher::ElectronEditor;
pub use platform::HostPlatform;
pub use request::OpenRequest;
