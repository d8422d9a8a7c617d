//! The "open this location" request.

use std::path::{Path, PathBuf};

/// One "jump to location" action.
///
/// Line and column are clamped on construction, so a request can never carry a
/// line below 1 or a column below 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    file: Option<PathBuf>,
    line: u32,
    column: u32,
    workspace: PathBuf,
}

impl OpenRequest {
    /// Request for `file` at `line`/`column` inside the project whose
    /// solution (or project) file is `solution`. The workspace is the
    /// solution's parent directory.
    ///
    /// An empty `file` means "just open the workspace".
    pub fn new(file: Option<&Path>, line: i32, column: i32, solution: &Path) -> Self {
        let workspace = solution
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);
        Self::in_workspace(file, line, column, workspace)
    }

    /// Like [`OpenRequest::new`] but with the workspace directory given directly.
    pub fn in_workspace(file: Option<&Path>, line: i32, column: i32, workspace: PathBuf) -> Self {
        Self {
            file: file
                .filter(|f| !f.as_os_str().is_empty())
                .map(Path::to_path_buf),
            line: line.max(1).unsigned_abs(),
            column: column.max(0).unsigned_abs(),
            workspace,
        }
    }

    /// File to focus, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// 1-based line.
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 0-based column.
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Project root handed to the editor as its working context.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}
