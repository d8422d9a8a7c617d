use anyhow::{Context, Result};
use std::ffi::OsString;
#[cfg(not(windows))]
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::StartInfo;

/// Starts an external process and returns without waiting for it.
pub trait ProcessRunner {
    /// Start `info.program`. Errors only when the OS refuses the spawn.
    fn start(&self, info: &StartInfo) -> Result<()>;
}

/// Spawns a detached child. Output is discarded unless `redirect` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedRunner;

impl ProcessRunner for DetachedRunner {
    fn start(&self, info: &StartInfo) -> Result<()> {
        let mut cmd = build_command(info)?;
        cmd.env("PATH", augmented_path()).stdin(Stdio::null());
        if !info.redirect {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        tracing::debug!("Spawning {} {}", info.program.display(), info.arguments);
        cmd.spawn()
            .with_context(|| format!("Failed to spawn {}", info.program.display()))?;
        Ok(())
    }
}

/// `PATH` with the usual user-installed binary directories appended when missing.
pub fn augmented_path() -> OsString {
    let current = std::env::var_os("PATH").unwrap_or_default();
    #[cfg(not(windows))]
    {
        let mut parts: Vec<PathBuf> = std::env::split_paths(&current).collect();
        for extra in ["/usr/local/bin", "/opt/homebrew/bin", "/snap/bin"] {
            let extra = PathBuf::from(extra);
            if !parts.contains(&extra) {
                parts.push(extra);
            }
        }
        std::env::join_paths(parts).unwrap_or(current)
    }
    #[cfg(windows)]
    current
}

// `shell` mode never goes through `sh -c` / `cmd /C`: a bare program name is
// resolved against the augmented PATH and the arguments reach it verbatim, so
// `$`, backticks and `%VAR%` in paths are never expanded.
#[cfg(windows)]
fn build_command(info: &StartInfo) -> Result<Command> {
    use std::os::windows::process::CommandExt;

    if info.program.as_os_str().is_empty() {
        anyhow::bail!("Empty command");
    }
    let mut cmd = Command::new(&info.program);
    cmd.raw_arg(&info.arguments);
    Ok(cmd)
}

#[cfg(not(windows))]
fn build_command(info: &StartInfo) -> Result<Command> {
    if info.program.as_os_str().is_empty() {
        anyhow::bail!("Empty command");
    }
    let mut cmd = Command::new(&info.program);
    cmd.args(split_arguments(&info.arguments));
    Ok(cmd)
}

/// Whitespace splitter that respects double-quoted strings. Quotes are
/// stripped, so `"a b":3` becomes the single argument `a b:3`.
///
/// There is no escape for a literal `"`; callers must not pass values that
/// contain one (see [`super::check_quotable`]).
#[cfg_attr(windows, allow(dead_code))]
pub fn split_arguments(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in s.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            ' ' | '\t' if !in_quotes => {
                if !current.is_empty() || quoted {
                    parts.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() || quoted {
        parts.push(current);
    }
    parts
}
