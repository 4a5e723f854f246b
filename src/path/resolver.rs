use std::path::{Path, PathBuf};

use tracing::debug;

use super::expander::{normalize, PathExpander};
use crate::core::commands::CommandError;
use crate::core::state::SessionState;

/// Sentinel for the home directory.
pub const HOME_TOKEN: &str = "~";
/// Sentinel for the parent of the current directory.
pub const PARENT_TOKEN: &str = "-";

/// Where a navigation token points, before anything is checked on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Target(PathBuf),
    /// `-` was used at the filesystem root.
    AtRoot,
}

/// Outcome of a successful `resolve_and_enter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Moved(PathBuf),
    AtRoot,
}

#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    expander: PathExpander,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expander(expander: PathExpander) -> Self {
        Self { expander }
    }

    #[cfg(test)]
    fn expander(&self) -> &PathExpander {
        &self.expander
    }

    /// Turns `token` into a normalized absolute path relative to `cwd`.
    pub fn resolve(&self, token: &str, cwd: &Path) -> Result<Resolution, CommandError> {
        let token = strip_quotes(token.trim());

        let path = if token.is_empty() || token == HOME_TOKEN {
            self.expander.home_dir()?
        } else if token == PARENT_TOKEN {
            match cwd.parent() {
                Some(parent) => parent.to_path_buf(),
                None => return Ok(Resolution::AtRoot),
            }
        } else {
            let path = self.expander.expand(token)?;
            if path.is_absolute() {
                path
            } else {
                cwd.join(path)
            }
        };

        Ok(Resolution::Target(normalize(&path)))
    }

    /// Resolves `token` and makes it the session's current directory. On any
    /// failure the session is left exactly as it was.
    pub fn resolve_and_enter(
        &self,
        token: &str,
        state: &mut SessionState,
    ) -> Result<Navigation, CommandError> {
        let target = match self.resolve(token, state.current_dir())? {
            Resolution::Target(target) => target,
            Resolution::AtRoot => return Ok(Navigation::AtRoot),
        };

        if !target.is_dir() {
            return Err(CommandError::NotFound(target));
        }

        // Ask the OS where we really are, so symlinks resolve the way getcwd would.
        let entered = canonical(&target).map_err(|source| CommandError::Io {
            context: "Error changing directory".to_string(),
            source,
        })?;

        debug!(from = %state.current_dir().display(), to = %entered.display(), "cd");
        state.set_current_dir(entered.clone());
        Ok(Navigation::Moved(entered))
    }
}

/// Removes one pair of matching surrounding quotes.
pub fn strip_quotes(token: &str) -> &str {
    for quote in ['"', '\''] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return &token[1..token.len() - 1];
        }
    }
    token
}

#[cfg(not(windows))]
fn canonical(path: &Path) -> std::io::Result<PathBuf> {
    std::fs::canonicalize(path)
}

#[cfg(windows)]
fn canonical(path: &Path) -> std::io::Result<PathBuf> {
    let resolved = std::fs::canonicalize(path)?;
    // Drop the verbatim prefix so the prompt and `pwd` show C:\... like cmd does
    match resolved.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        Some(stripped) if !stripped.starts_with("UNC\\") => Ok(PathBuf::from(stripped)),
        _ => Ok(resolved),
    }
}
