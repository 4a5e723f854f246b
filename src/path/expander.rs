use std::path::{Component, Path, PathBuf};

use crate::core::commands::CommandError;
use crate::platform;

/// Expands `~` prefixes against the home directory.
#[derive(Debug, Clone, Default)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `home` instead of asking the OS.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn home_dir(&self) -> Result<PathBuf, CommandError> {
        self.home
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(CommandError::HomeDirNotFound)
    }

    /// `~` and `~/sub` become home-relative and `~name/sub` is relative to that
    /// account's home. Unknown accounts and anything else are returned as given.
    pub fn expand(&self, path: &str) -> Result<PathBuf, CommandError> {
        let Some(tilde_rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };

        let (user, rest) = match tilde_rest.find(std::path::is_separator) {
            Some(i) => tilde_rest.split_at(i),
            None => (tilde_rest, ""),
        };
        let mut home_path = if user.is_empty() {
            self.home_dir()?
        } else {
            match platform::user_home(user) {
                Some(home) => home,
                None => return Ok(PathBuf::from(path)),
            }
        };

        for part in rest.split(std::path::is_separator) {
            if !part.is_empty() {
                home_path.push(part);
            }
        }
        Ok(home_path)
    }
}

/// Lexically collapses `.` and `..` without touching the filesystem. `..` never
/// climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
