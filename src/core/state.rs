use std::path::{Path, PathBuf};

use crate::core::aliases::AliasTable;
use crate::input::History;

/// Everything one session remembers. The current directory here is the only one
/// commands ever run in; the process-wide working directory is left alone.
#[derive(Debug, Clone)]
pub struct SessionState {
    current_dir: PathBuf,
    history: History,
    aliases: AliasTable,
}

impl SessionState {
    pub fn new(current_dir: PathBuf, aliases: AliasTable) -> Self {
        Self {
            current_dir,
            history: History::new(),
            aliases,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}
