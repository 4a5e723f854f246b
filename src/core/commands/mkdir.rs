use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::{Command, CommandContext, CommandError, Flow, Invocation};
use crate::path::{normalize, strip_quotes, PathExpander};

/// Creates a directory and any missing parents, like `mkdir -p`.
#[derive(Debug, Clone, Default)]
pub struct MkdirCommand {
    expander: PathExpander,
}

impl MkdirCommand {
    pub fn new(expander: PathExpander) -> Self {
        Self { expander }
    }
}

/// The path operand, with any leading `-p` flags dropped. Parents are always
/// created, so the flag changes nothing.
fn path_operand(rest: &str) -> &str {
    let mut rest = rest.trim();
    loop {
        match rest.split_once(char::is_whitespace) {
            Some(("-p", tail)) => rest = tail.trim_start(),
            _ if rest == "-p" => return "",
            _ => return strip_quotes(rest),
        }
    }
}

impl Command for MkdirCommand {
    fn execute(
        &self,
        invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let operand = path_operand(&invocation.rest);
        if operand.is_empty() {
            return Err(CommandError::Usage("mkdir: missing path".to_string()));
        }

        let path = self.expander.expand(operand)?;
        let path: PathBuf = if path.is_absolute() {
            normalize(&path)
        } else {
            normalize(&ctx.state.current_dir().join(path))
        };

        fs::create_dir_all(&path).map_err(|source| CommandError::Io {
            context: "Error creating directory".to_string(),
            source,
        })?;
        debug!(path = %path.display(), "created directory");

        writeln!(ctx.out, "Directory created: {}", path.display())?;
        Ok(Flow::Continue)
    }

    fn takes_args(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::RecordingRunner;
    use super::*;
    use crate::core::aliases::AliasTable;
    use crate::core::state::SessionState;
    use crate::platform::Platform;
    use tempfile::TempDir;

    fn mkdir(
        cmd: &MkdirCommand,
        state: &mut SessionState,
        line: &str,
    ) -> (Result<Flow, CommandError>, String) {
        let mut runner = RecordingRunner::default();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = CommandContext {
            state,
            runner: &mut runner,
            out: &mut out,
            err: &mut err,
            platform: Platform::current(),
        };
        let result = cmd.execute(&Invocation::parse(line).unwrap(), &mut ctx);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_path_operand() {
        assert_eq!(path_operand("sub"), "sub");
        assert_eq!(path_operand("-p a/b"), "a/b");
        assert_eq!(path_operand("-p"), "");
        assert_eq!(path_operand("'my dir'"), "my dir");
        assert_eq!(path_operand(""), "");
    }

    #[test]
    fn test_mkdir_relative_to_session() {
        let temp = TempDir::new().unwrap();
        let work = fs::canonicalize(temp.path()).unwrap();
        let mut state = SessionState::new(work.clone(), AliasTable::empty());

        let (result, out) = mkdir(&MkdirCommand::default(), &mut state, "mkdir sub");
        assert!(result.is_ok());
        assert!(work.join("sub").is_dir());
        assert_eq!(out, format!("Directory created: {}\n", work.join("sub").display()));
        assert_eq!(state.current_dir(), work);
    }

    #[test]
    fn test_mkdir_creates_parents() {
        let temp = TempDir::new().unwrap();
        let work = fs::canonicalize(temp.path()).unwrap();
        let mut state = SessionState::new(work.clone(), AliasTable::empty());

        let (result, _) = mkdir(&MkdirCommand::default(), &mut state, "mkdir -p a/b/c");
        assert!(result.is_ok());
        assert!(work.join("a").join("b").join("c").is_dir());

        // already there is fine
        let (result, _) = mkdir(&MkdirCommand::default(), &mut state, "mkdir a/b");
        assert!(result.is_ok());
    }

    #[test]
    fn test_mkdir_under_home() {
        let temp = TempDir::new().unwrap();
        let home = fs::canonicalize(temp.path()).unwrap();
        let cmd = MkdirCommand::new(PathExpander::with_home(&home));
        let mut state = SessionState::new(PathBuf::from("/"), AliasTable::empty());

        let (result, _) = mkdir(&cmd, &mut state, "mkdir ~/projects");
        assert!(result.is_ok());
        assert!(home.join("projects").is_dir());
    }

    #[test]
    fn test_mkdir_missing_path() {
        let mut state = SessionState::new(PathBuf::from("/"), AliasTable::empty());

        let (result, out) = mkdir(&MkdirCommand::default(), &mut state, "mkdir");
        assert!(matches!(result, Err(CommandError::Usage(ref msg)) if msg == "mkdir: missing path"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_mkdir_over_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let work = fs::canonicalize(temp.path()).unwrap();
        fs::write(work.join("taken"), "x").unwrap();
        let mut state = SessionState::new(work, AliasTable::empty());

        let (result, _) = mkdir(&MkdirCommand::default(), &mut state, "mkdir taken");
        assert!(matches!(result, Err(CommandError::Io { .. })));
    }
}
