use tracing::debug;

use super::{Command, CommandContext, CommandError, Flow, Invocation};

pub const HELP_TEXT: &str = "\
Cross-Platform Shell
------------------------------

Basic Commands:
  cd [directory]   - Change directory (~ for home, - or .. for parent)
  ls / dir         - List directory contents
  pwd              - Show current directory
  mkdir [dir]      - Create directory (and any missing parents)
  clear / cls      - Clear screen
  history          - Show the last 10 commands
  help             - Show this help
  exit / quit      - Exit the shell

Aliases:
  ll   - ls -la / dir with details
  la   - ls -a  / show hidden files
  md   - mkdir
  rd   - rmdir
  ..   - cd ..
  ...  - cd ../..
  .... - cd ../../..

On Windows, rm, cp, mv and cat map to del, copy, move and type.
Anything else is run by the native shell, so pipes and wildcards work there.";

#[derive(Debug, Clone, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        _invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        // the session ends even when stdout is gone
        if let Err(e) = writeln!(ctx.out, "Goodbye!") {
            debug!(%e, "goodbye not written");
        }
        Ok(Flow::Exit)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(
        &self,
        _invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        ctx.out.flush()?;
        ctx.runner.clear_screen()?;
        Ok(Flow::Continue)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        _invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", ctx.state.current_dir().display())?;
        Ok(Flow::Continue)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(
        &self,
        _invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", HELP_TEXT)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::RecordingRunner;
    use super::*;
    use crate::core::aliases::AliasTable;
    use crate::core::state::SessionState;
    use crate::platform::Platform;
    use std::path::PathBuf;

    fn run(cmd: &dyn Command, line: &str) -> (Flow, String, RecordingRunner) {
        let mut state = SessionState::new(PathBuf::from("/work"), AliasTable::empty());
        let mut runner = RecordingRunner::default();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = CommandContext {
            state: &mut state,
            runner: &mut runner,
            out: &mut out,
            err: &mut err,
            platform: Platform::Linux,
        };

        let invocation = Invocation::parse(line).unwrap();
        let flow = cmd.execute(&invocation, &mut ctx).unwrap();
        (flow, String::from_utf8(out).unwrap(), runner)
    }

    #[test]
    fn test_exit_command() {
        let (flow, out, _) = run(&ExitCommand, "exit");
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, "Goodbye!\n");
    }

    #[test]
    fn test_pwd_prints_session_directory() {
        let (flow, out, _) = run(&PwdCommand, "pwd");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, format!("{}\n", PathBuf::from("/work").display()));
    }

    #[test]
    fn test_clear_uses_runner() {
        let (_, out, runner) = run(&ClearCommand, "cls");
        assert!(out.is_empty());
        assert_eq!(runner.clears, 1);
        assert!(runner.lines.is_empty());
    }

    #[test]
    fn test_help_lists_builtins() {
        let (_, out, _) = run(&HelpCommand, "help");
        for verb in ["cd", "pwd", "mkdir", "history", "exit"] {
            assert!(out.contains(verb));
        }
    }
}
