use std::io::Write;

use tracing::{debug, warn};

use super::{SessionStatus, Shell};
use crate::core::commands::{CommandContext, CommandError, Flow};
use crate::error::ShellError;
use crate::input::LineReader;
use crate::process::ProcessRunner;

impl<R, P, O, E> Shell<R, P, O, E>
where
    R: LineReader,
    P: ProcessRunner,
    O: Write,
    E: Write,
{
    /// Records a typed line in history and runs it. Command failures are reported
    /// here and never escape; the return value says whether the line succeeded.
    pub fn accept(&mut self, line: &str) -> Result<bool, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        self.state.history_mut().add(line);
        self.reader.remember(line);

        match self.execute_line(line) {
            Ok(Flow::Exit) => {
                self.status = SessionStatus::Terminated;
                Ok(true)
            }
            Ok(Flow::Continue) => Ok(true),
            Err(e) => {
                self.report(&e);
                Ok(false)
            }
        }
    }

    /// Expands aliases, then hands the line to a built-in or the native shell.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, CommandError> {
        let expanded = self.state.aliases().expand(line).into_owned();
        if expanded != line {
            debug!(line, expanded = %expanded, "alias");
        }

        let result = {
            let mut ctx = CommandContext {
                state: &mut self.state,
                runner: &mut self.runner,
                out: &mut self.out,
                err: &mut self.err,
                platform: self.platform,
            };
            self.executor.execute(&expanded, &mut ctx)
        };

        let flow = result?;
        // a session that is ending has nothing left to show
        if flow == Flow::Continue {
            self.out.flush()?;
        }
        Ok(flow)
    }

    /// Prints one error line. Failing to print it is logged, never fatal.
    fn report(&mut self, error: &CommandError) {
        debug!(?error, "command failed");
        if let Err(e) = self.out.flush() {
            debug!(%e, "stdout flush failed");
        }

        let line = self.highlighter.highlight_error(&error.to_string());
        if let Err(e) = writeln!(self.err, "{}", line).and_then(|_| self.err.flush()) {
            warn!(%e, "could not report command error");
        }
    }
}
