use std::io::{self, Write};
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tracing::{debug, warn};

use super::{CapturedOutput, ProcessError, ProcessRunner};
use crate::platform::Platform;

// Home, then erase the screen and scrollback.
const ANSI_CLEAR: &str = "\x1b[H\x1b[2J\x1b[3J";

/// Spawns real processes through the host's command interpreter.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    platform: Platform,
}

impl SystemRunner {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, line: &str, cwd: &Path) -> Result<CapturedOutput, ProcessError> {
        // output() waits for the child and closes both pipes on every path
        let output = self
            .platform
            .interpreter(line)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| ProcessError::Launch {
                command: line.to_string(),
                source,
            })?;

        debug!(status = ?output.status, "child finished");
        Ok(CapturedOutput::from_bytes(
            &output.stdout,
            &output.stderr,
            output.status.code(),
        ))
    }

    fn clear_screen(&mut self) -> Result<(), ProcessError> {
        let status = self
            .platform
            .clear_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        clear_or_fallback(status, &mut std::io::stdout())
    }
}

/// Writes the ANSI clear sequence unless the native clear ran and succeeded.
fn clear_or_fallback(
    status: io::Result<ExitStatus>,
    out: &mut dyn Write,
) -> Result<(), ProcessError> {
    match status {
        Ok(status) if status.success() => Ok(()),
        result => {
            warn!(?result, "native clear failed, falling back to ANSI");
            write!(out, "{}", ANSI_CLEAR)
                .and_then(|_| out.flush())
                .map_err(|e| ProcessError::Other(format!("failed to clear screen: {}", e)))
        }
    }
}
