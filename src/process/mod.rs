use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

pub mod executor;

pub use executor::SystemRunner;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Text a finished child left on its pipes, decoded lossily.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the child was killed by a signal.
    pub status: Option<i32>,
}

impl CapturedOutput {
    pub fn from_bytes(stdout: &[u8], stderr: &[u8], status: Option<i32>) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).trim_end().to_string(),
            stderr: String::from_utf8_lossy(stderr).trim_end().to_string(),
            status,
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// The process-spawning capability the shell core calls into.
pub trait ProcessRunner {
    /// Runs `line` through the native interpreter inside `cwd` and waits for it.
    fn run(&mut self, line: &str, cwd: &Path) -> Result<CapturedOutput, ProcessError>;

    fn clear_screen(&mut self) -> Result<(), ProcessError>;
}

/// Hands `line` to `runner` and relays whatever it printed.
pub fn delegate(
    runner: &mut dyn ProcessRunner,
    line: &str,
    cwd: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<CapturedOutput, crate::core::commands::CommandError> {
    debug!(line, cwd = %cwd.display(), "delegating");
    let output = runner.run(line, cwd)?;

    if !output.stdout.is_empty() {
        writeln!(out, "{}", output.stdout)?;
    }
    if !output.stderr.is_empty() {
        writeln!(err, "{}", output.stderr)?;
    }
    if !output.success() {
        debug!(line, status = ?output.status, "process exited unsuccessfully");
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct CannedRunner {
        output: CapturedOutput,
        seen: Vec<(String, PathBuf)>,
    }

    impl ProcessRunner for CannedRunner {
        fn run(&mut self, line: &str, cwd: &Path) -> Result<CapturedOutput, ProcessError> {
            self.seen.push((line.to_string(), cwd.to_path_buf()));
            Ok(self.output.clone())
        }

        fn clear_screen(&mut self) -> Result<(), ProcessError> {
            Ok(())
        }
    }

    #[test]
    fn test_from_bytes_trims_and_replaces_invalid_utf8() {
        let output = CapturedOutput::from_bytes(b"hi\xff\n\n", b"  \n", Some(0));
        assert_eq!(output.stdout, "hi\u{FFFD}");
        assert_eq!(output.stderr, "");
        assert!(output.success());
    }

    #[test]
    fn test_delegate_relays_both_streams() {
        let mut runner = CannedRunner {
            output: CapturedOutput {
                stdout: "listing".to_string(),
                stderr: "warning".to_string(),
                status: Some(1),
            },
            seen: Vec::new(),
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        delegate(&mut runner, "ls -la", Path::new("/work"), &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "listing\n");
        assert_eq!(String::from_utf8(err).unwrap(), "warning\n");
        assert_eq!(runner.seen, vec![("ls -la".to_string(), PathBuf::from("/work"))]);
    }

    #[test]
    fn test_delegate_skips_empty_streams() {
        let mut runner = CannedRunner {
            output: CapturedOutput::from_bytes(b"", b"", Some(0)),
            seen: Vec::new(),
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        delegate(&mut runner, "true", Path::new("/"), &mut out, &mut err).unwrap();
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
