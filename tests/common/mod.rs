#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use unish::error::ShellError;
use unish::input::{LineReader, ReadOutcome};
use unish::path::PathExpander;
use unish::platform::{Identity, Platform};
use unish::process::{CapturedOutput, ProcessError, ProcessRunner};
use unish::shell::{PromptStyle, Shell, ShellOptions};

/// Feeds a fixed script of reads, then reports end of input.
#[derive(Default)]
pub struct ScriptedReader {
    outcomes: VecDeque<ReadOutcome>,
    pub prompts: Vec<String>,
    pub remembered: Vec<String>,
}

impl ScriptedReader {
    pub fn lines(lines: &[&str]) -> Self {
        Self::outcomes(lines.iter().map(|l| ReadOutcome::Line(l.to_string())).collect())
    }

    pub fn outcomes(outcomes: Vec<ReadOutcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.outcomes.pop_front().unwrap_or(ReadOutcome::Eof))
    }

    fn remember(&mut self, line: &str) {
        self.remembered.push(line.to_string());
    }
}

/// Stands in for the native interpreter.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: Vec<(String, PathBuf)>,
    pub responses: HashMap<String, CapturedOutput>,
    pub fail_launch: bool,
    pub clears: usize,
}

impl FakeRunner {
    pub fn respond(mut self, line: &str, stdout: &str, stderr: &str, status: i32) -> Self {
        self.responses.insert(
            line.to_string(),
            CapturedOutput::from_bytes(stdout.as_bytes(), stderr.as_bytes(), Some(status)),
        );
        self
    }

    pub fn lines(&self) -> Vec<&str> {
        self.calls.iter().map(|(line, _)| line.as_str()).collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&mut self, line: &str, cwd: &Path) -> Result<CapturedOutput, ProcessError> {
        if self.fail_launch {
            return Err(ProcessError::Launch {
                command: line.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no interpreter"),
            });
        }
        self.calls.push((line.to_string(), cwd.to_path_buf()));
        Ok(self
            .responses
            .get(line)
            .cloned()
            .unwrap_or_else(|| CapturedOutput::from_bytes(b"", b"", Some(0))))
    }

    fn clear_screen(&mut self) -> Result<(), ProcessError> {
        self.clears += 1;
        Ok(())
    }
}

/// An output channel whose reader has gone away.
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}

pub type TestShell = Shell<ScriptedReader, FakeRunner, Vec<u8>, Vec<u8>>;

pub fn options(platform: Platform) -> ShellOptions {
    ShellOptions {
        platform,
        prompt_style: PromptStyle::Native,
        aliases: true,
        quiet: true,
        color: false,
    }
}

pub fn shell_with(
    reader: ScriptedReader,
    runner: FakeRunner,
    cwd: PathBuf,
    options: ShellOptions,
    home: &Path,
) -> TestShell {
    Shell::with_parts(reader, runner, Vec::new(), Vec::new(), cwd, options)
        .with_expander(PathExpander::with_home(home))
        .with_identity(Identity {
            user: "ada".to_string(),
            host: "box".to_string(),
        })
}

pub fn stdout_of(shell: &TestShell) -> String {
    String::from_utf8_lossy(shell.out()).into_owned()
}

pub fn stderr_of(shell: &TestShell) -> String {
    String::from_utf8_lossy(shell.err()).into_owned()
}
