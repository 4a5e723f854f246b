use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

mod builtin;
mod cd;
mod history;
mod list;
mod mkdir;

pub use builtin::{ClearCommand, ExitCommand, HelpCommand, PwdCommand, HELP_TEXT};
pub use cd::CdCommand;
pub use history::{HistoryCommand, HISTORY_DISPLAY_LIMIT};
pub use list::ListCommand;
pub use mkdir::MkdirCommand;

use crate::core::state::SessionState;
use crate::path::PathExpander;
use crate::platform::Platform;
use crate::process::{self, ProcessError, ProcessRunner};

/// Failures of a single command. None of these end the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("Error executing command: {0}")]
    Execution(#[from] ProcessError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One line split into a lowercased verb and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: String,
    pub args: Vec<String>,
    /// Everything after the verb, trimmed but otherwise as typed.
    pub rest: String,
}

impl Invocation {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let verb_end = line.find(char::is_whitespace).unwrap_or(line.len());
        if verb_end == 0 {
            return None;
        }

        let (verb, rest) = line.split_at(verb_end);
        let rest = rest.trim();
        Some(Self {
            verb: verb.to_lowercase(),
            args: rest.split_whitespace().map(String::from).collect(),
            rest: rest.to_string(),
        })
    }
}

/// What a built-in gets to work with.
pub struct CommandContext<'a> {
    pub state: &'a mut SessionState,
    pub runner: &'a mut dyn ProcessRunner,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub platform: Platform,
}

pub trait Command {
    fn execute(
        &self,
        invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError>;

    /// Verbs that take no arguments are only built-ins when used alone.
    fn takes_args(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Clear(ClearCommand),
    Pwd(PwdCommand),
    Mkdir(MkdirCommand),
    List(ListCommand),
    History(HistoryCommand),
    Help(HelpCommand),
}

impl CommandType {
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Cd(_) => "cd",
            CommandType::Exit(_) => "exit",
            CommandType::Clear(_) => "clear",
            CommandType::Pwd(_) => "pwd",
            CommandType::Mkdir(_) => "mkdir",
            CommandType::List(_) => "list",
            CommandType::History(_) => "history",
            CommandType::Help(_) => "help",
        }
    }
}

impl Command for CommandType {
    fn execute(
        &self,
        invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(invocation, ctx),
            CommandType::Exit(cmd) => cmd.execute(invocation, ctx),
            CommandType::Clear(cmd) => cmd.execute(invocation, ctx),
            CommandType::Pwd(cmd) => cmd.execute(invocation, ctx),
            CommandType::Mkdir(cmd) => cmd.execute(invocation, ctx),
            CommandType::List(cmd) => cmd.execute(invocation, ctx),
            CommandType::History(cmd) => cmd.execute(invocation, ctx),
            CommandType::Help(cmd) => cmd.execute(invocation, ctx),
        }
    }

    fn takes_args(&self) -> bool {
        match self {
            CommandType::Cd(cmd) => cmd.takes_args(),
            CommandType::Exit(cmd) => cmd.takes_args(),
            CommandType::Clear(cmd) => cmd.takes_args(),
            CommandType::Pwd(cmd) => cmd.takes_args(),
            CommandType::Mkdir(cmd) => cmd.takes_args(),
            CommandType::List(cmd) => cmd.takes_args(),
            CommandType::History(cmd) => cmd.takes_args(),
            CommandType::Help(cmd) => cmd.takes_args(),
        }
    }
}

/// How a line will be handled.
#[derive(Debug)]
pub enum Dispatch<'a> {
    Builtin(&'a CommandType, Invocation),
    External(String),
    Empty,
}

/// Registry of built-ins keyed by verb.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(PathExpander::new())
    }
}

impl CommandExecutor {
    pub fn new(expander: PathExpander) -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd", CommandType::Cd(CdCommand::new(expander.clone())));
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("quit", CommandType::Exit(ExitCommand));
        commands.insert("clear", CommandType::Clear(ClearCommand));
        commands.insert("cls", CommandType::Clear(ClearCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new(expander)));
        commands.insert("ls", CommandType::List(ListCommand));
        commands.insert("dir", CommandType::List(ListCommand));
        commands.insert("history", CommandType::History(HistoryCommand));
        commands.insert("help", CommandType::Help(HelpCommand));

        Self { commands }
    }

    /// Decides who handles an already alias-expanded line.
    pub fn classify(&self, line: &str) -> Dispatch<'_> {
        let Some(invocation) = Invocation::parse(line) else {
            return Dispatch::Empty;
        };

        match self.commands.get(invocation.verb.as_str()) {
            Some(cmd) if cmd.takes_args() || invocation.args.is_empty() => {
                Dispatch::Builtin(cmd, invocation)
            }
            _ => Dispatch::External(line.trim().to_string()),
        }
    }

    pub fn execute(&self, line: &str, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        match self.classify(line) {
            Dispatch::Builtin(cmd, invocation) => {
                debug!(builtin = cmd.name(), args = %invocation.rest, "dispatch");
                cmd.execute(&invocation, ctx)
            }
            Dispatch::External(line) => {
                let cwd = ctx.state.current_dir().to_path_buf();
                process::delegate(&mut *ctx.runner, &line, &cwd, &mut *ctx.out, &mut *ctx.err)?;
                Ok(Flow::Continue)
            }
            Dispatch::Empty => Ok(Flow::Continue),
        }
    }
}
