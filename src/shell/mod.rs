use std::env;
use std::io::{self, Stderr, Stdout, Write};
use std::path::PathBuf;

use tracing::warn;

mod executor;
pub mod prompt;

pub use prompt::PromptStyle;

use crate::{
    core::{aliases::AliasTable, commands::CommandExecutor, state::SessionState},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{EditorReader, LineReader, ReadOutcome},
    path::PathExpander,
    platform::{self, Identity, Platform},
    process::{ProcessRunner, SystemRunner},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub platform: Platform,
    pub prompt_style: PromptStyle,
    pub aliases: bool,
    pub quiet: bool,
    pub color: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            prompt_style: PromptStyle::Native,
            aliases: true,
            quiet: false,
            color: true,
        }
    }
}

impl ShellOptions {
    pub fn from_flags(flags: &Flags) -> Self {
        let minimal = flags.is_set("minimal");
        Self {
            prompt_style: if minimal {
                PromptStyle::Minimal
            } else {
                PromptStyle::Native
            },
            aliases: !minimal,
            quiet: flags.is_set("quiet") || flags.is_set("command"),
            ..Self::default()
        }
    }
}

pub struct Shell<R, P, O = Stdout, E = Stderr> {
    pub(crate) reader: R,
    pub(crate) runner: P,
    pub(crate) out: O,
    pub(crate) err: E,
    pub(crate) state: SessionState,
    pub(crate) executor: CommandExecutor,
    pub(crate) platform: Platform,
    pub(crate) prompt_style: PromptStyle,
    pub(crate) identity: Identity,
    pub(crate) highlighter: Highlighter,
    pub(crate) quiet: bool,
    pub(crate) status: SessionStatus,
}

impl Shell<EditorReader, SystemRunner> {
    /// A shell on the real terminal, starting in the process's working directory.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let options = ShellOptions::from_flags(flags);
        let reader = EditorReader::new()?;
        let runner = SystemRunner::new(options.platform);
        let current_dir = env::current_dir()?;

        Ok(Shell::with_parts(
            reader,
            runner,
            io::stdout(),
            io::stderr(),
            current_dir,
            options,
        ))
    }

    /// Ctrl-C while a child runs kills the child, not the shell.
    pub fn install_interrupt_handler() -> Result<(), ShellError> {
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to quit");
        })?;
        Ok(())
    }
}

impl<R, P, O, E> Shell<R, P, O, E>
where
    R: LineReader,
    P: ProcessRunner,
    O: Write,
    E: Write,
{
    pub fn with_parts(
        reader: R,
        runner: P,
        out: O,
        err: E,
        current_dir: PathBuf,
        options: ShellOptions,
    ) -> Self {
        let aliases = if options.aliases {
            AliasTable::for_platform(options.platform)
        } else {
            AliasTable::empty()
        };

        Shell {
            reader,
            runner,
            out,
            err,
            state: SessionState::new(current_dir, aliases),
            executor: CommandExecutor::default(),
            platform: options.platform,
            prompt_style: options.prompt_style,
            identity: Identity::detect(),
            highlighter: if options.color {
                Highlighter::new()
            } else {
                Highlighter::plain()
            },
            quiet: options.quiet,
            status: SessionStatus::Running,
        }
    }

    /// Resolves `~` against `expander` instead of the OS home directory.
    pub fn with_expander(mut self, expander: PathExpander) -> Self {
        self.executor = CommandExecutor::new(expander);
        self
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn runner(&self) -> &P {
        &self.runner
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn prompt(&self) -> String {
        prompt::render(
            self.prompt_style,
            self.platform,
            &self.identity,
            self.state.current_dir(),
        )
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        let release = platform::os_release();
        let lines = prompt::banner(self.prompt_style, self.platform, release.as_deref());
        for (i, line) in lines.iter().enumerate() {
            if i == 1 {
                writeln!(self.out, "{}", self.highlighter.highlight_title(line))?;
            } else {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.quiet {
            if let Err(e) = self.print_banner() {
                warn!(%e, "could not print banner");
            }
        }

        while self.status == SessionStatus::Running {
            match self.step() {
                Ok(_) => {}
                // output trouble spoils one iteration, not the session
                Err(ShellError::Io(e)) => warn!(%e, "output failed"),
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// One trip around the loop: prompt, read, execute.
    pub fn step(&mut self) -> Result<SessionStatus, ShellError> {
        let prompt = self.prompt();
        match self.reader.read_line(&prompt)? {
            ReadOutcome::Line(line) => {
                self.accept(&line)?;
            }
            ReadOutcome::Interrupted => {
                let notice = self.highlighter.highlight_notice("Use 'exit' to quit");
                writeln!(self.out, "{}", notice)?;
            }
            ReadOutcome::Eof => {
                self.status = SessionStatus::Terminated;
                writeln!(self.out, "\nGoodbye!")?;
            }
        }
        self.out.flush()?;
        Ok(self.status)
    }
}
