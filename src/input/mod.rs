mod editor;
pub mod history;

pub use editor::EditorReader;
pub use history::History;

use crate::error::ShellError;

/// What a single read from the user produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C while waiting for input.
    Interrupted,
    /// Ctrl-D or the input stream closed.
    Eof,
}

/// Blocking source of command lines.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Offers an accepted line to the reader's own recall buffer, if it has one.
    fn remember(&mut self, _line: &str) {}
}
