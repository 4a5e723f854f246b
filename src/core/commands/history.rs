use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow, Invocation};
use crate::input::History;

/// How many entries `history` shows.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn render(history: &History, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Command History:")?;
        for (i, entry) in history.recent(HISTORY_DISPLAY_LIMIT).iter().enumerate() {
            writeln!(out, "  {}: {}", i + 1, entry)?;
        }
        Ok(())
    }
}

impl Command for HistoryCommand {
    fn execute(
        &self,
        _invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        Self::render(ctx.state.history(), &mut *ctx.out)?;
        Ok(Flow::Continue)
    }
}
