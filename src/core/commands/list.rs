use super::{Command, CommandContext, CommandError, Flow, Invocation};
use crate::process;

/// `ls` and `dir` both become the platform's own listing command.
#[derive(Debug, Clone, Default)]
pub struct ListCommand;

impl ListCommand {
    pub fn native_line(invocation: &Invocation, list_verb: &str) -> String {
        if invocation.rest.is_empty() {
            list_verb.to_string()
        } else {
            format!("{} {}", list_verb, invocation.rest)
        }
    }
}

impl Command for ListCommand {
    fn execute(
        &self,
        invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let line = Self::native_line(invocation, ctx.platform.list_command());
        let cwd = ctx.state.current_dir().to_path_buf();
        process::delegate(&mut *ctx.runner, &line, &cwd, &mut *ctx.out, &mut *ctx.err)?;
        Ok(Flow::Continue)
    }

    fn takes_args(&self) -> bool {
        true
    }
}
