use super::{Command, CommandContext, CommandError, Flow, Invocation};
use crate::path::{Navigation, PathExpander, PathResolver, HOME_TOKEN};

#[derive(Debug, Clone, Default)]
pub struct CdCommand {
    resolver: PathResolver,
}

impl CdCommand {
    pub fn new(expander: PathExpander) -> Self {
        Self {
            resolver: PathResolver::with_expander(expander),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        invocation: &Invocation,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let target = if invocation.rest.is_empty() {
            HOME_TOKEN
        } else {
            invocation.rest.as_str()
        };

        if let Navigation::AtRoot = self.resolver.resolve_and_enter(target, ctx.state)? {
            writeln!(ctx.out, "Already at root directory")?;
        }
        Ok(Flow::Continue)
    }

    fn takes_args(&self) -> bool {
        true
    }
}
