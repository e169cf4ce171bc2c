use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use groundwork::context::ProjectContext;

use super::CmdResult;

#[derive(Args)]
pub struct ContextArgs {
    /// Root of the generated project
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Resolved context file written by the template engine,
    /// relative to --dir unless absolute
    #[arg(long, default_value = "template-context.json")]
    pub context: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ContextOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub context: ProjectContext,
}

pub fn run(args: &ContextArgs) -> CmdResult<ContextOutput> {
    let context_path = if args.context.is_absolute() {
        args.context.clone()
    } else {
        args.dir.join(&args.context)
    };

    let context = ProjectContext::load(&context_path)?;

    Ok((
        ContextOutput {
            command: "context",
            context,
        },
        0,
    ))
}
