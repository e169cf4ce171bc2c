use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use groundwork::context::ProjectContext;
use groundwork::pipeline::{FinalizeOutcome, GenerationPipeline};
use groundwork::report::Reporter;
use groundwork::defaults;

use super::CmdResult;

#[derive(Args)]
pub struct FinalizeArgs {
    /// Root of the generated project
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Resolved context file written by the template engine,
    /// relative to --dir unless absolute
    #[arg(long, default_value = "template-context.json")]
    pub context: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct FinalizeOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub outcome: FinalizeOutcome,
}

pub fn run(args: &FinalizeArgs) -> CmdResult<FinalizeOutput> {
    let context_path = if args.context.is_absolute() {
        args.context.clone()
    } else {
        args.dir.join(&args.context)
    };

    let context = ProjectContext::load(&context_path)?;
    let mut pipeline =
        GenerationPipeline::new(args.dir.clone(), context, defaults::setup_commands());
    let mut reporter = Reporter::new("finalize");
    let outcome = pipeline.run(&mut reporter)?;

    Ok((
        FinalizeOutput {
            command: "finalize",
            outcome,
        },
        0,
    ))
}
