use std::path::PathBuf;

use serde::Serialize;

use crate::command::{CommandRunner, CommandSpec};
use crate::context::ProjectContext;
use crate::error::{Error, Result};
use crate::git;
use crate::prune::{self, PruneOutcome};
use crate::report::Reporter;
use crate::setup::{self, SetupRunResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Running,
    Done,
}

/// Record of one completed pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeOutcome {
    pub repository_name: String,
    pub package_name: String,
    pub setup: SetupRunResult,
    pub pruning: PruneOutcome,
    pub git_initialised: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Post-generation pipeline for one materialized project tree.
///
/// Runs the setup command sequence, then the conditional artifact rules,
/// then repository initialization, in that fixed order. A pipeline is
/// invoked exactly once; it holds no state beyond the context and the
/// configured command list.
pub struct GenerationPipeline {
    root: PathBuf,
    context: ProjectContext,
    commands: Vec<CommandSpec>,
    runner: CommandRunner,
    state: PipelineState,
}

impl GenerationPipeline {
    pub fn new(root: impl Into<PathBuf>, context: ProjectContext, commands: Vec<CommandSpec>) -> Self {
        Self {
            root: root.into(),
            context,
            commands,
            runner: CommandRunner::new(),
            state: PipelineState::Idle,
        }
    }

    /// Replace the default command runner (e.g. to tighten the timeout).
    pub fn with_runner(mut self, runner: CommandRunner) -> Self {
        self.runner = runner;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the pipeline to completion.
    ///
    /// Setup command failures and a failed repository initialization are
    /// recorded as warnings; only an artifact that is out of sync with
    /// the pruning rules aborts the run.
    pub fn run(&mut self, reporter: &mut Reporter) -> Result<FinalizeOutcome> {
        if self.state != PipelineState::Idle {
            return Err(Error::pipeline_already_ran());
        }
        self.state = PipelineState::Running;

        let setup = setup::run_setup_commands(&self.runner, &self.commands, &self.root, reporter);

        let pruning = prune::apply(&self.root, &self.context)?;

        let git_initialised = match git::init_repo(&self.root) {
            Ok(()) => {
                reporter.info("Initialised Git repository in the generated project");
                true
            }
            Err(_) => {
                reporter.warn(
                    "Could not initialise Git; please manually run `git init` in the generated project",
                );
                false
            }
        };

        self.state = PipelineState::Done;

        Ok(FinalizeOutcome {
            repository_name: self.context.repository_name.clone(),
            package_name: self.context.package_name.clone(),
            setup,
            pruning,
            git_initialised,
            warnings: reporter.warnings(),
        })
    }
}
