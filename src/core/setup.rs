//! Best-effort execution of the configured setup command sequence.
//!
//! Commands run strictly in order, each as its own subprocess, and a
//! failure never stops the sequence: a formatter that is absent on this
//! host is an inconvenience for the generated project, not a reason to
//! abort generation. Ordering is significant: a formatter must run
//! before any tool that would flag unformatted output.

use std::path::Path;

use serde::Serialize;

use crate::command::{CommandOutcome, CommandRunner, CommandSpec};
use crate::report::Reporter;

/// Result of one attempted setup command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupCommandResult {
    pub command: String,
    pub ran: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Result of running the whole setup sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRunResult {
    pub commands: Vec<SetupCommandResult>,
    pub all_ran: bool,
}

/// Run every command in `specs`, in order, inside `working_dir`,
/// continuing past failures.
///
/// Each attempt is converted to a report entry here: an info entry when
/// the command ran, a warning with a remediation hint when it did not.
pub fn run_setup_commands(
    runner: &CommandRunner,
    specs: &[CommandSpec],
    working_dir: &Path,
    reporter: &mut Reporter,
) -> SetupRunResult {
    let mut commands = Vec::with_capacity(specs.len());
    let mut all_ran = true;

    for spec in specs {
        let attempt = runner.run(spec, Some(working_dir));

        let result = match attempt.outcome {
            CommandOutcome::Ran => {
                reporter.info(format!("Ran `{}` successfully", attempt.program));
                SetupCommandResult {
                    command: attempt.command,
                    ran: true,
                    failure: None,
                }
            }
            CommandOutcome::Failed { reason } => {
                all_ran = false;
                reporter.warn(format!(
                    "Could not run `{}` successfully; you may need to run it manually",
                    attempt.program
                ));
                SetupCommandResult {
                    command: attempt.command,
                    ran: false,
                    failure: Some(reason),
                }
            }
        };

        commands.push(result);
    }

    SetupRunResult { commands, all_ran }
}
