use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Upper bound on how long a single setup command may run before it is
/// killed and reported as failed. A hung formatter must not hang the
/// whole pipeline.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(600);

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One external command invocation: a program plus its argument tokens.
///
/// Non-empty by construction; the token order is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full command line, space-joined, for display purposes.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            return self.program.clone();
        }
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// Internal result of one command attempt. Converted to a log side effect
/// at the sequencer boundary, never thrown past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Ran,
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct CommandAttempt {
    pub command: String,
    pub program: String,
    pub outcome: CommandOutcome,
}

/// Executes single external commands as best-effort operations.
///
/// The child's stdout/stderr are inherited, not captured or interpreted.
/// Every failure (a program that is not found, a non-zero exit, a kill
/// after timeout) is reported in the returned attempt; `run` never errors.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Option<Duration>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            timeout: Some(DEFAULT_COMMAND_TIMEOUT),
        }
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Run one command, optionally in a working directory.
    pub fn run(&self, spec: &CommandSpec, current_dir: Option<&Path>) -> CommandAttempt {
        CommandAttempt {
            command: spec.display(),
            program: spec.program().to_string(),
            outcome: self.execute(spec, current_dir),
        }
    }

    fn execute(&self, spec: &CommandSpec, current_dir: Option<&Path>) -> CommandOutcome {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args());
        cmd.stdin(Stdio::null());

        if let Some(dir) = current_dir {
            cmd.current_dir(dir);
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                return CommandOutcome::Failed {
                    reason: format!("failed to start: {}", e),
                }
            }
        };

        let waited = match self.timeout {
            None => child.wait(),
            Some(limit) => {
                let deadline = Instant::now() + limit;
                loop {
                    match child.try_wait() {
                        Ok(Some(status)) => break Ok(status),
                        Ok(None) => {
                            if Instant::now() >= deadline {
                                let _ = child.kill();
                                let _ = child.wait();
                                return CommandOutcome::Failed {
                                    reason: format!("timed out after {:?}", limit),
                                };
                            }
                            std::thread::sleep(WAIT_POLL_INTERVAL);
                        }
                        Err(e) => break Err(e),
                    }
                }
            }
        };

        match waited {
            Ok(status) if status.success() => CommandOutcome::Ran,
            Ok(status) => match status.code() {
                Some(code) => CommandOutcome::Failed {
                    reason: format!("exited with status {}", code),
                },
                None => CommandOutcome::Failed {
                    reason: "terminated by signal".to_string(),
                },
            },
            Err(e) => CommandOutcome::Failed {
                reason: format!("failed to wait: {}", e),
            },
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
