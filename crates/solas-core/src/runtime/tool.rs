//! External process execution with a bounded timeout

use colored::Colorize;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Default bound on external processes (two hours, mounts can be slow)
pub const DEFAULT_PROCESS_TIMEOUT: Duration = Duration::from_secs(7200);

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to start \"{command}\": {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("The command \"{command}\" exceeded the timeout of {seconds} seconds.")]
    TimedOut { command: String, seconds: u64 },

    #[error("The command \"{command}\" failed.\n\nExit Code: {code}\n\nOutput:\n{stdout}\nError Output:\n{stderr}")]
    Failed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },
}

/// Captured output of a successful run
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A command line to run against an external tool
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    timeout: Duration,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            timeout: DEFAULT_PROCESS_TIMEOUT,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Command line as shown to the operator
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion, failing on a non-zero exit or when the timeout elapses
    pub async fn run(&self) -> Result<ProcessOutput, ProcessError> {
        let command = self.command_line();
        println!("{} {}", "Running:".dimmed(), command.yellow());

        let child = TokioCommand::new(&self.program)
            .args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Dropping the pending future on timeout kills the child
        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => return Err(ProcessError::Spawn { command, source }),
            Err(_) => {
                return Err(ProcessError::TimedOut {
                    command,
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(ProcessOutput { stdout, stderr })
        } else {
            Err(ProcessError::Failed {
                command,
                code: output.status.code().unwrap_or(-1),
                stdout,
                stderr,
            })
        }
    }
}
