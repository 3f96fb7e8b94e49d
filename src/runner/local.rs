// file: src/runner/local.rs
// version: 1.0.0
// guid: a0f9f3a7-96dd-49b9-9ee5-fac2c3e82293

//! Local process execution without a shell

use super::{display_command, CommandOutput, CommandRunner};
use crate::error::AgentError;
use crate::Result;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error};

/// Runs programs on this machine and captures their output
#[derive(Debug, Clone, Default)]
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    pub fn new() -> Self {
        Self
    }

    /// Resolve a bare program name through `PATH`; paths are used as given.
    fn resolve(&self, program: &str) -> Result<PathBuf> {
        if program.contains('/') {
            return Ok(PathBuf::from(program));
        }

        which::which(program).map_err(|e| AgentError::Process {
            command: program.to_string(),
            exit_code: None,
            stdout: String::new(),
            stderr: format!("Command not found: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl CommandRunner for LocalRunner {
    async fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<CommandOutput> {
        let command_line = display_command(program, args);
        debug!("Executing local command: {}", command_line);

        let binary = self.resolve(program)?;
        let mut cmd = Command::new(binary);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| {
                error!("Command timed out after {}s: {}", timeout.as_secs(), command_line);
                AgentError::timeout(format!(
                    "`{}` did not finish within {}s",
                    command_line,
                    timeout.as_secs()
                ))
            })?
            .map_err(|e| AgentError::Process {
                command: command_line.clone(),
                exit_code: None,
                stdout: String::new(),
                stderr: format!("Failed to execute command: {}", e),
            })?;

        let result = CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        debug!(
            "Command '{}' exited with {} ({} bytes of output)",
            command_line,
            result.exit_code,
            result.stdout.len()
        );

        Ok(result)
    }
}
