// file: src/pcs/mod.rs
// version: 1.0.0
// guid: cc1bd557-77d0-43c9-bad9-b053553cbb00

//! Client for the `pcs` command-line tool

pub mod command;

pub use command::PcsCommand;

use crate::config::ResourceSpec;
use crate::error::{AgentError, ParseError};
use crate::parser::{self, ResourceTree};
use crate::runner::{display_command, CommandOutput, CommandRunner};
use crate::Result;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Printed by pcs when pacemaker is not running locally
pub const PCS_CLUSTER_DOWN: &str = "Error: cluster is not currently running on this node";
/// Printed by `pcs resource config` for an unknown resource
pub const PCS_NO_RESOURCE: &str = "Error: No resource found";
/// Printed by older pcs releases for an unknown resource
pub const PCS_MISSING_RESOURCE: &str = "Warning: Unable to find resource";

/// Extra time a `move --wait` gets before the process is killed, so pcs can
/// report its own wait timeout first
pub const RELOCATE_GRACE: Duration = Duration::from_secs(30);

/// Outcome of querying a resource's configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLookup {
    /// The resource exists; `raw` is the `pcs resource config` output
    Found { raw: String },
    /// pcs reported that no such resource exists
    Missing { message: String },
}

impl ResourceLookup {
    pub fn exists(&self) -> bool {
        matches!(self, ResourceLookup::Found { .. })
    }

    /// Parse the configuration dump of a found resource
    pub fn tree(&self) -> Option<std::result::Result<ResourceTree, ParseError>> {
        match self {
            ResourceLookup::Found { raw } => Some(parser::parse(raw)),
            ResourceLookup::Missing { .. } => None,
        }
    }
}

/// Runs pcs resource commands through a [`CommandRunner`]
pub struct PcsClient<R> {
    runner: R,
    binary: String,
    timeout: Duration,
}

impl<R: CommandRunner> PcsClient<R> {
    /// Create a client that invokes `pcs` from `PATH`
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            binary: "pcs".to_string(),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Use a different pcs binary
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Limit each invocation to `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Borrow this client with a different per-invocation timeout
    pub fn scoped(&self, timeout: Duration) -> PcsClient<&R> {
        PcsClient {
            runner: &self.runner,
            binary: self.binary.clone(),
            timeout,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn invoke(&self, command: &PcsCommand, timeout: Duration) -> Result<CommandOutput> {
        debug!("Running {}", display_command(&self.binary, command.args()));
        self.runner.run(&self.binary, command.args(), timeout).await
    }

    /// Run a command that must succeed
    async fn invoke_checked(&self, command: &PcsCommand, timeout: Duration) -> Result<CommandOutput> {
        let output = self.invoke(command, timeout).await?;
        if output.success() {
            return Ok(output);
        }

        let command_line = display_command(&self.binary, command.args());
        if output.combined().contains(PCS_CLUSTER_DOWN) {
            return Err(AgentError::ClusterDown(command_line));
        }

        warn!("Command '{}' failed with exit code {}", command_line, output.exit_code);
        Err(AgentError::Process {
            command: command_line,
            exit_code: Some(output.exit_code),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    /// Query `pcs resource config NAME`
    pub async fn get_resource(&self, name: &str) -> Result<ResourceLookup> {
        let command = PcsCommand::config(name);
        let output = self.invoke(&command, self.timeout).await?;
        let combined = output.combined();

        if combined.contains(PCS_CLUSTER_DOWN) {
            return Err(AgentError::ClusterDown(display_command(
                &self.binary,
                command.args(),
            )));
        }

        if combined.contains(PCS_NO_RESOURCE) || combined.contains(PCS_MISSING_RESOURCE) {
            debug!("Resource {} does not exist", name);
            return Ok(ResourceLookup::Missing {
                message: combined.trim().to_string(),
            });
        }

        if !output.success() {
            return Err(AgentError::Process {
                command: display_command(&self.binary, command.args()),
                exit_code: Some(output.exit_code),
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        if output.stdout.trim().is_empty() {
            debug!("Resource {} has no configuration output", name);
            return Ok(ResourceLookup::Missing {
                message: String::new(),
            });
        }

        Ok(ResourceLookup::Found { raw: output.stdout })
    }

    pub async fn create(&self, name: &str, spec: &ResourceSpec) -> Result<CommandOutput> {
        info!("Creating resource {} ({})", name, spec.agent());
        self.invoke_checked(&PcsCommand::create(name, spec), self.timeout).await
    }

    pub async fn update(&self, name: &str, spec: &ResourceSpec) -> Result<CommandOutput> {
        info!("Updating resource {}", name);
        self.invoke_checked(&PcsCommand::update(name, spec), self.timeout).await
    }

    pub async fn delete(&self, name: &str, force: bool) -> Result<CommandOutput> {
        info!("Deleting resource {}", name);
        self.invoke_checked(&PcsCommand::delete(name, force), self.timeout).await
    }

    /// Move a resource to `node`, letting pcs wait up to the client timeout
    pub async fn relocate(&self, name: &str, node: &str) -> Result<CommandOutput> {
        info!("Moving resource {} to {}", name, node);
        let wait = Some(self.timeout.as_secs()).filter(|secs| *secs > 0);
        self.invoke_checked(&PcsCommand::relocate(name, node, wait), self.timeout + RELOCATE_GRACE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::ScriptedRunner;

    const VIP_CONFIG: &str = "\
Resource: vip (class=ocf provider=heartbeat type=IPaddr2)
Meta Attributes:
  target-role: Started
";

    #[tokio::test]
    async fn test_get_resource_found() {
        let client = PcsClient::new(ScriptedRunner::new().respond(0, VIP_CONFIG, ""));

        let lookup = client.get_resource("vip").await.unwrap();

        assert!(lookup.exists());
        let tree = lookup.tree().unwrap().unwrap();
        assert_eq!(
            tree["Meta Attributes"]
                .lookup(&["target-role"])
                .and_then(|s| s.as_leaf()),
            Some("Started")
        );
        assert_eq!(
            client.runner().calls(),
            vec![vec!["resource", "config", "vip"]]
        );
    }

    #[tokio::test]
    async fn test_get_resource_missing() {
        let client = PcsClient::new(ScriptedRunner::new().respond(
            1,
            "",
            "Error: No resource found\n",
        ));

        let lookup = client.get_resource("ghost").await.unwrap();

        assert!(!lookup.exists());
        assert!(lookup.tree().is_none());
    }

    #[tokio::test]
    async fn test_get_resource_old_pcs_warning() {
        let client = PcsClient::new(ScriptedRunner::new().respond(
            0,
            "Warning: Unable to find resource 'ghost'\n",
            "",
        ));

        let lookup = client.get_resource("ghost").await.unwrap();

        assert!(matches!(lookup, ResourceLookup::Missing { .. }));
    }

    #[tokio::test]
    async fn test_get_resource_cluster_down() {
        let client = PcsClient::new(ScriptedRunner::new().respond(1, "", &format!("{}\n", PCS_CLUSTER_DOWN)));

        let err = client.get_resource("vip").await.unwrap_err();

        assert!(matches!(err, AgentError::ClusterDown(_)));
    }

    #[tokio::test]
    async fn test_get_resource_other_failure() {
        let client = PcsClient::new(ScriptedRunner::new().respond(2, "", "Error: unknown option"));

        let err = client.get_resource("vip").await.unwrap_err();

        assert!(matches!(err, AgentError::Process { exit_code: Some(2), .. }));
    }

    #[tokio::test]
    async fn test_create_failure_keeps_streams() {
        // Arrange
        let client = PcsClient::new(ScriptedRunner::new().respond(
            1,
            "partial",
            "Error: Unable to create resource",
        ));

        // Act
        let err = client
            .create("vip", &ResourceSpec::new("IPaddr2"))
            .await
            .unwrap_err();

        // Assert
        assert_eq!(
            err.captured_output(),
            Some(("partial", "Error: Unable to create resource"))
        );
    }

    #[tokio::test]
    async fn test_relocate_waits_for_timeout() {
        let client = PcsClient::new(ScriptedRunner::new().respond(0, "", ""))
            .with_timeout(Duration::from_secs(45));

        client.relocate("vip", "node2").await.unwrap();

        assert_eq!(
            client.runner().calls(),
            vec![vec!["resource", "move", "vip", "node2", "--wait=45"]]
        );
        assert_eq!(client.runner().timeouts(), vec![Duration::from_secs(75)]);
    }

    #[tokio::test]
    async fn test_other_commands_use_client_timeout() {
        let client = PcsClient::new(ScriptedRunner::new().respond(0, "", ""))
            .with_timeout(Duration::from_secs(45));

        client.delete("vip", false).await.unwrap();

        assert_eq!(client.runner().timeouts(), vec![Duration::from_secs(45)]);
    }

    #[tokio::test]
    async fn test_mutation_on_stopped_cluster() {
        let client = PcsClient::new(ScriptedRunner::new().respond(1, "", &format!("{}\n", PCS_CLUSTER_DOWN)));

        let err = client.delete("vip", true).await.unwrap_err();

        assert!(matches!(err, AgentError::ClusterDown(ref command) if command == "pcs resource delete vip --force"));
    }
}
