// file: src/resource/manager.rs
// version: 1.0.0
// guid: ca2d9a82-5457-46bf-9ae1-219c6dd951c2

//! Reconciles a resource with its desired state

use super::ModuleResult;
use crate::config::{ResourceParams, ResourceState};
use crate::error::AgentError;
use crate::logging::with_async_operation_span;
use crate::pcs::{PcsClient, ResourceLookup};
use crate::runner::CommandRunner;
use crate::Result;
use std::time::Duration;
use tracing::info;

/// Drives pcs to bring resources into their requested state
pub struct ResourceManager<R> {
    client: PcsClient<R>,
    check_mode: bool,
}

impl<R: CommandRunner> ResourceManager<R> {
    pub fn new(client: PcsClient<R>) -> Self {
        Self {
            client,
            check_mode: false,
        }
    }

    /// Report what would change without running mutating commands
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    pub fn client(&self) -> &PcsClient<R> {
        &self.client
    }

    /// Query a resource and return its parsed configuration.
    ///
    /// Unlike [`ensure`](Self::ensure), output that cannot be parsed is an
    /// error here, since the parsed tree is the whole point of the call.
    pub async fn info(&self, name: &str) -> Result<ModuleResult> {
        with_async_operation_span("info", name, || self.describe(name)).await
    }

    async fn describe(&self, name: &str) -> Result<ModuleResult> {
        let lookup = self.client.get_resource(name).await?;
        match lookup.tree() {
            Some(tree) => Ok(ModuleResult {
                resource: Some(tree?),
                raw: Some(raw_of(&lookup)),
                ..ModuleResult::unchanged(format!("Resource {} found", name))
            }),
            None => Ok(ModuleResult::unchanged(format!("Resource {} not found", name))),
        }
    }

    /// Bring the resource named in `params` into `params.state`
    pub async fn ensure(&self, params: &ResourceParams) -> Result<ModuleResult> {
        params.validate()?;

        let client = self.client.scoped(Duration::from_secs(params.timeout));
        let name = params.name.as_str();

        with_async_operation_span(params.state.as_str(), name, || {
            self.reconcile(&client, params)
        })
        .await
    }

    async fn reconcile(&self, client: &PcsClient<&R>, params: &ResourceParams) -> Result<ModuleResult> {
        let name = params.name.as_str();
        let current = client.get_resource(name).await?;

        match params.state {
            ResourceState::Present => {
                if current.exists() {
                    info!("Resource {} already exists", name);
                    return Ok(ModuleResult::unchanged(format!("Resource {} already exists", name))
                        .with_lookup(&current));
                }
                if self.check_mode {
                    return Ok(ModuleResult::changed(format!("Resource {} would be created", name)));
                }

                client.create(name, params.resource()?).await?;
                let created = client.get_resource(name).await?;
                Ok(ModuleResult::changed(format!("Resource {} created", name)).with_lookup(&created))
            }
            ResourceState::Updated => {
                if !current.exists() {
                    return Err(AgentError::resource_missing(format!(
                        "{} does not exist to update",
                        name
                    )));
                }
                if self.check_mode {
                    return Ok(ModuleResult::changed(format!("Resource {} would be updated", name))
                        .with_lookup(&current));
                }

                client.update(name, params.resource()?).await?;
                let updated = client.get_resource(name).await?;
                Ok(ModuleResult::changed(format!("Resource {} updated", name)).with_lookup(&updated))
            }
            ResourceState::Absent => {
                if !current.exists() {
                    info!("Resource {} is already absent", name);
                    return Ok(ModuleResult::unchanged(format!("Resource {} is already absent", name)));
                }
                if self.check_mode {
                    return Ok(ModuleResult::changed(format!("Resource {} would be deleted", name)));
                }

                client.delete(name, params.force).await?;
                Ok(ModuleResult::changed(format!("Resource {} deleted", name)))
            }
            ResourceState::Relocated => {
                let node = params.node.as_deref().unwrap_or_default();
                if !current.exists() {
                    return Err(AgentError::resource_missing(format!(
                        "{} does not exist to relocate",
                        name
                    )));
                }
                if self.check_mode {
                    return Ok(ModuleResult::changed(format!(
                        "Resource {} would be moved to {}",
                        name, node
                    ))
                    .with_lookup(&current));
                }

                client.relocate(name, node).await?;
                let moved = client.get_resource(name).await?;
                Ok(ModuleResult::changed(format!("Resource {} moved to {}", name, node))
                    .with_lookup(&moved))
            }
        }
    }
}

fn raw_of(lookup: &ResourceLookup) -> String {
    match lookup {
        ResourceLookup::Found { raw } => raw.clone(),
        ResourceLookup::Missing { .. } => String::new(),
    }
}
