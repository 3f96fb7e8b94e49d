// file: src/config/mod.rs
// version: 1.0.0
// guid: 5be61237-f5bf-4739-bf64-f59b98a2215d

//! Resource parameters
//!
//! The declarative parameter set for one cluster resource, loaded from CLI
//! flags or a YAML file, plus its validation rules.

pub mod loader;

use crate::error::AgentError;
use serde::{Deserialize, Serialize};

/// Default timeout for each pcs invocation, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// Desired state of a cluster resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceState {
    /// Created if missing, left alone if it exists
    #[default]
    Present,
    /// Updated in place; must already exist
    Updated,
    /// Deleted if it exists
    Absent,
    /// Moved to a node; must already exist
    Relocated,
}

impl ResourceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceState::Present => "present",
            ResourceState::Updated => "updated",
            ResourceState::Absent => "absent",
            ResourceState::Relocated => "relocated",
        }
    }
}

impl std::str::FromStr for ResourceState {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(ResourceState::Present),
            "updated" => Ok(ResourceState::Updated),
            "absent" => Ok(ResourceState::Absent),
            "relocated" => Ok(ResourceState::Relocated),
            _ => Err(AgentError::validation(format!("Unknown resource state: {}", s))),
        }
    }
}

fn default_standard() -> String {
    "ocf".to_string()
}

fn default_provider() -> String {
    "heartbeat".to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_force() -> bool {
    true
}

/// Definition of a resource to create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Resource agent standard, e.g. `ocf` or `systemd`
    #[serde(default = "default_standard")]
    pub standard: String,
    /// Resource agent provider
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Resource agent type, e.g. `IPaddr2`
    #[serde(rename = "type", default)]
    pub agent_type: String,
    /// Operation definitions passed after `op`
    #[serde(default)]
    pub operations: Option<String>,
    /// Meta attributes passed after `meta`
    #[serde(default)]
    pub meta: Option<String>,
    /// Clone options passed after `clone`
    #[serde(default)]
    pub clone: Option<String>,
    /// Promotable options passed after `promotable`
    #[serde(default)]
    pub promotable: Option<String>,
    /// Group to add the resource to
    #[serde(default)]
    pub group: Option<String>,
    /// Create the resource disabled
    #[serde(default)]
    pub disabled: bool,
    /// Ask pcs to validate the agent options
    #[serde(default)]
    pub agent_validation: bool,
    /// Instance attributes, e.g. `ip=10.0.0.1 cidr_netmask=24`
    #[serde(default, alias = "options")]
    pub resource_options: Option<String>,
}

impl ResourceSpec {
    /// A spec with default standard and provider for the given agent type
    pub fn new(agent_type: impl Into<String>) -> Self {
        Self {
            standard: default_standard(),
            provider: default_provider(),
            agent_type: agent_type.into(),
            operations: None,
            meta: None,
            clone: None,
            promotable: None,
            group: None,
            disabled: false,
            agent_validation: false,
            resource_options: None,
        }
    }

    /// Agent in `standard:provider:type` form
    pub fn agent(&self) -> String {
        format!("{}:{}:{}", self.standard, self.provider, self.agent_type)
    }

    /// Validate the resource definition
    pub fn validate(&self) -> crate::Result<()> {
        if self.agent_type.trim().is_empty() {
            return Err(AgentError::validation("Resource type cannot be empty"));
        }

        for (field, value) in [("standard", &self.standard), ("provider", &self.provider)] {
            if value.trim().is_empty() || value.contains(':') {
                return Err(AgentError::validation(format!(
                    "Invalid resource {}: {:?}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}

/// Full parameter set for one resource operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceParams {
    /// Resource id
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: ResourceState,
    /// Target node, used when relocating
    #[serde(default)]
    pub node: Option<String>,
    /// Timeout for each pcs invocation, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Pass `--force` to destructive commands
    #[serde(default = "default_force")]
    pub force: bool,
    /// Resource definitions; ignored when absent or relocated
    #[serde(default)]
    pub resources: Vec<ResourceSpec>,
}

impl ResourceParams {
    /// Parameters for `name` in `state` with all other fields defaulted
    pub fn new(name: impl Into<String>, state: ResourceState) -> Self {
        Self {
            name: name.into(),
            state,
            node: None,
            timeout: DEFAULT_TIMEOUT_SECONDS,
            force: true,
            resources: Vec::new(),
        }
    }

    /// The single resource definition used by `present` and `updated`
    pub fn resource(&self) -> crate::Result<&ResourceSpec> {
        match self.resources.as_slice() {
            [spec] => Ok(spec),
            [] => Err(AgentError::validation(format!(
                "State '{}' requires a resource definition",
                self.state.as_str()
            ))),
            _ => Err(AgentError::validation(format!(
                "Expected exactly one resource definition, got {}",
                self.resources.len()
            ))),
        }
    }

    /// Validate parameters for the requested state
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(AgentError::validation("Must specify a resource name"));
        }

        if self.name.chars().any(char::is_whitespace) {
            return Err(AgentError::validation(format!(
                "Resource name cannot contain whitespace: {:?}",
                self.name
            )));
        }

        if self.timeout == 0 {
            return Err(AgentError::validation("Timeout must be greater than zero"));
        }

        match self.state {
            ResourceState::Present | ResourceState::Updated => {
                self.resource()?.validate()?;
            }
            ResourceState::Relocated => {
                if self.node.as_deref().map_or(true, |n| n.trim().is_empty()) {
                    return Err(AgentError::validation(
                        "State 'relocated' requires a target node",
                    ));
                }
            }
            ResourceState::Absent => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_str() {
        assert_eq!("present".parse::<ResourceState>().unwrap(), ResourceState::Present);
        assert_eq!("relocated".parse::<ResourceState>().unwrap(), ResourceState::Relocated);
        assert!("started".parse::<ResourceState>().is_err());
    }

    #[test]
    fn test_spec_agent_uses_defaults() {
        let spec = ResourceSpec::new("IPaddr2");

        assert_eq!(spec.agent(), "ocf:heartbeat:IPaddr2");
    }

    #[test]
    fn test_spec_rejects_empty_type() {
        let spec = ResourceSpec::new("");

        assert!(matches!(spec.validate(), Err(AgentError::Validation(_))));
    }

    #[test]
    fn test_spec_rejects_colon_in_provider() {
        let mut spec = ResourceSpec::new("IPaddr2");
        spec.provider = "heart:beat".to_string();

        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_params_require_name() {
        let params = ResourceParams::new("", ResourceState::Absent);

        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("Must specify a resource name"));
    }

    #[test]
    fn test_present_requires_exactly_one_resource() {
        // Arrange
        let mut params = ResourceParams::new("vip", ResourceState::Present);

        // Act & Assert
        assert!(params.validate().is_err());

        params.resources.push(ResourceSpec::new("IPaddr2"));
        assert!(params.validate().is_ok());

        params.resources.push(ResourceSpec::new("IPaddr2"));
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_relocated_requires_node() {
        let mut params = ResourceParams::new("vip", ResourceState::Relocated);
        assert!(params.validate().is_err());

        params.node = Some("node2".to_string());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut params = ResourceParams::new("vip", ResourceState::Absent);
        params.timeout = 0;

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_yaml_defaults_and_aliases() {
        // Arrange
        let yaml = r#"
name: floatingVIP
resources:
  - type: IPaddr2
    options: "ip=172.31.40.87 cidr_netmask=24"
    group: webservergroup
"#;

        // Act
        let params: ResourceParams = serde_yaml::from_str(yaml).unwrap();

        // Assert
        assert_eq!(params.state, ResourceState::Present);
        assert_eq!(params.timeout, DEFAULT_TIMEOUT_SECONDS);
        assert!(params.force);
        let spec = params.resource().unwrap();
        assert_eq!(spec.agent(), "ocf:heartbeat:IPaddr2");
        assert_eq!(
            spec.resource_options.as_deref(),
            Some("ip=172.31.40.87 cidr_netmask=24")
        );
        assert_eq!(spec.group.as_deref(), Some("webservergroup"));
        assert!(!spec.disabled);
    }
}
