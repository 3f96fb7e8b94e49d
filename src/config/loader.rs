// file: src/config/loader.rs
// version: 1.0.0
// guid: 6ba050cb-9b4b-45fd-9e2e-689b532049e9

//! Parameter file loading and environment variable substitution

use super::ResourceParams;
use crate::error::AgentError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parameter file loader with `${VAR}` substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a loader that substitutes from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader with no variables available
    pub fn empty() -> Self {
        Self {
            env_vars: HashMap::new(),
        }
    }

    /// Load and validate resource parameters from a YAML file
    pub fn load_params<P: AsRef<Path>>(&self, path: P) -> Result<ResourceParams> {
        let content = fs::read_to_string(&path).map_err(|e| {
            AgentError::config(format!(
                "Failed to read parameter file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        debug!("Loaded parameter file {}", path.as_ref().display());
        self.load_params_str(&content)
    }

    /// Load and validate resource parameters from YAML text
    pub fn load_params_str(&self, content: &str) -> Result<ResourceParams> {
        let expanded = self.expand_env_vars(content)?;
        let params: ResourceParams = serde_yaml::from_str(&expanded)?;

        params.validate()?;

        Ok(params)
    }

    /// Expand environment variables in parameter content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AgentError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let expanded = re.replace_all(content, |cap: &regex::Captures<'_>| {
            match self.env_vars.get(&cap[1]) {
                Some(value) => value.clone(),
                None => {
                    if !missing_vars.contains(&cap[1].to_string()) {
                        missing_vars.push(cap[1].to_string());
                    }
                    cap[0].to_string()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(AgentError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(expanded.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
