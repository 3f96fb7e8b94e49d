// file: src/resource/result.rs
// version: 1.0.0
// guid: c7fefa57-7681-4ad0-a4e7-4315fd04b650

//! Structured result returned to the automation caller

use crate::error::AgentError;
use crate::parser::ResourceTree;
use crate::pcs::ResourceLookup;
use serde::Serialize;
use tracing::warn;

/// Outcome of a resource operation, printed as JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    pub failed: bool,
    pub msg: String,
    /// Parsed `pcs resource config` output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceTree>,
    /// Unparsed `pcs resource config` output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Why `raw` could not be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
    /// Exit code of the failing command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc: Option<i32>,
    /// Stdout of the failing command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Stderr of the failing command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModuleResult {
    pub fn unchanged(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ..Default::default()
        }
    }

    pub fn changed(msg: impl Into<String>) -> Self {
        Self {
            changed: true,
            msg: msg.into(),
            ..Default::default()
        }
    }

    /// Attach a resource's configuration.
    ///
    /// A dump that cannot be parsed is still reported raw, with the parse
    /// error alongside, since the state change itself succeeded.
    pub fn with_lookup(mut self, lookup: &ResourceLookup) -> Self {
        if let ResourceLookup::Found { raw } = lookup {
            self.raw = Some(raw.clone());
            match lookup.tree() {
                Some(Ok(tree)) => self.resource = Some(tree),
                Some(Err(e)) => {
                    warn!("Could not parse resource configuration: {}", e);
                    self.parse_error = Some(e.to_string());
                }
                None => {}
            }
        }
        self
    }

    /// Failure result for an error that aborted the operation
    pub fn failure(err: &AgentError) -> Self {
        let mut result = Self {
            failed: true,
            msg: err.to_string(),
            ..Default::default()
        };

        match err {
            AgentError::Process {
                exit_code,
                stdout,
                stderr,
                ..
            } => {
                result.rc = *exit_code;
                result.output = Some(stdout.clone());
                result.error = Some(stderr.clone());
            }
            AgentError::Parse(parse) => result.parse_error = Some(parse.to_string()),
            _ => {}
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_unchanged_serializes_minimal_fields() {
        let json = serde_json::to_value(ModuleResult::unchanged("nothing to do")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"changed": false, "failed": false, "msg": "nothing to do"})
        );
    }

    #[test]
    fn test_with_lookup_parses_found_resource() {
        let lookup = ResourceLookup::Found {
            raw: "Resource: vip\n".to_string(),
        };

        let result = ModuleResult::changed("created").with_lookup(&lookup);

        assert!(result.resource.is_some());
        assert_eq!(result.raw.as_deref(), Some("Resource: vip\n"));
        assert!(result.parse_error.is_none());
    }

    #[test]
    fn test_with_lookup_keeps_raw_on_parse_error() {
        let lookup = ResourceLookup::Found {
            raw: "Attributes:\n  ip=10.0.0.1\n".to_string(),
        };

        let result = ModuleResult::changed("created").with_lookup(&lookup);

        assert!(result.resource.is_none());
        assert_eq!(
            result.parse_error,
            Some(ParseError::MalformedLine { line: 2 }.to_string())
        );
    }

    #[test]
    fn test_failure_from_process_error() {
        // Arrange
        let err = AgentError::Process {
            command: "pcs resource delete vip".to_string(),
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "Error: resource is in use".to_string(),
        };

        // Act
        let result = ModuleResult::failure(&err);

        // Assert
        assert!(result.failed);
        assert!(!result.changed);
        assert_eq!(result.rc, Some(1));
        assert_eq!(result.error.as_deref(), Some("Error: resource is in use"));
    }

    #[test]
    fn test_failure_from_parse_error() {
        let err = AgentError::from(ParseError::EmptyInput);

        let result = ModuleResult::failure(&err);

        assert!(result.failed);
        assert!(result.msg.contains("Malformed pcs output"));
        assert_eq!(result.parse_error.as_deref(), Some("no lines to parse"));
        assert!(result.rc.is_none());
    }
}
