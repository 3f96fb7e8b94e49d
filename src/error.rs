// file: src/error.rs
// version: 1.0.0
// guid: a119b10c-b523-4641-8c25-61c547d2ac49

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AgentError>;

/// Failures while turning `pcs resource config` output into a tree.
///
/// Line numbers are 1-based and refer to the original input, blank lines
/// included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no lines to parse")]
    EmptyInput,

    #[error("line {line}: expected `name:` or `name:value`")]
    MalformedLine { line: usize },

    #[error("line {line}: section `{name}` has no nested lines")]
    IncompleteSection { line: usize, name: String },

    #[error("line {line}: indentation {found} is inconsistent with expected depth {expected}")]
    Structure {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    /// Line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::MalformedLine { line }
            | Self::IncompleteSection { line, .. }
            | Self::Structure { line, .. } => Some(*line),
        }
    }
}

/// Error types for the pcs resource agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed pcs output: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command `{command}` failed with exit code {exit_code:?}: {stderr}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Cluster is not running on this node: {0}")]
    ClusterDown(String),

    #[error("Resource not found: {0}")]
    ResourceMissing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AgentError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a new resource-missing error
    pub fn resource_missing(name: impl Into<String>) -> Self {
        Self::ResourceMissing(name.into())
    }

    /// Captured stdout and stderr of a failed command
    pub fn captured_output(&self) -> Option<(&str, &str)> {
        match self {
            Self::Process { stdout, stderr, .. } => Some((stdout, stderr)),
            _ => None,
        }
    }
}
