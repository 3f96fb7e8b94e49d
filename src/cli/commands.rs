// file: src/cli/commands.rs
// version: 1.0.0
// guid: ac8f6e06-e2bf-4db2-aee1-e4f1ccfa4424

//! Command implementations for the CLI

use crate::{
    config::{loader::ConfigLoader, ResourceParams},
    parser::{self, ResourceTree},
    pcs::PcsClient,
    resource::{ModuleResult, ResourceManager},
    runner::LocalRunner,
    Result,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::info;

fn manager(pcs: &str, timeout: Duration, check: bool) -> ResourceManager<LocalRunner> {
    let client = PcsClient::new(LocalRunner::new())
        .with_binary(pcs)
        .with_timeout(timeout);
    ResourceManager::new(client).with_check_mode(check)
}

/// Parse a configuration dump from a file or stdin
pub async fn parse_command(file: Option<PathBuf>) -> Result<ResourceTree> {
    let text = match file {
        Some(path) => {
            info!("Parsing {}", path.display());
            tokio::fs::read_to_string(&path).await?
        }
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    Ok(parser::parse(&text)?)
}

/// Query a resource and parse its configuration
pub async fn info_command(pcs: &str, name: &str, timeout: u64) -> Result<ModuleResult> {
    info!("Querying resource {}", name);
    manager(pcs, Duration::from_secs(timeout), false).info(name).await
}

/// Reconcile one resource described by flags or a parameter file
pub async fn ensure_command(pcs: &str, params: ResourceParams, check: bool) -> Result<ModuleResult> {
    info!(
        "Ensuring resource {} is {}{}",
        params.name,
        params.state.as_str(),
        if check { " (check mode)" } else { "" }
    );
    manager(pcs, Duration::from_secs(params.timeout), check)
        .ensure(&params)
        .await
}

/// Reconcile the resource described by a YAML parameter file
pub async fn apply_command(pcs: &str, file: PathBuf, check: bool) -> Result<ModuleResult> {
    let params = ConfigLoader::new().load_params(&file)?;
    ensure_command(pcs, params, check).await
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AgentError, ParseError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_parse_command_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Resource: vip\nMeta:\n  target-role: Stopped\n").unwrap();

        let tree = parse_command(Some(file.path().to_path_buf())).await.unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree["Resource"].as_leaf(), Some("vip"));
    }

    #[tokio::test]
    async fn test_parse_command_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Resource:\n").unwrap();

        let err = parse_command(Some(file.path().to_path_buf())).await.unwrap_err();

        assert!(matches!(
            err,
            AgentError::Parse(ParseError::IncompleteSection { line: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_apply_command_rejects_invalid_file_before_running_pcs() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "name: vip\nstate: relocated\n").unwrap();

        let err = apply_command("/nonexistent/pcs", file.path().to_path_buf(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Validation(_)));
    }

    #[tokio::test]
    async fn test_info_command_with_missing_binary() {
        let err = info_command("/nonexistent/pcs", "vip", 5).await.unwrap_err();

        assert!(matches!(err, AgentError::Process { exit_code: None, .. }));
    }
}
