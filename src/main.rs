// file: src/main.rs
// version: 1.0.0
// guid: d197e96a-dd7a-4fbc-91f6-fba5985c1e15

//! pcs resource agent - Main entry point

use clap::Parser;
use pcs_resource_agent::{
    cli::{
        args::{Cli, Commands, LogFormat},
        commands::*,
    },
    logging,
    resource::ModuleResult,
    AgentError,
};
use tokio::signal;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormat::Text => logging::init_logger(cli.verbose, cli.quiet)?,
        LogFormat::Json => logging::init_json_logger(cli.verbose, cli.quiet)?,
    }

    let shutdown_signal = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        warn!("Received Ctrl+C, aborting");
    };

    let Cli { command, pcs, .. } = cli;
    let command_future = async {
        match command {
            Commands::Parse { file } => {
                let tree = parse_command(file).await?;
                print_json(&tree)
            }
            Commands::Info { name, timeout } => {
                let result = info_command(&pcs, &name, timeout).await?;
                print_json(&result)
            }
            Commands::Ensure(args) => {
                let check = args.check;
                let result = ensure_command(&pcs, args.into_params(), check).await?;
                print_json(&result)
            }
            Commands::Apply { file, check } => {
                let result = apply_command(&pcs, file, check).await?;
                print_json(&result)
            }
        }
    };

    tokio::select! {
        result = command_future => {
            if let Err(e) = result {
                report_failure(&e)?;
                std::process::exit(1);
            }
            Ok(())
        }
        _ = shutdown_signal => {
            std::process::exit(130);
        }
    }
}

/// Print the failure as a result document so callers can tell error kinds apart
fn report_failure(err: &AgentError) -> anyhow::Result<()> {
    error!("{}", err);
    print_json(&ModuleResult::failure(err))?;
    Ok(())
}
