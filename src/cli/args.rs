// file: src/cli/args.rs
// version: 1.0.0
// guid: ded9970a-7c64-4b94-8c70-43f27c631d70

//! Command line argument definitions

use crate::config::{ResourceParams, ResourceSpec, ResourceState, DEFAULT_TIMEOUT_SECONDS};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pcs-resource-agent")]
#[command(about = "Manage Pacemaker cluster resources through pcs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[arg(long, global = true, env = "PCS_BINARY", default_value = "pcs", help = "pcs binary to invoke")]
    pub pcs: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a `pcs resource config` dump and print it as JSON
    Parse {
        #[arg(help = "File to read; stdin when omitted")]
        file: Option<PathBuf>,
    },

    /// Show the parsed configuration of a resource
    Info {
        #[arg(short, long)]
        name: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        timeout: u64,
    },

    /// Bring one resource into the requested state
    Ensure(EnsureArgs),

    /// Bring a resource into the state described by a YAML parameter file
    Apply {
        file: PathBuf,

        #[arg(long, help = "Report what would change without changing it")]
        check: bool,
    },
}

#[derive(Args)]
pub struct EnsureArgs {
    #[arg(short, long)]
    pub name: String,

    #[arg(short, long, value_enum, default_value = "present")]
    pub state: StateArg,

    #[arg(long, help = "Node to move the resource to (relocated only)")]
    pub node: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout: u64,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub force: bool,

    #[arg(long, help = "Report what would change without changing it")]
    pub check: bool,

    #[command(flatten)]
    pub resource: ResourceArgs,
}

/// Resource definition flags for `present` and `updated`
#[derive(Args)]
pub struct ResourceArgs {
    #[arg(long, default_value = "ocf")]
    pub standard: String,

    #[arg(long, default_value = "heartbeat")]
    pub provider: String,

    #[arg(long = "type", help = "Resource agent type, e.g. IPaddr2")]
    pub agent_type: Option<String>,

    #[arg(long)]
    pub operations: Option<String>,

    #[arg(long)]
    pub meta: Option<String>,

    #[arg(long)]
    pub clone: Option<String>,

    #[arg(long)]
    pub promotable: Option<String>,

    #[arg(long)]
    pub group: Option<String>,

    #[arg(long)]
    pub disabled: bool,

    #[arg(long)]
    pub agent_validation: bool,

    #[arg(long, visible_alias = "options")]
    pub resource_options: Option<String>,
}

impl EnsureArgs {
    /// Parameters equivalent to these flags; no resource entry without `--type`
    pub fn into_params(self) -> ResourceParams {
        let mut params = ResourceParams::new(self.name, self.state.into());
        params.node = self.node;
        params.timeout = self.timeout;
        params.force = self.force;

        let resource = self.resource;
        if let Some(agent_type) = resource.agent_type {
            params.resources.push(ResourceSpec {
                standard: resource.standard,
                provider: resource.provider,
                agent_type,
                operations: resource.operations,
                meta: resource.meta,
                clone: resource.clone,
                promotable: resource.promotable,
                group: resource.group,
                disabled: resource.disabled,
                agent_validation: resource.agent_validation,
                resource_options: resource.resource_options,
            });
        }

        params
    }
}

/// Log output format
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Resource state argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum StateArg {
    Present,
    Updated,
    Absent,
    Relocated,
}

impl From<StateArg> for ResourceState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Present => ResourceState::Present,
            StateArg::Updated => ResourceState::Updated,
            StateArg::Absent => ResourceState::Absent,
            StateArg::Relocated => ResourceState::Relocated,
        }
    }
}
