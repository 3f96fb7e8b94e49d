// file: src/runner/mod.rs
// version: 1.0.0
// guid: 85176f2b-c924-4a55-b912-3a7815e47502

//! Process execution for pcs invocations

pub mod local;

pub use local::LocalRunner;

use crate::Result;
use std::time::Duration;

/// Exit status and captured streams of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `-1` when the process was terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Both streams, stdout first, for matching on pcs messages
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Trait for running a program and collecting its output.
///
/// A non-zero exit code is reported through [`CommandOutput`], not as an
/// error; only failing to run the program at all is an error here.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<CommandOutput>;
}

#[async_trait::async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    async fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<CommandOutput> {
        (**self).run(program, args, timeout).await
    }
}

/// Render a program and its arguments for logs and error messages
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
