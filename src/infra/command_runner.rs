//! Process execution on top of tokio.

use std::process::{ExitStatus, Output, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// There is deliberately no timeout here: every orchestration step blocks
/// until the backend process exits, and a hung backend hangs the tool.
/// Interrupting the tool reaches the child through normal process-group
/// signal delivery.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("failed to spawn {program}"))
    }
}
