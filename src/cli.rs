//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::application::services::session;
use crate::domain::config::RunConfig;
use crate::infra::multipass::MultipassBackend;
use crate::infra::prompt::StdinPrompt;
use crate::infra::stage::TempScriptStager;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Create a disposable multipass instance to crash test your project
#[derive(Parser)]
#[command(name = "crashtest", version, disable_version_flag = true)]
pub struct Cli {
    /// Multipass instance name (underscores are not allowed)
    #[arg(short, long)]
    pub instance_name: String,

    /// Project directory to transfer into the instance
    #[arg(short, long)]
    pub project: String,

    /// Prompt to stop and delete the instance after the shell session ends
    #[arg(short, long)]
    pub delete: bool,

    /// Detect and install the project dependencies inside the instance
    #[arg(long)]
    pub install_dependencies: bool,

    /// Suppress non-error progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// Execute the crash-test run with the production ports wired in.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or any backend step fails; the
    /// caller is expected to translate it into the process exit code.
    pub async fn run(self) -> Result<()> {
        let ctx = OutputContext::new(self.no_color, self.quiet);
        let cfg = RunConfig::new(
            self.instance_name,
            &self.project,
            self.install_dependencies,
            self.delete,
        );

        let backend = MultipassBackend::new();
        let reporter = TerminalReporter::new(&ctx);
        session::run(&cfg, &backend, &TempScriptStager, &reporter, &StdinPrompt).await
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
