//! crashtest: disposable multipass sandboxes for untrusted projects.

use clap::Parser;

use crashtest::cli::Cli;
use crashtest::domain::error::BackendError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("crashtest: error: {e}");
        std::process::exit(exit_code(&e));
    }
}

/// Backend failures propagate the backend's own exit code; everything else
/// (validation, environment, I/O) exits 1.
fn exit_code(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<BackendError>()
        .map_or(1, BackendError::exit_code)
}
