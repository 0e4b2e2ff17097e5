//! Multipass CLI adapter: maps the VM ports onto `multipass` argument
//! vectors. Arguments are always passed as a vector, never through a shell,
//! so instance names and paths cannot be interpreted by one.

use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::application::ports::{
    BackendProbe, CommandRunner, FileTransfer, InstanceLifecycle, RemoteExec,
};
use crate::infra::command_runner::TokioCommandRunner;

/// Name of the backend binary this tool shells out to.
pub const BACKEND_PROGRAM: &str = "multipass";

/// Production VM backend that delegates to the `multipass` binary through a
/// [`CommandRunner`].
pub struct MultipassBackend<R = TokioCommandRunner> {
    runner: R,
}

impl MultipassBackend<TokioCommandRunner> {
    /// Backend with the production tokio runner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runner: TokioCommandRunner,
        }
    }
}

impl Default for MultipassBackend<TokioCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> MultipassBackend<R> {
    /// Backend with a custom runner (used by tests).
    #[must_use]
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> BackendProbe for MultipassBackend<R> {
    async fn available(&self) -> bool {
        self.runner.run(BACKEND_PROGRAM, &["version"]).await.is_ok()
    }
}

impl<R: CommandRunner> InstanceLifecycle for MultipassBackend<R> {
    async fn launch(&self, instance: &str) -> Result<Output> {
        self.runner
            .run(BACKEND_PROGRAM, &["launch", "--name", instance])
            .await
    }

    async fn stop(&self, instance: &str) -> Result<Output> {
        self.runner.run(BACKEND_PROGRAM, &["stop", instance]).await
    }

    async fn delete(&self, instance: &str) -> Result<Output> {
        self.runner
            .run(BACKEND_PROGRAM, &["delete", instance])
            .await
    }
}

impl<R: CommandRunner> FileTransfer for MultipassBackend<R> {
    async fn transfer_recursive(
        &self,
        local: &str,
        instance: &str,
        remote: &str,
    ) -> Result<Output> {
        let destination = format!("{instance}:{remote}");
        self.runner
            .run(
                BACKEND_PROGRAM,
                &["transfer", "--recursive", local, &destination],
            )
            .await
    }

    async fn transfer(&self, local: &str, instance: &str, remote: &str) -> Result<Output> {
        let destination = format!("{instance}:{remote}");
        self.runner
            .run(BACKEND_PROGRAM, &["transfer", local, &destination])
            .await
    }
}

impl<R: CommandRunner> RemoteExec for MultipassBackend<R> {
    async fn exec(&self, instance: &str, args: &[&str]) -> Result<Output> {
        let mut argv = vec!["exec", instance, "--"];
        argv.extend_from_slice(args);
        self.runner.run(BACKEND_PROGRAM, &argv).await
    }

    async fn shell(&self, instance: &str) -> Result<ExitStatus> {
        self.runner
            .run_status(BACKEND_PROGRAM, &["shell", instance])
            .await
    }
}
