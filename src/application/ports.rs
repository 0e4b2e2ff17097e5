//! Port trait definitions for the application layer.
//!
//! Ports are the contracts infrastructure must fulfill. This file imports
//! only from `crate::domain` and the standard library; production
//! implementations live in `crate::infra` and `crate::output`.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::Result;

// ── VM port traits ───────────────────────────────────────────────────────────

/// Instance lifecycle operations: create, stop, delete.
#[allow(async_fn_in_trait)]
pub trait InstanceLifecycle {
    /// Launch a new instance with the given name.
    async fn launch(&self, instance: &str) -> Result<Output>;
    /// Stop a running instance.
    async fn stop(&self, instance: &str) -> Result<Output>;
    /// Delete a stopped instance.
    async fn delete(&self, instance: &str) -> Result<Output>;
}

/// Host-to-instance file transfer.
#[allow(async_fn_in_trait)]
pub trait FileTransfer {
    /// Recursively transfer a directory into the instance.
    async fn transfer_recursive(&self, local: &str, instance: &str, remote: &str)
    -> Result<Output>;
    /// Transfer a single file into the instance.
    async fn transfer(&self, local: &str, instance: &str, remote: &str) -> Result<Output>;
}

/// Command execution inside the instance.
#[allow(async_fn_in_trait)]
pub trait RemoteExec {
    /// Execute a command inside the instance and capture its output.
    async fn exec(&self, instance: &str, args: &[&str]) -> Result<Output>;
    /// Open an interactive shell with inherited stdio; blocks until the user
    /// exits the session.
    async fn shell(&self, instance: &str) -> Result<ExitStatus>;
}

/// Backend discovery. The probe is not an orchestration command; it only
/// answers whether the backend binary can be invoked at all.
#[allow(async_fn_in_trait)]
pub trait BackendProbe {
    /// Whether the backend binary is available on this system.
    async fn available(&self) -> bool;
}

/// Composite trait: any type implementing the four VM sub-traits is a full
/// backend.
pub trait VmBackend: InstanceLifecycle + FileTransfer + RemoteExec + BackendProbe {}

/// Blanket implementation: the sub-traits are the whole contract.
impl<T> VmBackend for T where T: InstanceLifecycle + FileTransfer + RemoteExec + BackendProbe {}

// ── Command runner port ──────────────────────────────────────────────────────

/// Abstracts process execution so the backend adapter can be swapped or
/// mocked. No timeout logic: a hung command hangs the tool by design.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion with stdout and stderr captured.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with inherited stdio (interactive pass-through) and
    /// return only its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Script staging port ──────────────────────────────────────────────────────

/// Stages a rendered provisioning script in a local file so it can be
/// transferred into the instance.
pub trait ScriptStager {
    /// Write `contents` to a staging location.
    ///
    /// Returns `(path, guard)`: the staged file's path and a guard that
    /// removes the file when dropped. The caller must keep the guard alive
    /// until the transfer completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging file cannot be created or written.
    fn stage(&self, contents: &str) -> Result<(PathBuf, Box<dyn std::any::Any>)>;
}

// ── Progress reporting port ──────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Surface informational output (e.g. a backend command's stdout).
    fn info(&self, message: &str);
}

// ── Confirmation port ────────────────────────────────────────────────────────

/// Interactive yes/no confirmation. Only an explicit affirmative confirms;
/// anything else, including empty input, declines.
pub trait ConfirmPrompt {
    /// Ask the user to confirm `question`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written to the terminal.
    fn confirm(&self, question: &str) -> Result<bool>;
}
