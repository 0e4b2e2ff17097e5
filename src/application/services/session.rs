//! The crash-test session orchestrator.
//!
//! Drives the fixed pipeline: probe the backend, validate the arguments,
//! launch the instance, transfer the project, optionally install
//! dependencies, open an interactive shell, and optionally tear the instance
//! down. Every backend step is awaited to completion and a non-zero exit
//! short-circuits the rest of the run.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::{
    ConfirmPrompt, InstanceLifecycle, ProgressReporter, ScriptStager, VmBackend,
};
use crate::application::services::provision;
use crate::domain::config::RunConfig;
use crate::domain::error::BackendError;
use crate::domain::validate::{validate_instance_name, validate_project_path};

/// Run one crash-test session end to end.
///
/// # Errors
///
/// Returns `BackendError::NotInstalled` when the backend binary is missing,
/// a validation error when the instance name or project path is rejected,
/// and `BackendError::CommandFailed` (carrying the backend's exit code and
/// stderr) when any backend step exits non-zero.
pub async fn run(
    cfg: &RunConfig,
    backend: &impl VmBackend,
    stager: &impl ScriptStager,
    reporter: &impl ProgressReporter,
    prompt: &impl ConfirmPrompt,
) -> Result<()> {
    if !backend.available().await {
        return Err(BackendError::NotInstalled.into());
    }
    check_arguments(cfg)?;

    reporter.step(&format!("creating instance '{}'...", cfg.instance_name));
    ensure_success("launch", backend.launch(&cfg.instance_name).await?, reporter)?;
    reporter.success(&format!("instance '{}' created", cfg.instance_name));

    reporter.step("transferring the project...");
    let source = format!("{}/", cfg.project_display());
    ensure_success(
        "transfer",
        backend
            .transfer_recursive(&source, &cfg.instance_name, ".")
            .await?,
        reporter,
    )?;
    reporter.success(&format!("{} transferred", cfg.project_name()));

    if cfg.install_dependencies {
        provision::install_dependencies(cfg, backend, stager, reporter).await?;
    }

    reporter.step("opening the shell...");
    // The shell session's own exit code is not a failure of this tool.
    let _ = backend.shell(&cfg.instance_name).await?;

    if cfg.delete_after {
        teardown(cfg, backend, reporter, prompt).await?;
    }
    Ok(())
}

/// Run both validations and report every failing diagnostic, not just the
/// first one.
fn check_arguments(cfg: &RunConfig) -> Result<()> {
    let mut diagnostics = Vec::new();
    if let Err(e) = validate_instance_name(&cfg.instance_name) {
        diagnostics.push(e.to_string());
    }
    if let Err(e) = validate_project_path(&cfg.project) {
        diagnostics.push(e.to_string());
    }
    if diagnostics.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{}", diagnostics.join("\n"))
    }
}

/// Stop and delete the instance, but only after an explicit confirmation.
/// An instance must be stopped before the backend will delete it.
async fn teardown(
    cfg: &RunConfig,
    backend: &impl InstanceLifecycle,
    reporter: &impl ProgressReporter,
    prompt: &impl ConfirmPrompt,
) -> Result<()> {
    let question = format!(
        "Are you sure you want to delete instance '{}'?",
        cfg.instance_name
    );
    if !prompt.confirm(&question)? {
        reporter.warn("deletion aborted, the instance is still running");
        return Ok(());
    }

    reporter.step("stopping the instance...");
    ensure_success("stop", backend.stop(&cfg.instance_name).await?, reporter)?;
    reporter.success(&format!("instance '{}' stopped", cfg.instance_name));

    reporter.step("deleting the instance...");
    ensure_success("delete", backend.delete(&cfg.instance_name).await?, reporter)?;
    reporter.success("instance deleted");
    Ok(())
}

/// Surface a backend command's stdout and translate a non-zero exit into a
/// fatal `CommandFailed` carrying the backend's own exit code and stderr.
pub(crate) fn ensure_success(
    step: &'static str,
    output: Output,
    reporter: &impl ProgressReporter,
) -> Result<(), BackendError> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        reporter.info(stdout.trim());
    }
    if output.status.success() {
        return Ok(());
    }
    Err(BackendError::CommandFailed {
        step,
        code: output.status.code().unwrap_or(1),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
    })
}
