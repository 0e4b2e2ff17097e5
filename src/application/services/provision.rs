//! The dependency-provisioning step: resolve, stage, transfer, execute.

use anyhow::{Context, Result};

use crate::application::ports::{FileTransfer, ProgressReporter, RemoteExec, ScriptStager};
use crate::application::services::session::ensure_success;
use crate::domain::config::RunConfig;
use crate::domain::ecosystem;

/// Install the project's dependencies inside the instance.
///
/// The rendered script is staged in a local file, transferred into the
/// project directory inside the instance, and executed there with `bash`.
/// A project without a recognized manifest is not an error: the step warns
/// and the session proceeds to the shell.
///
/// # Errors
///
/// Returns an error when staging fails or when the script transfer or the
/// remote execution exits non-zero.
pub async fn install_dependencies(
    cfg: &RunConfig,
    backend: &(impl FileTransfer + RemoteExec),
    stager: &impl ScriptStager,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let project_name = cfg.project_name();
    let Some(script) = ecosystem::resolve_script(&cfg.project, &project_name) else {
        reporter.warn("no supported requirements file found, skipping dependency install");
        return Ok(());
    };

    reporter.step("installing dependencies...");
    let (staged, _guard) = stager
        .stage(&script.contents)
        .context("staging the provisioning script")?;
    let local = staged.to_string_lossy().into_owned();
    let remote = format!("./{project_name}/{}", script.ecosystem.script_name());

    ensure_success(
        "transfer",
        backend.transfer(&local, &cfg.instance_name, &remote).await?,
        reporter,
    )?;
    ensure_success(
        "exec",
        backend
            .exec(&cfg.instance_name, &["bash", remote.as_str()])
            .await?,
        reporter,
    )?;
    reporter.success("dependencies installed");
    Ok(())
}
