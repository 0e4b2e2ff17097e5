//! Local staging of rendered provisioning scripts.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::application::ports::ScriptStager;

/// Stages scripts as named temporary files. The returned guard is the
/// tempfile handle itself: dropping it removes the local staging copy. The
/// copy transferred into the instance is left there.
pub struct TempScriptStager;

impl ScriptStager for TempScriptStager {
    fn stage(&self, contents: &str) -> Result<(PathBuf, Box<dyn std::any::Any>)> {
        let mut file = NamedTempFile::with_suffix(".sh").context("creating the staging file")?;
        file.write_all(contents.as_bytes())
            .context("writing the provisioning script")?;
        file.flush().context("flushing the provisioning script")?;
        let path = file.path().to_path_buf();
        Ok((path, Box::new(file)))
    }
}
