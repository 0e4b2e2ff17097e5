//! Project ecosystem detection and provisioning-script resolution.

use std::path::Path;

use crate::domain::script;

/// Dependency ecosystem of a project, identified by a manifest file at the
/// project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Python,
}

impl Ecosystem {
    /// File name the provisioning script is given inside the instance.
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::Python => "python_dependencies.sh",
        }
    }
}

/// Manifest markers checked in priority order; the first match wins.
/// New ecosystems (e.g. a Node `package.json`) slot in as extra rows.
const MANIFEST_MARKERS: &[(&str, Ecosystem)] = &[("requirements.txt", Ecosystem::Python)];

/// A rendered provisioning script together with the ecosystem it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningScript {
    pub ecosystem: Ecosystem,
    pub contents: String,
}

/// Detect the project's ecosystem from the immediate contents of its root.
///
/// Returns `None` when no known manifest is present or the directory cannot
/// be read; a missing path is "no ecosystem", not an error.
#[must_use]
pub fn detect_ecosystem(project: &Path) -> Option<Ecosystem> {
    let entries = std::fs::read_dir(project).ok()?;
    let names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    MANIFEST_MARKERS
        .iter()
        .find(|(marker, _)| names.iter().any(|name| name == marker))
        .map(|&(_, ecosystem)| ecosystem)
}

/// Resolve the provisioning script for a project, if its ecosystem is
/// recognized.
#[must_use]
pub fn resolve_script(project: &Path, project_name: &str) -> Option<ProvisioningScript> {
    detect_ecosystem(project).map(|ecosystem| ProvisioningScript {
        ecosystem,
        contents: script::render(ecosystem, project_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_txt_detects_python() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("requirements.txt"), "requests\n").expect("write manifest");

        assert_eq!(detect_ecosystem(dir.path()), Some(Ecosystem::Python));
    }

    #[test]
    fn unrecognized_manifests_detect_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("package.json"), "{}\n").expect("write manifest");
        std::fs::write(dir.path().join("main.js"), "\n").expect("write source");

        assert_eq!(detect_ecosystem(dir.path()), None);
    }

    #[test]
    fn missing_directories_detect_nothing() {
        assert_eq!(detect_ecosystem(Path::new("definitely/not/here")), None);
    }

    #[test]
    fn resolve_script_renders_for_python_projects() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("requirements.txt"), "requests\n").expect("write manifest");

        let script = resolve_script(dir.path(), "demo").expect("script should resolve");
        assert_eq!(script.ecosystem, Ecosystem::Python);
        assert_eq!(script.ecosystem.script_name(), "python_dependencies.sh");
        assert!(script.contents.contains("./demo/requirements.txt"));
    }

    #[test]
    fn resolve_script_is_none_without_a_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(resolve_script(dir.path(), "demo").is_none());
    }
}
