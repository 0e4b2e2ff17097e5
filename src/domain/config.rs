//! Per-invocation run configuration.

use std::path::PathBuf;

/// Immutable configuration for one crash-test run, built from CLI input and
/// scoped to the process lifetime.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the multipass instance to create.
    pub instance_name: String,
    /// Local project directory to transfer (trailing separator stripped).
    pub project: PathBuf,
    /// Detect and install project dependencies inside the instance.
    pub install_dependencies: bool,
    /// Prompt to stop and delete the instance after the shell session.
    pub delete_after: bool,
}

impl RunConfig {
    /// Build a run configuration, stripping trailing path separators from
    /// the project path so its basename is usable as the destination name
    /// inside the instance.
    #[must_use]
    pub fn new(
        instance_name: String,
        project: &str,
        install_dependencies: bool,
        delete_after: bool,
    ) -> Self {
        let project = PathBuf::from(project.trim_end_matches(['/', std::path::MAIN_SEPARATOR]));
        Self {
            instance_name,
            project,
            install_dependencies,
            delete_after,
        }
    }

    /// The project's directory name, used as the destination-relative name
    /// inside the instance.
    #[must_use]
    pub fn project_name(&self) -> String {
        self.project.file_name().map_or_else(
            || self.project.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// The project path as a string for the transfer argument vector.
    #[must_use]
    pub fn project_display(&self) -> String {
        self.project.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn cfg(project: &str) -> RunConfig {
        RunConfig::new("box".to_owned(), project, false, false)
    }

    #[test]
    fn trailing_separators_are_stripped() {
        assert_eq!(cfg("projects/demo/").project, Path::new("projects/demo"));
        assert_eq!(cfg("projects/demo///").project, Path::new("projects/demo"));
        assert_eq!(cfg("projects/demo").project, Path::new("projects/demo"));
    }

    #[test]
    fn project_name_is_the_path_basename() {
        assert_eq!(cfg("demo").project_name(), "demo");
        assert_eq!(cfg("projects/demo/").project_name(), "demo");
        assert_eq!(cfg("/home/user/demo").project_name(), "demo");
    }
}
