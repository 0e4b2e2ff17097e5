//! Instance-name and project-path validation.

use std::path::Path;

use crate::domain::error::ValidationError;

/// Check the instance name format. Multipass rejects underscores, so the
/// diagnostic proposes the hyphenated form for the user to retry with.
///
/// # Errors
///
/// Returns `InvalidInstanceName` when `name` contains an underscore.
pub fn validate_instance_name(name: &str) -> Result<(), ValidationError> {
    if name.contains('_') {
        return Err(ValidationError::InvalidInstanceName {
            suggested: name.replace('_', "-"),
        });
    }
    Ok(())
}

/// Check that the project path exists and is a directory.
///
/// # Errors
///
/// Returns `ProjectIsFile` for a regular file and `ProjectNotFound` for a
/// path that does not exist.
pub fn validate_project_path(path: &Path) -> Result<(), ValidationError> {
    if path.is_file() {
        return Err(ValidationError::ProjectIsFile {
            path: path.display().to_string(),
        });
    }
    if !path.exists() {
        return Err(ValidationError::ProjectNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Combined check: true only when both the name and the path are valid.
/// Both checks run regardless of the other's outcome.
#[must_use]
pub fn validate_all(name: &str, path: &Path) -> bool {
    let name_ok = validate_instance_name(name).is_ok();
    let path_ok = validate_project_path(path).is_ok();
    name_ok && path_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_without_underscores_pass() {
        for name in ["sandbox", "my-app", "a", "test-instance-2"] {
            assert!(validate_instance_name(name).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn underscored_names_fail_with_the_hyphenated_suggestion() {
        let err = validate_instance_name("my_cool_app").expect_err("underscores must fail");
        assert_eq!(
            err,
            ValidationError::InvalidInstanceName {
                suggested: "my-cool-app".to_owned(),
            }
        );
        assert!(err.to_string().contains("my-cool-app"));
    }

    #[test]
    fn missing_paths_fail_as_not_found() {
        let err = validate_project_path(Path::new("definitely/not/here"))
            .expect_err("missing path must fail");
        assert!(matches!(err, ValidationError::ProjectNotFound { .. }));
        assert!(err.to_string().contains("definitely/not/here"));
    }

    #[test]
    fn single_files_fail_as_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("script.py");
        std::fs::write(&file, "print('hi')\n").expect("write file");

        let err = validate_project_path(&file).expect_err("a file must fail");
        assert!(matches!(err, ValidationError::ProjectIsFile { .. }));
    }

    #[test]
    fn directories_pass() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(validate_project_path(dir.path()).is_ok());
    }

    #[test]
    fn validate_all_truth_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good_path = dir.path();
        let bad_path = Path::new("definitely/not/here");

        assert!(validate_all("good-name", good_path));
        assert!(!validate_all("bad_name", good_path));
        assert!(!validate_all("good-name", bad_path));
        assert!(!validate_all("bad_name", bad_path));
    }
}
