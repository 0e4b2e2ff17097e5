//! Typed domain error enums.
//!
//! Each variant carries its own interpolated fields and `Display` is the
//! single user-facing rendering. Errors cross layers as `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Pre-flight configuration errors, detected before any backend call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid instance name. The instance name should be like this: {suggested}.")]
    InvalidInstanceName { suggested: String },

    #[error("cannot access {path}: No such file or directory.")]
    ProjectNotFound { path: String },

    #[error("{path} is a single file. Only project directories can be transferred.")]
    ProjectIsFile { path: String },
}

/// Failures at the backend process boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Multipass is not installed!")]
    NotInstalled,

    #[error("multipass {step} failed: {stderr}")]
    CommandFailed {
        step: &'static str,
        code: i32,
        stderr: String,
    },
}

impl BackendError {
    /// Exit code the whole process should terminate with. Backend command
    /// failures keep the backend's own code so scripted callers see the
    /// same semantics multipass itself would give them.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotInstalled => 1,
            Self::CommandFailed { code, .. } => *code,
        }
    }
}
