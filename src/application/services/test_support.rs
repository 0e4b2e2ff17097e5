//! Shared test doubles for the orchestration services.
//!
//! Provides cross-platform exit-status builders, canned `Output` helpers,
//! and recording port implementations so each test module doesn't re-define
//! the same boilerplate.

use std::cell::RefCell;
use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::application::ports::{
    BackendProbe, ConfirmPrompt, FileTransfer, InstanceLifecycle, ProgressReporter, RemoteExec,
    ScriptStager,
};

/// Path every [`StagerStub`] pretends to stage scripts at.
pub const STAGED_PATH: &str = "/tmp/crashtest-staged.sh";

/// Build an `ExitStatus` from a logical exit code (cross-platform).
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn fail_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Backend spy ──────────────────────────────────────────────────────────────

/// Recording backend double. Every orchestration command appends its full
/// argument vector to `calls`; per-step results are configurable. The
/// availability probe is not recorded because it is not an orchestration
/// command.
pub struct BackendSpy {
    pub calls: RefCell<Vec<Vec<String>>>,
    pub available: bool,
    pub launch_result: Output,
    pub transfer_result: Output,
    pub exec_result: Output,
    pub stop_result: Output,
    pub delete_result: Output,
    pub shell_code: i32,
}

impl Default for BackendSpy {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            available: true,
            launch_result: ok_output(b""),
            transfer_result: ok_output(b""),
            exec_result: ok_output(b""),
            stop_result: ok_output(b""),
            delete_result: ok_output(b""),
            shell_code: 0,
        }
    }
}

impl BackendSpy {
    fn record(&self, parts: &[&str]) {
        self.calls
            .borrow_mut()
            .push(parts.iter().map(ToString::to_string).collect());
    }

    /// The recorded command verbs, in order.
    pub fn verbs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|call| call[0].clone()).collect()
    }
}

impl BackendProbe for BackendSpy {
    async fn available(&self) -> bool {
        self.available
    }
}

impl InstanceLifecycle for BackendSpy {
    async fn launch(&self, instance: &str) -> Result<Output> {
        self.record(&["launch", instance]);
        Ok(self.launch_result.clone())
    }

    async fn stop(&self, instance: &str) -> Result<Output> {
        self.record(&["stop", instance]);
        Ok(self.stop_result.clone())
    }

    async fn delete(&self, instance: &str) -> Result<Output> {
        self.record(&["delete", instance]);
        Ok(self.delete_result.clone())
    }
}

impl FileTransfer for BackendSpy {
    async fn transfer_recursive(
        &self,
        local: &str,
        instance: &str,
        remote: &str,
    ) -> Result<Output> {
        self.record(&["transfer_recursive", local, instance, remote]);
        Ok(self.transfer_result.clone())
    }

    async fn transfer(&self, local: &str, instance: &str, remote: &str) -> Result<Output> {
        self.record(&["transfer", local, instance, remote]);
        Ok(self.transfer_result.clone())
    }
}

impl RemoteExec for BackendSpy {
    async fn exec(&self, instance: &str, args: &[&str]) -> Result<Output> {
        let mut parts = vec!["exec", instance];
        parts.extend_from_slice(args);
        self.record(&parts);
        Ok(self.exec_result.clone())
    }

    async fn shell(&self, instance: &str) -> Result<ExitStatus> {
        self.record(&["shell", instance]);
        Ok(exit_status(self.shell_code))
    }
}

// ── Reporter doubles ─────────────────────────────────────────────────────────

/// Reporter that swallows everything.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn info(&self, _: &str) {}
}

/// Reporter that records every message for assertions.
#[derive(Default)]
pub struct RecordingReporter {
    pub steps: RefCell<Vec<String>>,
    pub successes: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
    pub infos: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_owned());
    }

    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_owned());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_owned());
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_owned());
    }
}

// ── Prompt and stager doubles ────────────────────────────────────────────────

/// Prompt double answering every confirmation the same way.
pub struct CannedPrompt {
    answer: bool,
}

/// A prompt that always answers `answer`.
pub fn answer_with(answer: bool) -> CannedPrompt {
    CannedPrompt { answer }
}

impl ConfirmPrompt for CannedPrompt {
    fn confirm(&self, _: &str) -> Result<bool> {
        Ok(self.answer)
    }
}

/// Stager double recording the staged contents and returning a fixed path.
#[derive(Default)]
pub struct StagerStub {
    pub contents: RefCell<Option<String>>,
}

impl ScriptStager for StagerStub {
    fn stage(&self, contents: &str) -> Result<(PathBuf, Box<dyn std::any::Any>)> {
        *self.contents.borrow_mut() = Some(contents.to_owned());
        Ok((PathBuf::from(STAGED_PATH), Box::new(())))
    }
}
