//! # External Processes
//!
//! Every tool the scan depends on is an opaque executable. This module is the
//! only place that spawns them; the stages talk to [`CommandRunner`] so tests
//! can swap in a scripted runner.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reconr_common::error::RunError;
use tokio::process::Command;
use tracing::{debug, trace};

/// A single program call: what to run, with which arguments, from where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs an [`Invocation`] to completion and returns its standard output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Resolves to the captured stdout only if the program exited successfully.
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunError>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for Arc<T> {
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunError> {
        (**self).run(invocation).await
    }
}

/// Spawns real child processes on the tokio runtime.
///
/// Stdin is always null, stdout and stderr are captured.
#[derive(Clone, Debug, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunError> {
        let program = invocation.program.clone();
        debug!("running {}", invocation);

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Io {
                program: program.clone(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let waited = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| RunError::TimedOut {
                    program: program.clone(),
                    timeout,
                })?,
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|source| RunError::Io {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            return Err(RunError::Exit {
                program,
                status: output.status,
                stderr,
            });
        }

        trace!(bytes = output.stdout.len(), "{} finished", program);
        Ok(output.stdout)
    }
}
