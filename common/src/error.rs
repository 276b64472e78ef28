use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Why an external tool produced no usable output.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not run `{program}`")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{program}` was killed after {}s", .timeout.as_secs_f64())]
    TimedOut { program: String, timeout: Duration },
}

impl RunError {
    pub fn program(&self) -> &str {
        match self {
            RunError::Io { program, .. }
            | RunError::Exit { program, .. }
            | RunError::TimedOut { program, .. } => program,
        }
    }
}

/// Errors that abort a scan.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("could not create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not list files in {}", .path.display())]
    ListFiles {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid artifact pattern `{pattern}`: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("could not read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("liveness check failed")]
    Liveness(#[source] RunError),
}
