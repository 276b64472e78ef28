//! # Liveness Check
//!
//! Hands every line of `combined.txt` to the liveness checker as its own
//! argument. Unlike enumeration, any failure here aborts the scan.

use std::fs;
use std::path::{Path, PathBuf};

use reconr_common::error::ReconError;
use tracing::{info, warn};

use crate::process::{CommandRunner, Invocation};
use crate::workspace::{ALIVE_FILE, COMBINED_FILE, OutputDir};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliveReport {
    pub artifact: PathBuf,
    /// Host arguments passed to the checker.
    pub hosts_checked: usize,
    /// Non-empty lines the checker printed.
    pub alive: usize,
}

/// Reads `path` line by line, stripping `\n` or `\r\n`.
///
/// Blank lines in the middle of the file are kept.
pub fn read_hosts(path: &Path) -> Result<Vec<String>, ReconError> {
    let data = fs::read(path).map_err(|source| ReconError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&data)
        .lines()
        .map(str::to_owned)
        .collect())
}

pub fn args_for(hosts: Vec<String>) -> Vec<String> {
    let mut args = Vec::with_capacity(hosts.len() + 1);
    args.push("-silent".to_owned());
    args.extend(hosts);
    args
}

/// Probes the combined hosts with `program` and stores its output in `alive.txt`.
pub async fn check_liveness(
    runner: &dyn CommandRunner,
    program: &str,
    dir: &OutputDir,
) -> Result<AliveReport, ReconError> {
    let hosts = read_hosts(&dir.artifact(COMBINED_FILE))?;
    let hosts_checked = hosts.len();
    if hosts.is_empty() {
        warn!("no candidate hosts, {} will be started without targets", program);
    }

    let invocation = Invocation::new(program, args_for(hosts), dir.path());
    let stdout = runner
        .run(&invocation)
        .await
        .map_err(ReconError::Liveness)?;

    let artifact = dir.write_artifact(ALIVE_FILE, &stdout)?;
    let alive = stdout
        .split(|b| *b == b'\n')
        .filter(|line| !line.is_empty())
        .count();
    info!("{} of {} hosts responded", alive, hosts_checked);

    Ok(AliveReport {
        artifact,
        hosts_checked,
        alive,
    })
}
