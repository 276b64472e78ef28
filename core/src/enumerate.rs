//! # Subdomain Enumeration
//!
//! Runs the passive discovery tools against the target and stores each tool's
//! stdout in its own artifact. A tool that is missing, crashes, or times out
//! does not stop the scan: its artifact is left empty and the failure is kept
//! in the [`EnumerationReport`] instead of being mistaken for "no results".

use std::path::PathBuf;

use futures::future::join_all;
use reconr_common::config::{Config, ToolPaths};
use reconr_common::domain::Domain;
use reconr_common::error::{ReconError, RunError};
use tracing::{debug, info, warn};

use crate::process::{CommandRunner, Invocation};
use crate::workspace::OutputDir;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Enumerator {
    Subfinder,
    Assetfinder,
    Amass,
}

impl Enumerator {
    /// Invocation order when running sequentially.
    pub const ALL: [Enumerator; 3] = [
        Enumerator::Subfinder,
        Enumerator::Assetfinder,
        Enumerator::Amass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Enumerator::Subfinder => "subfinder",
            Enumerator::Assetfinder => "assetfinder",
            Enumerator::Amass => "amass",
        }
    }

    /// File in the output directory that receives the tool's stdout.
    pub fn artifact(self) -> &'static str {
        match self {
            Enumerator::Subfinder => "Subfinder.txt",
            Enumerator::Assetfinder => "Assetfinder.txt",
            Enumerator::Amass => "amass.txt",
        }
    }

    pub fn args(self, domain: &Domain) -> Vec<String> {
        let domain = domain.to_string();
        match self {
            Enumerator::Subfinder => vec!["-d".into(), domain, "-silent".into()],
            Enumerator::Assetfinder => vec!["-subs-only".into(), domain],
            Enumerator::Amass => vec!["enum".into(), "-passive".into(), "-d".into(), domain],
        }
    }

    pub fn program(self, tools: &ToolPaths) -> &str {
        match self {
            Enumerator::Subfinder => &tools.subfinder,
            Enumerator::Assetfinder => &tools.assetfinder,
            Enumerator::Amass => &tools.amass,
        }
    }
}

#[derive(Debug)]
pub enum ToolOutcome {
    /// The tool exited cleanly and printed something.
    Captured { bytes: usize, lines: usize },
    /// The tool exited cleanly without printing anything.
    Empty,
    /// The tool could not be run to a clean exit.
    Failed(RunError),
}

impl ToolOutcome {
    fn from_stdout(stdout: &[u8]) -> Self {
        if stdout.is_empty() {
            return ToolOutcome::Empty;
        }
        ToolOutcome::Captured {
            bytes: stdout.len(),
            lines: stdout
                .split(|b| *b == b'\n')
                .filter(|line| !line.is_empty())
                .count(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ToolOutcome::Failed(_))
    }
}

#[derive(Debug)]
pub struct EnumerationEntry {
    pub tool: Enumerator,
    pub artifact: PathBuf,
    pub outcome: ToolOutcome,
}

#[derive(Debug, Default)]
pub struct EnumerationReport {
    /// One entry per tool, in [`Enumerator::ALL`] order.
    pub entries: Vec<EnumerationEntry>,
}

impl EnumerationReport {
    pub fn failed(&self) -> impl Iterator<Item = &EnumerationEntry> {
        self.entries.iter().filter(|entry| entry.outcome.is_failed())
    }

    pub fn all_failed(&self) -> bool {
        !self.entries.is_empty() && self.failed().count() == self.entries.len()
    }
}

/// Runs every discovery tool and writes one artifact per tool.
///
/// Only artifact write failures are returned as errors.
pub async fn enumerate(
    runner: &dyn CommandRunner,
    cfg: &Config,
    domain: &Domain,
    dir: &OutputDir,
) -> Result<EnumerationReport, ReconError> {
    let entries = if cfg.parallel {
        let runs = Enumerator::ALL
            .iter()
            .map(|tool| run_tool(runner, *tool, &cfg.tools, domain, dir));
        join_all(runs)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let mut entries = Vec::with_capacity(Enumerator::ALL.len());
        for tool in Enumerator::ALL {
            entries.push(run_tool(runner, tool, &cfg.tools, domain, dir).await?);
        }
        entries
    };

    Ok(EnumerationReport { entries })
}

async fn run_tool(
    runner: &dyn CommandRunner,
    tool: Enumerator,
    tools: &ToolPaths,
    domain: &Domain,
    dir: &OutputDir,
) -> Result<EnumerationEntry, ReconError> {
    let invocation = Invocation::new(tool.program(tools), tool.args(domain), dir.path());
    let (artifact, outcome) = match runner.run(&invocation).await {
        Ok(stdout) => (
            dir.write_artifact(tool.artifact(), &stdout)?,
            ToolOutcome::from_stdout(&stdout),
        ),
        Err(err) => (
            dir.write_artifact(tool.artifact(), &[])?,
            ToolOutcome::Failed(err),
        ),
    };

    match &outcome {
        ToolOutcome::Failed(err) => {
            warn!("{} produced no results: {}", tool.name(), err);
            if let RunError::Exit { stderr, .. } = err {
                if !stderr.is_empty() {
                    debug!("{} stderr: {}", tool.name(), stderr);
                }
            }
        }
        ToolOutcome::Empty => info!("{} found nothing", tool.name()),
        ToolOutcome::Captured { lines, .. } => info!("{} reported {} lines", tool.name(), lines),
    }

    Ok(EnumerationEntry {
        tool,
        artifact,
        outcome,
    })
}
