//! # Scan Pipeline
//!
//! Drives the four stages in a fixed order:
//!
//! ```text
//! Init -> Enumerate -> Combine -> CheckLiveness -> Done
//! ```
//!
//! Any [`ReconError`] ends the run on the spot. Failed discovery tools do not
//! count as errors; they are reported in [`ScanSummary::enumeration`].

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use reconr_common::config::Config;
use reconr_common::domain::Domain;
use reconr_common::error::ReconError;
use tracing::debug;

use crate::combine;
use crate::enumerate::{self, EnumerationReport};
use crate::liveness::{self, AliveReport};
use crate::process::CommandRunner;
use crate::workspace::OutputDir;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    Enumerate,
    Combine,
    CheckLiveness,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Init => "preparing output directory",
            Stage::Enumerate => "enumerating subdomains",
            Stage::Combine => "combining results",
            Stage::CheckLiveness => "checking which hosts are alive",
            Stage::Done => "done",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub struct ScanSummary {
    pub domain: Domain,
    pub output_dir: PathBuf,
    pub enumeration: EnumerationReport,
    pub combined_hosts: usize,
    pub alive: AliveReport,
    pub elapsed: Duration,
}

type StageObserver = Box<dyn Fn(Stage) + Send + Sync>;

pub struct ReconPipeline {
    runner: Box<dyn CommandRunner>,
    cfg: Config,
    on_stage: Option<StageObserver>,
}

impl ReconPipeline {
    pub fn new(runner: Box<dyn CommandRunner>, cfg: Config) -> Self {
        Self {
            runner,
            cfg,
            on_stage: None,
        }
    }

    /// Calls `observer` each time the pipeline enters a new stage.
    pub fn on_stage(mut self, observer: impl Fn(Stage) + Send + Sync + 'static) -> Self {
        self.on_stage = Some(Box::new(observer));
        self
    }

    fn enter(&self, stage: Stage) {
        debug!("stage: {}", stage);
        if let Some(observer) = &self.on_stage {
            observer(stage);
        }
    }

    pub async fn run(&self, domain: &Domain) -> Result<ScanSummary, ReconError> {
        let start_time = Instant::now();
        let runner = self.runner.as_ref();

        self.enter(Stage::Init);
        let dir = OutputDir::prepare(&self.cfg.output_root, domain)?;

        self.enter(Stage::Enumerate);
        let enumeration = enumerate::enumerate(runner, &self.cfg, domain, &dir).await?;

        self.enter(Stage::Combine);
        let combined = combine::combine(&dir)?;

        self.enter(Stage::CheckLiveness);
        let alive = liveness::check_liveness(runner, &self.cfg.tools.httpx, &dir).await?;

        self.enter(Stage::Done);
        Ok(ScanSummary {
            domain: domain.clone(),
            output_dir: dir.path().to_path_buf(),
            enumeration,
            combined_hosts: combined.len(),
            alive,
            elapsed: start_time.elapsed(),
        })
    }
}
