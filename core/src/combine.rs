//! # Combining Results
//!
//! Folds every `*.txt` artifact in the output directory into one set of
//! candidate hosts. On a repeated run that includes `combined.txt` and
//! `alive.txt` from the previous run.
//!
//! Lines are compared byte-exact: no trimming, no case folding. The only
//! thing dropped is the empty line.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;
use reconr_common::error::ReconError;
use tracing::{debug, info, warn};

use crate::workspace::{COMBINED_FILE, OutputDir};

pub const ARTIFACT_PATTERN: &str = "*.txt";

/// Unique, non-empty host lines in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombinedSet {
    hosts: BTreeSet<String>,
}

impl CombinedSet {
    /// Adds every non-empty `\n`-separated line of `text`.
    pub fn extend_from_text(&mut self, text: &str) {
        self.hosts.extend(
            text.split('\n')
                .filter(|line| !line.is_empty())
                .map(str::to_owned),
        );
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for CombinedSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(texts: I) -> Self {
        let mut set = CombinedSet::default();
        for text in texts {
            set.extend_from_text(text);
        }
        set
    }
}

/// Lines joined by `\n`, no trailing newline.
impl fmt::Display for CombinedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, host) in self.hosts.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            f.write_str(host)?;
        }
        Ok(())
    }
}

/// Regular files in `dir` matching [`ARTIFACT_PATTERN`], sorted by name.
pub fn list_artifacts(dir: &Path) -> Result<Vec<PathBuf>, ReconError> {
    let matcher = Glob::new(ARTIFACT_PATTERN)
        .map_err(|err| ReconError::Pattern {
            pattern: ARTIFACT_PATTERN.to_owned(),
            reason: err.to_string(),
        })?
        .compile_matcher();

    let list_err = |source| ReconError::ListFiles {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        if matcher.is_match(name) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Builds the combined host set and writes it to `combined.txt`.
///
/// Each file is split on its own, so a source lacking a trailing newline never
/// glues its last line onto the next file's first line.
pub fn combine(dir: &OutputDir) -> Result<CombinedSet, ReconError> {
    let files = list_artifacts(dir.path())?;

    let mut combined = CombinedSet::default();
    for file in &files {
        let data = fs::read(file).map_err(|source| ReconError::ReadFile {
            path: file.clone(),
            source,
        })?;
        let before = combined.len();
        combined.extend_from_text(&String::from_utf8_lossy(&data));
        debug!(
            "{} added {} new hosts",
            file.display(),
            combined.len() - before
        );
    }

    dir.write_artifact(COMBINED_FILE, combined.to_string().as_bytes())?;
    if combined.is_empty() {
        warn!("none of the {} artifacts listed a host", files.len());
    } else {
        info!(
            "combined {} unique hosts from {} files",
            combined.len(),
            files.len()
        );
    }
    Ok(combined)
}
