//! # Output Directory
//!
//! All artifacts of a scan live side by side in `<root>/<domain>/`. Files are
//! overwritten on every run and never cleaned up.

use std::fs::{self, DirBuilder};
use std::path::{Path, PathBuf};

use reconr_common::domain::Domain;
use reconr_common::error::ReconError;
use tracing::debug;

pub const COMBINED_FILE: &str = "combined.txt";
pub const ALIVE_FILE: &str = "alive.txt";

#[derive(Clone, Debug)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Creates `<root>/<domain>` and any missing parents.
    ///
    /// Succeeds if the directory already exists. Fails if the path exists and
    /// is not a directory.
    pub fn prepare(root: &Path, domain: &Domain) -> Result<Self, ReconError> {
        let path = root.join(domain.as_str());

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }

        builder
            .create(&path)
            .map_err(|source| ReconError::CreateDir {
                path: path.clone(),
                source,
            })?;

        debug!("output directory ready at {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn artifact(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Replaces the artifact `name` with `contents`.
    pub fn write_artifact(&self, name: &str, contents: &[u8]) -> Result<PathBuf, ReconError> {
        let path = self.artifact(name);
        fs::write(&path, contents).map_err(|source| ReconError::WriteFile {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
