use std::path::PathBuf;
use std::time::Duration;

/// Executables invoked by the scan, one per external tool.
///
/// Each entry is resolved through `PATH` unless it contains a path separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolPaths {
    pub subfinder: String,
    pub assetfinder: String,
    pub amass: String,
    pub httpx: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            subfinder: "subfinder".to_owned(),
            assetfinder: "assetfinder".to_owned(),
            amass: "amass".to_owned(),
            httpx: "httpx".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory in which the per-domain output directory is created.
    pub output_root: PathBuf,
    /// Runs the discovery tools concurrently.
    ///
    /// The combine stage still waits for every discovery tool to exit.
    pub parallel: bool,
    /// Kills an external tool once it has been running this long.
    ///
    /// `None` waits forever, so a hung tool blocks the whole scan.
    pub timeout: Option<Duration>,
    pub tools: ToolPaths,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            parallel: false,
            timeout: None,
            tools: ToolPaths::default(),
            quiet: 0,
        }
    }
}
