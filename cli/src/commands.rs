pub mod scan;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser};
use reconr_common::config::{Config, ToolPaths};
use reconr_common::domain::Domain;

#[derive(Parser)]
#[command(name = "reconr", version)]
#[command(about = "Subdomain enumeration and liveness checks in one run.")]
pub struct CommandLine {
    /// Target domain, also used as the output directory name
    pub domain: Domain,

    /// Directory in which the per-domain output directory is created
    #[arg(short, long, env = "RECONR_OUTPUT_ROOT", default_value = ".")]
    pub output_root: PathBuf,

    /// Run the discovery tools concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Kill any external tool still running after this many seconds
    #[arg(long, env = "RECONR_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub tools: ToolArgs,

    /// Print less; repeat to print only the final result
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// Print more; repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Tools")]
pub struct ToolArgs {
    /// Subdomain discovery tool run with `-d <domain> -silent`
    #[arg(long, env = "RECONR_SUBFINDER", default_value = "subfinder", value_name = "BIN")]
    pub subfinder: String,

    /// Subdomain discovery tool run with `-subs-only <domain>`
    #[arg(long, env = "RECONR_ASSETFINDER", default_value = "assetfinder", value_name = "BIN")]
    pub assetfinder: String,

    /// Subdomain discovery tool run with `enum -passive -d <domain>`
    #[arg(long, env = "RECONR_AMASS", default_value = "amass", value_name = "BIN")]
    pub amass: String,

    /// Liveness checker run with `-silent` and one argument per host
    #[arg(long, env = "RECONR_HTTPX", default_value = "httpx", value_name = "BIN")]
    pub httpx: String,
}

impl CommandLine {
    /// Parses `argv`, exiting with status 1 on any usage error.
    ///
    /// `--help` and `--version` still exit with status 0.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(commands) => commands,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    print!("{}", err.render());
                    process::exit(1);
                }
            },
        }
    }

    pub fn config(&self) -> Config {
        Config {
            output_root: self.output_root.clone(),
            parallel: self.parallel,
            timeout: self.timeout.map(Duration::from_secs),
            tools: ToolPaths {
                subfinder: self.tools.subfinder.clone(),
                assetfinder: self.tools.assetfinder.clone(),
                amass: self.tools.amass.clone(),
                httpx: self.tools.httpx.clone(),
            },
            quiet: self.quiet,
        }
    }
}
