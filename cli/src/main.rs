mod commands;
mod terminal;

use std::process;

use commands::{CommandLine, scan};
use terminal::{print, spinner};
use tracing::error;

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    if let Err(err) = spinner::init_logging(commands.verbose, commands.quiet) {
        println!("Error initializing logging: {err:#}");
        process::exit(1);
    }

    let cfg = commands.config();
    print::banner(commands.no_banner, cfg.quiet);

    if let Err(err) = scan::scan(&commands.domain, &cfg).await {
        error!("{err:#}");
        process::exit(1);
    }
}
