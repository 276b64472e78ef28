use anyhow::Context;
use colored::*;
use tracing::{Instrument, info_span, warn};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};
use reconr_common::{config::Config, domain::Domain, success};
use reconr_core::enumerate::Enumerator;
use reconr_core::pipeline::{ReconPipeline, ScanSummary};
use reconr_core::process::ProcessRunner;
use reconr_core::workspace::ALIVE_FILE;

pub async fn scan(domain: &Domain, cfg: &Config) -> anyhow::Result<()> {
    print::header("getting ready for recon", cfg.quiet);
    print_plan(domain, cfg);

    let span = info_span!("scan", indicatif.pb_show = true);
    let stage_span = span.clone();

    let runner = Box::new(ProcessRunner::new(cfg.timeout));
    let pipeline = ReconPipeline::new(runner, cfg.clone())
        .on_stage(move |stage| spinner::report_stage(&stage_span, stage));

    let summary: ScanSummary = pipeline
        .run(domain)
        .instrument(span)
        .await
        .with_context(|| format!("scan of {domain} aborted"))?;

    scan_ends(&summary, cfg);
    Ok(())
}

fn print_plan(domain: &Domain, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    set_key_width();
    print::aligned_line("target", domain.to_string());
    print::aligned_line(
        "output",
        cfg.output_root.join(domain.as_str()).display().to_string(),
    );
    let mode = if cfg.parallel { "parallel" } else { "sequential" };
    print::aligned_line("mode", mode);
    if let Some(timeout) = cfg.timeout {
        print::aligned_line("timeout", format!("{}s", timeout.as_secs()));
    }
}

fn scan_ends(summary: &ScanSummary, cfg: &Config) {
    if cfg.quiet < 2 {
        print_enumeration(summary, cfg);
    }

    if summary.enumeration.all_failed() {
        warn!(
            "every discovery tool failed ({}), check that they are installed and on PATH",
            format::failed_programs(&summary.enumeration)
        );
    }

    if summary.alive.alive == 0 {
        print::header("zero live hosts", cfg.quiet);
        if cfg.quiet == 0 {
            print::no_results();
        }
    }

    print_summary(summary, cfg);
    success!("Scan completed. Results saved to {}.", ALIVE_FILE);
}

fn print_enumeration(summary: &ScanSummary, cfg: &Config) {
    print::header(&format!("results for {}", summary.domain), cfg.quiet);
    set_key_width();

    for entry in &summary.enumeration.entries {
        print::aligned_line(
            entry.tool.name(),
            format::with_artifact(format::outcome_to_detail(&entry.outcome), &entry.artifact),
        );
    }
    print::aligned_line(
        "combined",
        format::count_to_detail(summary.combined_hosts, "unique host"),
    );
    print::aligned_line(
        "alive",
        format::with_artifact(
            format::count_to_detail(summary.alive.alive, "responsive host"),
            &summary.alive.artifact,
        ),
    );
}

fn print_summary(summary: &ScanSummary, cfg: &Config) {
    let alive: ColoredString = format!("{} live hosts", summary.alive.alive).bold().green();
    let checked: ColoredString = format!("{}", summary.alive.hosts_checked).bold();
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64())
        .bold()
        .yellow();
    let output: String = format!("Recon Complete: {alive} out of {checked} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        1 => {
            mprint!();
            print::print(&output);
        }
        _ => {}
    }
}

fn set_key_width() {
    let width = Enumerator::ALL
        .iter()
        .map(|tool| tool.name().len())
        .chain(["combined", "timeout", "output"].iter().map(|key| key.len()))
        .max()
        .unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(width);
}
