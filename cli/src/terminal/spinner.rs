use colored::*;
use indicatif::ProgressStyle;
use reconr_core::pipeline::Stage;
use tracing::Span;
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::terminal::{colors, logging::ReconFormatter};

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the verbosity flags when it is set.
pub fn init_logging(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")?.tick_strings(TICKS);
    let indicatif_layer = IndicatifLayer::new().with_progress_style(style);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose, quiet)))?;

    let fmt_layer = fmt::layer()
        .event_format(ReconFormatter)
        .with_writer(indicatif_layer.get_stdout_writer());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .try_init()?;

    Ok(())
}

fn default_directives(verbose: u8, quiet: u8) -> String {
    if quiet > 0 {
        return "warn,reconr::print=info,reconr::success=info".to_owned();
    }
    match verbose {
        0 => "info".to_owned(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

pub fn report_stage(span: &Span, stage: Stage) {
    span.pb_set_message(&format!(
        "{}",
        format!("{stage}...").color(colors::TEXT_DEFAULT)
    ));
}
