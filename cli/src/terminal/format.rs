use std::path::Path;

use colored::*;
use reconr_core::enumerate::{EnumerationReport, ToolOutcome};

use crate::terminal::colors;

pub fn outcome_to_detail(outcome: &ToolOutcome) -> ColoredString {
    match outcome {
        ToolOutcome::Captured { lines, bytes } => format!(
            "{} {}",
            format!("{lines} lines").color(colors::HOST).bold(),
            format!("({bytes} bytes)").color(colors::MUTED)
        )
        .normal(),
        ToolOutcome::Empty => "no output".color(colors::MUTED),
        ToolOutcome::Failed(err) => format!("failed, {err}").color(colors::FAILURE),
    }
}

pub fn count_to_detail(count: usize, noun: &str) -> ColoredString {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{plural}").color(colors::HOST).bold()
}

/// Appends the artifact's file name, muted, after `detail`.
pub fn with_artifact(detail: ColoredString, artifact: &Path) -> String {
    let name = artifact
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{} {}", detail, format!("-> {name}").color(colors::MUTED))
}

/// Programs of every failed tool, as configured, joined by `, `.
pub fn failed_programs(report: &EnumerationReport) -> String {
    report
        .failed()
        .filter_map(|entry| match &entry.outcome {
            ToolOutcome::Failed(err) => Some(err.program()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use reconr_common::error::RunError;
    use reconr_core::enumerate::{EnumerationEntry, Enumerator};

    use super::*;

    #[test]
    fn pluralizes_counts() {
        colored::control::set_override(false);
        assert_eq!(count_to_detail(1, "host").to_string(), "1 host");
        assert_eq!(count_to_detail(3, "host").to_string(), "3 hosts");
    }

    #[test]
    fn empty_outcome_reads_plainly() {
        colored::control::set_override(false);
        assert_eq!(outcome_to_detail(&ToolOutcome::Empty).to_string(), "no output");
    }

    #[test]
    fn names_artifact_after_detail() {
        colored::control::set_override(false);
        let detail = with_artifact(
            "no output".normal(),
            Path::new("/scans/example.com/amass.txt"),
        );
        assert_eq!(detail, "no output -> amass.txt");
    }

    #[test]
    fn lists_configured_programs_of_failed_tools() {
        let failed = |tool: Enumerator, program: &str| EnumerationEntry {
            tool,
            artifact: PathBuf::from(tool.artifact()),
            outcome: ToolOutcome::Failed(RunError::Io {
                program: program.to_owned(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        };
        let report = EnumerationReport {
            entries: vec![
                failed(Enumerator::Subfinder, "/opt/bin/subfinder"),
                EnumerationEntry {
                    tool: Enumerator::Assetfinder,
                    artifact: PathBuf::from("Assetfinder.txt"),
                    outcome: ToolOutcome::Empty,
                },
                failed(Enumerator::Amass, "amass"),
            ],
        };

        assert_eq!(failed_programs(&report), "/opt/bin/subfinder, amass");
    }
}
