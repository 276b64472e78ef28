#![cfg(all(test, unix))]
//! Runs the pipeline against real executables standing in for the scanners.

use std::fs;
use std::time::Duration;

use reconr_common::config::{Config, ToolPaths};
use reconr_common::error::{ReconError, RunError};
use reconr_core::enumerate::ToolOutcome;
use reconr_core::pipeline::ReconPipeline;
use reconr_core::process::ProcessRunner;

fn tools(enumerator: &str, httpx: &str) -> ToolPaths {
    ToolPaths {
        subfinder: enumerator.to_owned(),
        assetfinder: enumerator.to_owned(),
        amass: enumerator.to_owned(),
        httpx: httpx.to_owned(),
    }
}

#[tokio::test]
async fn echo_stands_in_for_every_tool() {
    let root = tempfile::tempdir().unwrap();
    let cfg = Config {
        output_root: root.path().to_path_buf(),
        tools: tools("echo", "echo"),
        ..Config::default()
    };

    let summary = ReconPipeline::new(Box::new(ProcessRunner::new(cfg.timeout)), cfg)
        .run(&"example.com".parse().unwrap())
        .await
        .unwrap();

    let dir = root.path().join("example.com");
    assert_eq!(
        fs::read_to_string(dir.join("amass.txt")).unwrap(),
        "enum -passive -d example.com\n"
    );
    assert_eq!(summary.combined_hosts, 3);
    assert_eq!(summary.alive.hosts_checked, 3);
    assert_eq!(summary.alive.alive, 1);
    assert!(summary
        .enumeration
        .entries
        .iter()
        .all(|entry| matches!(entry.outcome, ToolOutcome::Captured { lines: 1, .. })));
}

#[tokio::test]
async fn failing_scanners_do_not_stop_the_scan() {
    let root = tempfile::tempdir().unwrap();
    let cfg = Config {
        output_root: root.path().to_path_buf(),
        parallel: true,
        tools: tools("false", "true"),
        ..Config::default()
    };

    let summary = ReconPipeline::new(Box::new(ProcessRunner::new(cfg.timeout)), cfg)
        .run(&"example.com".parse().unwrap())
        .await
        .unwrap();

    assert!(summary.enumeration.all_failed());
    assert_eq!(summary.combined_hosts, 0);
    assert_eq!(summary.alive.hosts_checked, 0);
}

#[tokio::test]
async fn hung_liveness_check_is_fatal_with_timeout() {
    let root = tempfile::tempdir().unwrap();
    let hang = root.path().join("hang.sh");
    fs::write(&hang, "#!/bin/sh\nsleep 5\n").unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&hang, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let cfg = Config {
        output_root: root.path().to_path_buf(),
        timeout: Some(Duration::from_millis(200)),
        tools: tools("true", &hang.display().to_string()),
        ..Config::default()
    };

    let err = ReconPipeline::new(Box::new(ProcessRunner::new(cfg.timeout)), cfg)
        .run(&"example.com".parse().unwrap())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ReconError::Liveness(RunError::TimedOut { .. })),
        "got {err:?}"
    );
}
