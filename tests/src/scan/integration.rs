#![cfg(test)]
use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;

use reconr_common::config::Config;
use reconr_common::domain::Domain;
use reconr_core::combine;
use reconr_core::enumerate::ToolOutcome;
use reconr_core::pipeline::ReconPipeline;
use reconr_core::workspace::OutputDir;

use crate::utils::{ScriptedRunner, config};

fn example() -> Domain {
    "example.com".parse().unwrap()
}

fn line_set(text: &str) -> BTreeSet<String> {
    text.split('\n').map(str::to_owned).collect()
}

#[tokio::test]
async fn overlapping_tools_combine_to_three_hosts() {
    let root = tempfile::tempdir().unwrap();
    let runner = Arc::new(
        ScriptedRunner::new()
            .reply("subfinder", "a.com\nb.com\n")
            .reply("assetfinder", "b.com\nc.com\n")
            .reply("httpx", "https://a.com\nhttps://c.com\n"),
    );

    let summary = ReconPipeline::new(Box::new(runner.clone()), config(root.path()))
        .run(&example())
        .await
        .unwrap();

    let dir = root.path().join("example.com");
    let combined = fs::read_to_string(dir.join("combined.txt")).unwrap();
    assert_eq!(line_set(&combined), line_set("a.com\nb.com\nc.com"));
    assert_eq!(summary.combined_hosts, 3);
    assert!(matches!(
        summary.enumeration.entries[2].outcome,
        ToolOutcome::Failed(_)
    ));
    assert_eq!(
        fs::read_to_string(dir.join("alive.txt")).unwrap(),
        "https://a.com\nhttps://c.com\n"
    );
}

#[tokio::test]
async fn liveness_receives_one_argument_per_combined_line() {
    let root = tempfile::tempdir().unwrap();
    let runner = Arc::new(
        ScriptedRunner::new()
            .reply("subfinder", "a.com\n\nb.com\n")
            .reply("assetfinder", "c.com\na.com\n")
            .reply("amass", "d.com\n")
            .reply("httpx", ""),
    );

    ReconPipeline::new(Box::new(runner.clone()), config(root.path()))
        .run(&example())
        .await
        .unwrap();

    let combined = fs::read_to_string(root.path().join("example.com/combined.txt")).unwrap();
    let httpx = runner.call_to("httpx").unwrap();
    assert_eq!(httpx.args[0], "-silent");
    assert_eq!(httpx.args.len() - 1, combined.lines().count());
    assert!(httpx.args.iter().all(|arg| !arg.is_empty()));
}

#[tokio::test]
async fn parallel_and_sequential_runs_agree() {
    let sequential = tempfile::tempdir().unwrap();
    let parallel = tempfile::tempdir().unwrap();
    let script = || {
        ScriptedRunner::new()
            .reply("subfinder", "www.example.com\napi.example.com\n")
            .reply("amass", "api.example.com\nmail.example.com\n")
            .reply("httpx", "https://www.example.com\n")
    };

    ReconPipeline::new(Box::new(script()), config(sequential.path()))
        .run(&example())
        .await
        .unwrap();
    let cfg = Config {
        parallel: true,
        ..config(parallel.path())
    };
    ReconPipeline::new(Box::new(script()), cfg)
        .run(&example())
        .await
        .unwrap();

    for name in ["Subfinder.txt", "Assetfinder.txt", "amass.txt", "combined.txt", "alive.txt"] {
        let a = fs::read(sequential.path().join("example.com").join(name)).unwrap();
        let b = fs::read(parallel.path().join("example.com").join(name)).unwrap();
        assert_eq!(a, b, "{name} differs");
    }
}

#[tokio::test]
async fn rerun_folds_previous_results_in() {
    let root = tempfile::tempdir().unwrap();
    let script = || {
        ScriptedRunner::new()
            .reply("subfinder", "a.com\n")
            .reply("httpx", "https://a.com\n")
    };

    let first = ReconPipeline::new(Box::new(script()), config(root.path()))
        .run(&example())
        .await
        .unwrap();
    let second = ReconPipeline::new(Box::new(script()), config(root.path()))
        .run(&example())
        .await
        .unwrap();

    assert_eq!(first.combined_hosts, 1);
    assert_eq!(second.combined_hosts, 2);
    let combined = fs::read_to_string(root.path().join("example.com/combined.txt")).unwrap();
    assert_eq!(combined, "a.com\nhttps://a.com");
}

#[test]
fn combining_fixed_sources_twice_gives_same_set() {
    let root = tempfile::tempdir().unwrap();
    let dir = OutputDir::prepare(root.path(), &example()).unwrap();
    fs::write(dir.artifact("Subfinder.txt"), "b.com\na.com\n\n").unwrap();
    fs::write(dir.artifact("amass.txt"), "c.com\nb.com").unwrap();

    let first = combine::combine(&dir).unwrap();
    let first_file = fs::read_to_string(dir.artifact("combined.txt")).unwrap();
    let second = combine::combine(&dir).unwrap();
    let second_file = fs::read_to_string(dir.artifact("combined.txt")).unwrap();

    assert_eq!(first, second);
    assert_eq!(line_set(&first_file), line_set(&second_file));
    assert!(!line_set(&second_file).contains(""));
}
