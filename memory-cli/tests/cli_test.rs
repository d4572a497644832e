//! Tests for the `convo` CLI: argument parsing and command output on snapshot files.
//!
//! External interactions: temporary snapshot files on disk.

use std::io::Write;

use clap::Parser;
use memory::MemoryConfig;
use memory_cli::{load_memory, run, Cli, Commands};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn snapshot_file(entries: Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", entries).unwrap();
    file
}

fn sample_snapshot() -> NamedTempFile {
    snapshot_file(json!([
        {"role": "user", "message": "Which country has the highest GDP?"},
        {"role": "assistant", "message": "The United States."},
        {"role": "user", "message": "And the lowest?"},
        {"role": "assistant", "message": "Tuvalu."},
    ]))
}

fn run_args(args: &[&str], config: MemoryConfig) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    run(cli, config)
}

/// **Test: negative numbers are accepted for --window-size and --limit.**
#[test]
fn parse_accepts_negative_numbers() {
    let cli = Cli::try_parse_from(["convo", "--window-size", "-2", "transcript", "s.json", "--limit", "-1"])
        .unwrap();
    assert_eq!(cli.window_size, Some(-2));
    match cli.command {
        Commands::Transcript { limit, previous, .. } => {
            assert_eq!(limit, Some(-1));
            assert!(!previous);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_rejects_fractional_limit() {
    assert!(Cli::try_parse_from(["convo", "transcript", "s.json", "--limit", "1.5"]).is_err());
}

/// **Test: transcript uses the configured window size (default 1 = last message).**
#[test]
fn transcript_uses_default_window() {
    let file = sample_snapshot();
    let path = file.path().to_str().unwrap();
    let out = run_args(&["convo", "transcript", path], MemoryConfig::default()).unwrap();
    assert_eq!(out, "### ANSWER\n Tuvalu.");
}

#[test]
fn transcript_with_window_flag_and_limit() {
    let file = sample_snapshot();
    let path = file.path().to_str().unwrap();

    let out = run_args(&["convo", "-w", "0", "transcript", path], MemoryConfig::default()).unwrap();
    assert_eq!(out.lines().filter(|l| l.starts_with("### ")).count(), 4);

    let out = run_args(
        &["convo", "transcript", path, "--limit", "-2"],
        MemoryConfig::default(),
    )
    .unwrap();
    assert_eq!(out, "### QUERY\n And the lowest?\n### ANSWER\n Tuvalu.");
}

#[test]
fn transcript_previous_drops_last() {
    let file = sample_snapshot();
    let path = file.path().to_str().unwrap();
    let out = run_args(
        &["convo", "transcript", path, "--limit", "2", "--previous"],
        MemoryConfig::default(),
    )
    .unwrap();
    assert_eq!(out, "### QUERY\n And the lowest?");
}

/// **Test: chat output includes the system entry from --system, then every message.**
#[test]
fn chat_includes_system_override() {
    let file = sample_snapshot();
    let path = file.path().to_str().unwrap();
    let out = run_args(
        &["convo", "chat", path, "--system", "You are a data analyst."],
        MemoryConfig::default(),
    )
    .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], json!({"role": "system", "content": "You are a data analyst."}));
    assert_eq!(entries[4], json!({"role": "assistant", "content": "Tuvalu."}));
}

#[test]
fn chat_uses_config_system_context() {
    let file = sample_snapshot();
    let path = file.path().to_str().unwrap();
    let config = MemoryConfig::default().with_system_context("From env");
    let out = run_args(&["convo", "chat", path], config).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0], json!({"role": "system", "content": "From env"}));

    let config = MemoryConfig::default().with_system_context("");
    let out = run_args(&["convo", "chat", path], config).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 4);
}

#[test]
fn rephrase_embeds_conversation_and_dataframes() {
    let file = sample_snapshot();
    let path = file.path().to_str().unwrap();
    let out = run_args(
        &[
            "convo", "-w", "2", "rephrase", path, "--query", "and the median?", "-d", "country,gdp",
        ],
        MemoryConfig::default(),
    )
    .unwrap();
    assert!(out.contains("<dataframe>\ncountry,gdp\n</dataframe>"));
    assert!(out.contains("### QUERY\n And the lowest?\n### ANSWER\n Tuvalu."));
    assert!(!out.contains("highest GDP"));
    assert!(out.contains("\"and the median?\""));
}

#[test]
fn load_memory_rejects_system_entries() {
    let file = snapshot_file(json!([{"role": "system", "message": "persona"}]));
    let err = load_memory(file.path(), &MemoryConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Restore snapshot"));
}

#[test]
fn load_memory_reports_missing_and_malformed_files() {
    let err = load_memory("/nonexistent/snapshot.json".as_ref(), &MemoryConfig::default())
        .unwrap_err();
    assert!(err.to_string().starts_with("Read snapshot"));

    let file = snapshot_file(json!({"not": "a list"}));
    let err = load_memory(file.path(), &MemoryConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("Parse snapshot"));
}

/// **Test: an over-length non-sliceable answer makes the transcript command fail.**
#[test]
fn transcript_fails_on_untruncatable_answer() {
    let file = snapshot_file(json!([
        {"role": "assistant", "message": {"payload": "x".repeat(150)}},
    ]));
    let path = file.path().to_str().unwrap();
    assert!(run_args(&["convo", "transcript", path], MemoryConfig::default()).is_err());
}
