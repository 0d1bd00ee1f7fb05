//! Unit tests for CLI module
//!
//! Runs commands against in-memory standard streams and checks value
//! formatting. File-based behaviour is covered by the integration tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use crate::{
    TransmogrifyError,
    cli::{Cli, Command, Commands, StdStreams, formatting::format_value, run},
    document::Document,
    tracing_config::LogLevel,
};
use clap::Parser;

fn run_with_stdin(args: &[&str], stdin: &str) -> (Result<(), TransmogrifyError>, String) {
    let mut stdin = Cursor::new(stdin.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let mut streams = StdStreams {
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let mut argv = vec!["transmogrify"];
    argv.extend_from_slice(args);
    let result = run(argv, &mut streams);

    (result, String::from_utf8(stdout).unwrap())
}

#[test]
fn formats_lists_all_formats() {
    let (result, stdout) = run_with_stdin(&["formats"], "");

    assert!(result.is_ok());
    assert_eq!(stdout, "json, toml, yaml\n");
}

#[test]
fn formats_with_extensions() {
    let (result, stdout) = run_with_stdin(&["formats", "--extensions"], "");

    assert!(result.is_ok());
    assert_eq!(stdout, "json: .json\ntoml: .toml\nyaml: .yaml, .yml\n");
}

#[test]
fn convert_between_standard_streams() {
    let (result, stdout) = run_with_stdin(
        &["convert", "-F", "json", "-f", "toml"],
        r#"{"hello": "world"}"#,
    );

    assert!(result.is_ok());
    assert_eq!(stdout, "hello = \"world\"\n");
}

#[test]
fn convert_long_flags() {
    let (result, stdout) = run_with_stdin(
        &[
            "convert",
            "--input",
            "-",
            "--output",
            "-",
            "--input-format",
            "yaml",
            "--output-format",
            "json",
        ],
        "hello: world\n",
    );

    assert!(result.is_ok());
    assert_eq!(stdout, "{\n  \"hello\": \"world\"\n}\n");
}

#[test]
fn convert_stdin_without_format_fails() {
    let (result, stdout) = run_with_stdin(&["convert", "-f", "json"], "{}");

    assert!(matches!(
        result,
        Err(TransmogrifyError::FormatResolution { role: "input", .. })
    ));
    assert!(stdout.is_empty());
}

#[test]
fn convert_stdout_without_format_fails() {
    let (result, _) = run_with_stdin(&["convert", "-F", "json"], "{}");

    assert!(matches!(
        result,
        Err(TransmogrifyError::FormatResolution { role: "output", .. })
    ));
}

#[test]
fn convert_malformed_input_fails_without_output() {
    let (result, stdout) = run_with_stdin(&["convert", "-F", "json", "-f", "yaml"], "{not json");

    assert!(matches!(result, Err(TransmogrifyError::Parse { .. })));
    assert!(stdout.is_empty());
}

#[test]
fn get_key_prints_string_raw() {
    let (result, stdout) =
        run_with_stdin(&["get-key", "-F", "json", "hello"], r#"{"hello": "world"}"#);

    assert!(result.is_ok());
    assert_eq!(stdout, "world\n");
}

#[test]
fn get_key_prints_structures_as_json() {
    let (result, stdout) = run_with_stdin(
        &["get-key", "--input-format", "toml", "server"],
        "[server]\nhost = \"localhost\"\nport = 8080\n",
    );

    assert!(result.is_ok());
    assert_eq!(stdout, "{\"host\":\"localhost\",\"port\":8080}\n");
}

#[test]
fn get_key_missing_key_fails() {
    let (result, stdout) =
        run_with_stdin(&["get-key", "-F", "json", "absent"], r#"{"hello": "world"}"#);

    assert!(matches!(
        result,
        Err(TransmogrifyError::KeyNotFound { key }) if key == "absent"
    ));
    assert!(stdout.is_empty());
}

#[test]
fn get_key_does_not_traverse_paths() {
    let (result, _) = run_with_stdin(&["get-key", "-F", "json", "a.b"], r#"{"a": {"b": 1}}"#);

    assert!(matches!(result, Err(TransmogrifyError::KeyNotFound { .. })));
}

#[test]
fn get_key_on_sequence_fails() {
    let (result, _) = run_with_stdin(&["get-key", "-F", "yaml", "0"], "- a\n- b\n");

    assert!(matches!(
        result,
        Err(TransmogrifyError::NotAMapping { found: "sequence" })
    ));
}

#[test]
fn get_key_requires_key_argument() {
    let (result, _) = run_with_stdin(&["get-key", "-F", "json"], "{}");

    assert!(matches!(result, Err(TransmogrifyError::InvalidArguments(_))));
}

#[test]
fn unknown_format_flag_is_rejected() {
    let (result, _) = run_with_stdin(&["convert", "-F", "xml", "-f", "json"], "");

    assert!(matches!(result, Err(TransmogrifyError::InvalidArguments(_))));
}

#[test]
fn parses_global_log_level() {
    let cli = Cli::try_parse_from(["transmogrify", "formats", "--log-level", "debug"]).unwrap();

    assert_eq!(cli.log_level, LogLevel::Debug);
    assert_eq!(cli.command.command().name(), "formats");
}

#[test]
fn convert_defaults_to_standard_streams() {
    let cli = Cli::try_parse_from(["transmogrify", "convert"]).unwrap();

    let Commands::Convert(convert) = cli.command else {
        panic!("expected convert");
    };
    assert_eq!(convert.input.to_str(), Some("-"));
    assert_eq!(convert.output.to_str(), Some("-"));
    assert!(convert.input_format.is_none());
    assert!(convert.output_format.is_none());
}

#[test]
fn format_value_scalars() {
    assert_eq!(format_value(&Document::from("hello world")), "hello world");
    assert_eq!(format_value(&Document::from(-123_i64)), "-123");
    assert_eq!(format_value(&Document::from(2.5)), "2.5");
    assert_eq!(format_value(&Document::from(true)), "true");
    assert_eq!(format_value(&Document::Null), "null");
}

#[test]
fn format_value_collections() {
    let table: Document = [("key1", Document::from("value1")), ("key2", Document::from(42_i64))]
        .into_iter()
        .collect();

    assert_eq!(format_value(&table), r#"{"key1":"value1","key2":42}"#);
    assert_eq!(format_value(&Document::Sequence(vec![])), "[]");
    assert_eq!(
        format_value(&Document::from(vec!["a", "b"])),
        r#"["a","b"]"#
    );
}

#[test]
fn format_value_special_strings() {
    let formatted = format_value(&Document::from("line1\nline2"));
    assert_eq!(formatted, "line1\nline2");

    let formatted = format_value(&Document::from("Hello 世界 🌍"));
    assert!(formatted.contains("世界"));
    assert!(formatted.contains("🌍"));
}
