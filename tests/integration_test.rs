#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn autocorrect_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("autocorrect").unwrap()
}

/// Command running in `dir`, with HOME pointed there so the user's own
/// ~/.autocorrect.toml never leaks into a test.
fn autocorrect_in(dir: &Path) -> assert_cmd::Command {
	let mut cmd = autocorrect_cmd();
	cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	autocorrect_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Typing-time autocorrection"));
}

#[test]
fn test_version_flag() {
	autocorrect_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("autocorrect"));
}

#[test]
fn test_no_args_shows_help() {
	autocorrect_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// --init tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".autocorrect.toml");

	autocorrect_in(temp_dir.path())
		.arg("--init")
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .autocorrect.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("[[rules]]"));
	assert!(content.contains("usage-tag"));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".autocorrect.toml"), "# existing").unwrap();

	autocorrect_in(temp_dir.path())
		.arg("--init")
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".autocorrect.toml");
	fs::write(&config_path, "# existing").unwrap();

	autocorrect_in(temp_dir.path())
		.args(["--init", "--force"])
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("autocorrect configuration"));
}

// ============================================================================
// type tests
// ============================================================================

#[test]
fn test_type_common_rules() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "a--b", "wait...", "x->y"])
		.assert()
		.success()
		.stdout("a–b\nwait…\nx→y\n");
}

#[test]
fn test_type_enter_escape() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", r"first\nsecond--"])
		.assert()
		.success()
		.stdout("first\nsecond–\n");
}

#[test]
fn test_type_language_quotes() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "--lang", "pl", "\"tak\""])
		.assert()
		.success()
		.stdout("„tak”\n");
}

#[test]
fn test_type_polish_extras() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "--extras", "pl", "=p"])
		.assert()
		.success()
		.stdout(predicate::str::contains("== Przypisy =="))
		.stdout(predicate::str::contains("<references />"));
}

#[test]
fn test_type_unknown_extra_fails() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "--extras", "xx", "a"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Unknown rule set: xx"));
}

#[test]
fn test_type_uses_config_rules_and_language() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".autocorrect.toml"),
		r#"
root = true
language = "de"

[[rules]]
from = "(tm)"
to = "™"
"#,
	)
	.unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "Name(tm) \"ja\""])
		.assert()
		.success()
		.stdout("Name™ „ja“\n");
}

#[test]
fn test_type_skips_malformed_config_rule() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".autocorrect.toml"),
		r#"
[[rules]]
from = { regex = "no group$" }
to = "!"

[[rules]]
from = "(r)"
to = "®"
"#,
	)
	.unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "no group (r)"])
		.assert()
		.success()
		.stdout("no group ®\n")
		.stderr(predicate::str::contains("rejected"));
}

#[test]
fn test_type_invalid_config_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".autocorrect.toml"), "invalid toml [[[").unwrap();

	autocorrect_in(temp_dir.path())
		.args(["type", "a--"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load configuration"));
}

// ============================================================================
// rules tests
// ============================================================================

#[test]
fn test_rules_lists_registered_rules() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["rules", "--wiki", "dewiki"])
		.assert()
		.success()
		.stdout(predicate::str::contains("autocorrect-0\t\"--\"\t–"))
		.stdout(predicate::str::contains("Weblinks"));
}

// ============================================================================
// config tests
// ============================================================================

#[test]
fn test_config_validate_no_config() {
	let temp_dir = tempfile::tempdir().unwrap();

	autocorrect_in(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("No configuration files found"));
}

#[test]
fn test_config_validate_valid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".autocorrect.toml"),
		r#"
root = true

[[rules]]
start = "=s"
to = "See also"
"#,
	)
	.unwrap();

	autocorrect_in(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("valid"))
		.stdout(predicate::str::contains("(1 rules)"));
}

#[test]
fn test_config_validate_invalid_toml() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".autocorrect.toml"), "invalid toml [[[").unwrap();

	autocorrect_in(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_validate_reports_malformed_rule() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".autocorrect.toml"),
		r#"
[[rules]]
from = "a"
start = "b"
to = "c"
"#,
	)
	.unwrap();

	autocorrect_in(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Mutually exclusive options: from and start"));
}

#[test]
fn test_config_show_displays_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".autocorrect.toml"),
		r#"
root = true
language = "pl"
usage-tag = "my-tag"
extras = ["pl"]

[[rules]]
from = "(tm)"
to = "™"
"#,
	)
	.unwrap();

	autocorrect_in(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("# language: pl"))
		.stdout(predicate::str::contains("# extras: pl"))
		.stdout(predicate::str::contains("to: ™"))
		.stdout(predicate::str::contains("Effective usage tag: my-tag"));
}
