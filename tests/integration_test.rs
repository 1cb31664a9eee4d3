#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn nsmatch_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("nsmatch").unwrap()
}

/// A command rooted in `dir` with HOME pointed there too, so no real user
/// config leaks into the cascade.
fn nsmatch_in(dir: &Path) -> assert_cmd::Command {
	let mut cmd = nsmatch_cmd();
	cmd.current_dir(dir).env("HOME", dir).env_remove("NSMATCH_LOG");
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	nsmatch_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Hierarchical namespace matching"));
}

#[test]
fn test_version_flag() {
	nsmatch_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("nsmatch"));
}

#[test]
fn test_no_args_shows_help() {
	nsmatch_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// match tests
// ============================================================================

#[test]
fn test_match_default_options() {
	nsmatch_cmd()
		.args(["match", "svc:auth:*", "svc:auth:login"])
		.assert()
		.success()
		.stdout("true\n");
}

#[test]
fn test_match_failure_exits_one() {
	nsmatch_cmd()
		.args(["match", "svc:auth:*", "svc:billing:login"])
		.assert()
		.code(1)
		.stdout("false\n");
}

#[test]
fn test_match_different_lengths() {
	nsmatch_cmd()
		.args(["match", "a:b", "a:b:c"])
		.assert()
		.code(1)
		.stdout("false\n");
}

#[test]
fn test_match_reversed_options() {
	nsmatch_cmd()
		.args([
			"match",
			"svc:auth:login",
			"svc:*:log?n",
			"--expand-left",
			"false",
			"--expand-right",
			"true",
		])
		.assert()
		.success()
		.stdout("true\n");
}

#[test]
fn test_match_literal_options() {
	nsmatch_cmd()
		.args(["match", "svc:*", "svc:auth", "--expand-left", "false"])
		.assert()
		.code(1)
		.stdout("false\n");
}

// ============================================================================
// model tests
// ============================================================================

#[test]
fn test_split() {
	nsmatch_cmd()
		.args(["split", "svc:auth:login"])
		.assert()
		.success()
		.stdout("svc\nauth\nlogin\n");
}

#[test]
fn test_split_separator_only_is_empty() {
	nsmatch_cmd()
		.args(["split", ":::"])
		.assert()
		.success()
		.stdout("");
}

#[test]
fn test_join() {
	nsmatch_cmd()
		.args(["join", "svc", "auth", "login"])
		.assert()
		.success()
		.stdout("svc:auth:login\n");
}

#[test]
fn test_extend() {
	nsmatch_cmd()
		.args(["extend", "svc", "auth", "login"])
		.assert()
		.success()
		.stdout("svc:auth:login\n");
}

#[test]
fn test_extend_blank_namespace() {
	nsmatch_cmd()
		.args(["extend", "", "auth"])
		.assert()
		.success()
		.stdout("auth\n");
}

#[test]
fn test_classify() {
	nsmatch_cmd()
		.args(["classify", "ab?d"])
		.assert()
		.success()
		.stdout(predicate::str::contains("wildcard: true"))
		.stdout(predicate::str::contains("single-character: true"))
		.stdout(predicate::str::contains("multi-character: false"));
}

#[test]
fn test_classify_rejects_separator() {
	nsmatch_cmd()
		.args(["classify", "svc:auth"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("not a single component"));
}

// ============================================================================
// --init tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".nsmatch.toml");

	nsmatch_in(temp_dir.path())
		.arg("--init")
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .nsmatch.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("root = true"));
	assert!(content.contains("[[filters]]"));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".nsmatch.toml"), "# existing").unwrap();

	nsmatch_in(temp_dir.path())
		.arg("--init")
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".nsmatch.toml");
	fs::write(&config_path, "# existing").unwrap();

	nsmatch_in(temp_dir.path())
		.args(["--init", "--force"])
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("[[filters]]"));
}

#[test]
fn test_init_template_is_valid() {
	let temp_dir = tempfile::tempdir().unwrap();

	nsmatch_in(temp_dir.path()).arg("--init").assert().success();

	nsmatch_in(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("All configuration files are valid"))
		.stdout(predicate::str::contains("(2 filters)"));
}

// ============================================================================
// check tests
// ============================================================================

#[test]
fn test_check_uses_first_matching_filter() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".nsmatch.toml"),
		r#"
root = true
default = "exclude"

[[filters]]
pattern = "svc:auth:*"
action = "exclude"

[[filters]]
pattern = "svc:*:*"
action = "include"
"#,
	)
	.unwrap();

	nsmatch_in(temp_dir.path())
		.args(["check", "svc:auth:login", "svc:billing:charge", "db:query"])
		.assert()
		.success()
		.stdout(predicate::str::contains("svc:auth:login\texclude\tsvc:auth:*"))
		.stdout(predicate::str::contains("svc:billing:charge\tinclude\tsvc:*:*"))
		.stdout(predicate::str::contains("db:query\texclude\t(default)"));
}

#[test]
fn test_check_cascades_from_subdirectory() {
	let temp_dir = tempfile::tempdir().unwrap();
	let nested = temp_dir.path().join("service");
	fs::create_dir_all(&nested).unwrap();

	fs::write(
		temp_dir.path().join(".nsmatch.toml"),
		"root = true\n\n[[filters]]\npattern = \"db:*\"\naction = \"exclude\"\n",
	)
	.unwrap();
	fs::write(
		nested.join(".nsmatch.toml"),
		"[[filters]]\npattern = \"db:pool\"\naction = \"include\"\n",
	)
	.unwrap();

	nsmatch_in(&nested)
		.args(["check", "db:pool", "db:query"])
		.assert()
		.success()
		.stdout(predicate::str::contains("db:pool\tinclude"))
		.stdout(predicate::str::contains("db:query\texclude"));
}

#[test]
fn test_check_without_config_includes_everything() {
	let temp_dir = tempfile::tempdir().unwrap();

	nsmatch_in(temp_dir.path())
		.args(["check", "anything:at:all"])
		.assert()
		.success()
		.stdout(predicate::str::contains("anything:at:all\tinclude\t(default)"));
}

#[test]
fn test_check_invalid_config_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".nsmatch.toml"),
		"root = true\n[[filters]]\npattern = \"\"\n",
	)
	.unwrap();

	nsmatch_in(temp_dir.path())
		.args(["check", "svc"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load configuration"));
}

// ============================================================================
// config subcommand tests
// ============================================================================

#[test]
fn test_config_show_lists_filters() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".nsmatch.toml"),
		r#"
root = true
expand-left-wildcards = false

[[filters]]
pattern = "svc:*"
action = "exclude"
"#,
	)
	.unwrap();

	nsmatch_in(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("# root: true"))
		.stdout(predicate::str::contains("pattern: svc:*"))
		.stdout(predicate::str::contains("action: exclude"))
		.stdout(predicate::str::contains("expand_left_wildcards: false"));
}

#[test]
fn test_config_show_without_config() {
	let temp_dir = tempfile::tempdir().unwrap();

	nsmatch_in(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("No configuration files found."));
}

#[test]
fn test_config_validate_reports_parse_errors() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".nsmatch.toml"),
		"root = true\n[[filters]]\npattern = 42\n",
	)
	.unwrap();

	nsmatch_in(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Configuration error"));
}
