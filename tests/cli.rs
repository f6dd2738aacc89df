//! CLI integration tests for base56
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const REVERSED: &str = "zyxwvutsrqpnmlkjhgfedcbaZYXWVUTSRPNMLKJHGFECBA9876543210";

fn base56() -> Command {
    let mut cmd = Command::cargo_bin("base56").unwrap();
    // Keep the user's own encodings.toml out of the tests
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/base56-tests");
    cmd.env_remove("BASE56_LOG");
    cmd
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base56()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("unambiguous base56"));
}

#[test]
fn test_version() {
    base56()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base56"));
}

#[test]
fn test_list_encodings() {
    base56()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("* std"))
        .stdout(predicate::str::contains(
            "0123456789ABCEFGHJKLMNPRSTUVWXYZabcdefghjklmnpqrstuvwxyz",
        ))
        .stdout(predicate::str::contains("alt"))
        .stdout(predicate::str::contains("py3"));
}

#[test]
fn test_list_names_only() {
    base56()
        .args(["list", "--names-only"])
        .assert()
        .success()
        .stdout("alt\npy3\nstd\n");
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_std() {
    base56()
        .args(["encode", "1", "100", "1540840132"])
        .assert()
        .success()
        .stdout("1\n1n\n2nfvKM\n");
}

#[test]
fn test_encode_alt_and_py3() {
    base56()
        .args(["-e", "alt", "encode", "1540840132"])
        .assert()
        .success()
        .stdout("4NFVkn\n");

    base56()
        .args(["encode", "--encoding", "PY3", "1540840132"])
        .assert()
        .success()
        .stdout("4nfvLN\n");
}

#[test]
fn test_encode_zero_prints_empty_line() {
    base56().args(["encode", "0"]).assert().success().stdout("\n");
}

#[test]
fn test_encode_max() {
    base56()
        .args(["encode", "18446744073709551615"])
        .assert()
        .success()
        .stdout("14psTsTZwTUG\n");
}

#[test]
fn test_encode_rejects_non_integer() {
    base56().args(["encode", "abc"]).assert().failure();
    base56()
        .args(["encode", "18446744073709551616"])
        .assert()
        .failure();
}

#[test]
fn test_encode_stdin() {
    base56()
        .arg("encode")
        .write_stdin("1\n\n100\n")
        .assert()
        .success()
        .stdout("1\n1n\n");
}

#[test]
fn test_encode_stdin_invalid_line() {
    base56()
        .arg("encode")
        .write_stdin("1\nnope\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_decode_std() {
    base56()
        .args(["decode", "1n", "2nfvKM"])
        .assert()
        .success()
        .stdout("100\n1540840132\n");
}

#[test]
fn test_decode_py3() {
    base56()
        .args(["-e", "py3", "decode", "4nfvLN"])
        .assert()
        .success()
        .stdout("1540840132\n");
}

#[test]
fn test_decode_invalid() {
    base56()
        .args(["decode", "NoGood"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base56 value"));
}

#[test]
fn test_decode_stdin_empty_line_is_zero() {
    base56()
        .arg("decode")
        .write_stdin("\n1n\n")
        .assert()
        .success()
        .stdout("0\n100\n");
}

#[test]
fn test_decode_wraps_unless_checked() {
    base56()
        .args(["decode", "114psTsTZwTUG"])
        .assert()
        .success()
        .stdout("10382066046226923519\n");

    base56()
        .args(["decode", "--checked", "114psTsTZwTUG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows"));
}

#[test]
fn test_decode_encoding_flag_after_values() {
    base56()
        .args(["decode", "3n", "4nfvLN", "-e", "py3"])
        .assert()
        .success()
        .stdout("100\n1540840132\n");
}

#[test]
fn test_decode_failure_prints_nothing() {
    base56()
        .args(["decode", "1n", "NoGood"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot decode 'NoGood'"));
}

#[test]
fn test_encode_decode_pipeline() {
    let encoded = base56()
        .args(["-e", "alt", "encode", "987654321"])
        .output()
        .unwrap();
    assert!(encoded.status.success());
    let text = String::from_utf8(encoded.stdout).unwrap();

    base56()
        .args(["-e", "alt", "decode", text.trim_end()])
        .assert()
        .success()
        .stdout("987654321\n");
}

// ============================================================================
// Hash
// ============================================================================

#[test]
fn test_hash_vectors() {
    for (encoding, want) in [("std", "ETcHHsXGBhs"), ("alt", "ftCiiSxhdHS"), ("py3", "FTcJJsXHDhs")] {
        base56()
            .args(["-e", encoding, "hash", "%s:%04X:%08X", "one", "2", "123456789"])
            .assert()
            .success()
            .stdout(format!("{}\n", want));
    }
}

#[test]
fn test_hash_with_negative_argument() {
    base56()
        .args(["hash", "%d", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_hash_encoding_flag_after_args() {
    base56()
        .args(["hash", "%s:%04X:%08X", "one", "2", "123456789", "-e", "py3"])
        .assert()
        .success()
        .stdout("FTcJJsXHDhs\n");
}

#[test]
fn test_hash_hyphen_argument_after_separator() {
    let dashed = base56().args(["hash", "x%s", "--", "-e"]).output().unwrap();
    let plain = base56().args(["hash", "x-e"]).output().unwrap();
    assert!(dashed.status.success());
    assert_eq!(dashed.stdout, plain.stdout);
}

#[test]
fn test_hash_hex_of_string_argument() {
    let hex = base56().args(["hash", "%x", "abc"]).output().unwrap();
    let literal = base56().args(["hash", "616263"]).output().unwrap();
    assert!(hex.status.success());
    assert_eq!(hex.stdout, literal.stdout);
}

#[test]
fn test_hash_debug_log_shows_input() {
    base56()
        .env("BASE56_LOG", "debug")
        .args(["hash", "%s:%04X:%08X", "one", "2", "123456789"])
        .assert()
        .success()
        .stderr(predicate::str::contains("one:0002:075BCD15"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_unknown_encoding_suggests() {
    base56()
        .args(["-e", "py2", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'py3'?"));
}

#[test]
fn test_custom_encoding_from_config() {
    let file = config_file(&format!("[encodings.rev]\nchars = \"{REVERSED}\"\n"));

    base56()
        .args(["--config", file.path().to_str().unwrap(), "-e", "rev", "encode", "1", "56"])
        .assert()
        .success()
        .stdout("y\nyz\n");
}

#[test]
fn test_default_encoding_from_config() {
    let file = config_file("[settings]\ndefault_encoding = \"py3\"\n");

    base56()
        .args(["--config", file.path().to_str().unwrap(), "encode", "100"])
        .assert()
        .success()
        .stdout("3n\n");
}

#[test]
fn test_builtin_cannot_be_redefined() {
    let file = config_file(&format!("[encodings.std]\nchars = \"{REVERSED}\"\n"));

    base56()
        .args(["--config", file.path().to_str().unwrap(), "encode", "1"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_invalid_custom_alphabet() {
    let file = config_file("[encodings.short]\nchars = \"abc\"\n");

    base56()
        .args(["--config", file.path().to_str().unwrap(), "-e", "short", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 56"));
}

#[test]
fn test_missing_config_file() {
    base56()
        .args(["--config", "/nonexistent/base56/encodings.toml", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
