//! Integration tests for kubectl argument construction
//!
//! These tests verify the docker-registry and generic argument builders,
//! including the translation of literal values into temp files.

use std::fs;
use std::path::Path;

use k8s_create_secret::adapters::secret_args::{
    build_docker_args, build_generic_args, tokenize, translate_literals,
};
use k8s_create_secret::adapters::temp_file::write_temp_file;
use k8s_create_secret::config::DockerCredentials;
use k8s_create_secret::Error;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn credentials(server: Option<&str>, email: Option<&str>) -> DockerCredentials {
    DockerCredentials {
        username: "u".to_string(),
        password: "p".to_string(),
        server: server.map(str::to_string),
        email: email.map(str::to_string),
    }
}

fn from_file(dir: &Path, key: &str) -> String {
    format!("--from-file={}", dir.join(key).display())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Docker Registry Tests
// ============================================================================

#[test]
fn docker_args_without_server_or_email_use_placeholder() {
    let args = build_docker_args(&credentials(Some(""), Some("")), "regcred");

    assert_eq!(
        args,
        strings(&[
            "create",
            "secret",
            "docker-registry",
            "regcred",
            "--docker-username",
            "u",
            "--docker-password",
            "p",
            "--docker-email",
            " ",
        ])
    );
    assert!(!args.contains(&"--docker-server".to_string()));
}

#[test]
fn docker_args_absent_email_uses_placeholder() {
    let args = build_docker_args(&credentials(None, None), "regcred");
    assert_eq!(args[args.len() - 2..], strings(&["--docker-email", " "])[..]);
}

#[test]
fn docker_args_include_server_when_given() {
    let args = build_docker_args(
        &credentials(Some("ghcr.io"), Some("dev@example.com")),
        "regcred",
    );

    assert_eq!(
        args,
        strings(&[
            "create",
            "secret",
            "docker-registry",
            "regcred",
            "--docker-username",
            "u",
            "--docker-password",
            "p",
            "--docker-server",
            "ghcr.io",
            "--docker-email",
            "dev@example.com",
        ])
    );
}

#[test]
fn docker_args_pass_credentials_through_unchanged() {
    let creds = DockerCredentials {
        username: "user name".to_string(),
        password: "p@ss word=".to_string(),
        server: None,
        email: None,
    };
    let args = build_docker_args(&creds, "regcred");

    assert_eq!(args[5], "user name");
    assert_eq!(args[7], "p@ss word=");
}

// ============================================================================
// Generic Secret Tests
// ============================================================================

#[test]
fn generic_args_without_literals_keep_flags_in_order() {
    let dir = TempDir::new().unwrap();
    let args = build_generic_args(
        "--from-file=./config.json --type=Opaque --from-env-file=.env",
        "app",
        dir.path(),
    )
    .unwrap();

    assert_eq!(
        args,
        strings(&[
            "create",
            "secret",
            "generic",
            "app",
            "--from-file=./config.json",
            "--type=Opaque",
            "--from-env-file=.env",
        ])
    );
}

#[test]
fn generic_args_with_empty_arguments() {
    let dir = TempDir::new().unwrap();
    let args = build_generic_args("", "app", dir.path()).unwrap();
    assert_eq!(args, strings(&["create", "secret", "generic", "app"]));
}

#[test]
fn generic_args_move_literals_into_files() {
    let dir = TempDir::new().unwrap();
    let args = build_generic_args(
        "--from-literal=user=admin --from-literal=pass=p@ss=w0rd",
        "mysecret",
        dir.path(),
    )
    .unwrap();

    assert_eq!(
        args,
        vec![
            "create".to_string(),
            "secret".to_string(),
            "generic".to_string(),
            "mysecret".to_string(),
            from_file(dir.path(), "user"),
            from_file(dir.path(), "pass"),
        ]
    );
    assert_eq!(fs::read_to_string(dir.path().join("user")).unwrap(), "admin");
    assert_eq!(
        fs::read_to_string(dir.path().join("pass")).unwrap(),
        "p@ss=w0rd"
    );
}

#[test]
fn generic_literal_value_keeps_equals_signs() {
    let dir = TempDir::new().unwrap();
    let args = build_generic_args("--from-literal=key=a=b", "s", dir.path()).unwrap();

    assert_eq!(args[4], from_file(dir.path(), "key"));
    assert_eq!(fs::read_to_string(dir.path().join("key")).unwrap(), "a=b");
}

#[test]
fn generic_literal_key_is_trimmed() {
    let dir = TempDir::new().unwrap();
    build_generic_args("--from-literal= token =abc", "s", dir.path()).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("token")).unwrap(), "abc");
}

#[test]
fn generic_literal_with_empty_value_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    build_generic_args("--from-literal=empty=", "s", dir.path()).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("empty")).unwrap(), "");
}

#[test]
fn generic_literals_mixed_with_other_flags_keep_order() {
    let dir = TempDir::new().unwrap();
    let args = build_generic_args(
        "--type=Opaque --from-literal=foo=bar --from-file=./ca.crt",
        "s",
        dir.path(),
    )
    .unwrap();

    assert_eq!(
        args[4..],
        vec![
            "--type=Opaque".to_string(),
            from_file(dir.path(), "foo"),
            "--from-file=./ca.crt".to_string(),
        ][..]
    );
    assert_eq!(fs::read_to_string(dir.path().join("foo")).unwrap(), "bar");
}

#[test]
fn generic_literal_without_value_is_malformed() {
    let dir = TempDir::new().unwrap();
    let result = build_generic_args("--from-literal=nokeyvalue", "s", dir.path());

    assert!(matches!(result, Err(Error::MalformedLiteral)));
}

#[test]
fn generic_literal_with_blank_key_is_malformed() {
    let dir = TempDir::new().unwrap();
    let result = build_generic_args("--from-literal= =value", "s", dir.path());

    assert!(matches!(result, Err(Error::MalformedLiteral)));
}

#[test]
fn generic_literal_keys_cannot_leave_temp_dir() {
    let dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let victim = outside.path().join("victim");
    fs::write(&victim, "original").unwrap();

    let absolute = format!("--from-literal={}=pwned", victim.display());
    for arguments in [
        absolute.as_str(),
        "--from-literal=/abs=v",
        "--from-literal=../x=v",
        "--from-literal=a/b=v",
        "--from-literal=..=v",
        "--from-literal=.=v",
    ] {
        let result = build_generic_args(arguments, "s", dir.path());
        assert!(
            matches!(result, Err(Error::MalformedLiteral)),
            "{} should be rejected, got {:?}",
            arguments,
            result
        );
    }

    assert_eq!(fs::read_to_string(&victim).unwrap(), "original");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(!dir.path().parent().unwrap().join("x").exists());
}

#[test]
fn generic_literal_key_with_dots_inside_name_is_accepted() {
    let dir = TempDir::new().unwrap();
    build_generic_args("--from-literal=tls.crt=abc", "s", dir.path()).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("tls.crt")).unwrap(), "abc");
}

#[test]
fn generic_malformed_literal_error_does_not_echo_value() {
    let dir = TempDir::new().unwrap();
    let err = build_generic_args("--from-literal=hunter2", "s", dir.path()).unwrap_err();

    assert!(!err.to_string().contains("hunter2"));
}

#[test]
fn generic_text_before_first_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = build_generic_args("user=admin --from-literal=a=b", "s", dir.path());

    assert!(matches!(result, Err(Error::MalformedArguments)));
    assert!(!dir.path().join("a").exists());
}

#[test]
fn generic_leading_whitespace_is_accepted() {
    let dir = TempDir::new().unwrap();
    let args = build_generic_args("   --type=Opaque", "s", dir.path()).unwrap();
    assert_eq!(args[4..], strings(&["--type=Opaque"])[..]);
}

#[test]
fn generic_literal_into_missing_directory_fails_with_write_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let result = build_generic_args("--from-literal=foo=bar", "s", &missing);

    match result {
        Err(Error::FileWrite { path, .. }) => assert_eq!(path, missing.join("foo")),
        other => panic!("expected FileWrite error, got {:?}", other),
    }
}

// ============================================================================
// Translation Stage Tests
// ============================================================================

#[test]
fn translate_skips_empty_segments() {
    let dir = TempDir::new().unwrap();
    let translated = translate_literals("----type=Opaque -- --dry-run", dir.path()).unwrap();

    assert_eq!(tokenize(&translated), strings(&["--type=Opaque", "--dry-run"]));
}

#[test]
fn translate_without_literals_only_rejoins_flags() {
    let dir = TempDir::new().unwrap();
    let translated = translate_literals("--a=1 --b", dir.path()).unwrap();

    assert_eq!(translated, " --a=1 --b");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn tokenize_splits_on_any_whitespace() {
    assert_eq!(
        tokenize("  --a=1\t--b \n --c  "),
        strings(&["--a=1", "--b", "--c"])
    );
    assert!(tokenize("   ").is_empty());
}

// ============================================================================
// Temp File Writer Tests
// ============================================================================

#[test]
fn temp_file_overwrites_existing_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("value");
    fs::write(&path, "old content that is longer").unwrap();

    let written = write_temp_file(&path, "new").unwrap();

    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn temp_file_write_failure_leaves_nothing_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("value");

    let result = write_temp_file(&path, "secret");

    assert!(matches!(result, Err(Error::FileWrite { .. })));
    assert!(!path.exists());
}

#[test]
fn temp_file_write_to_directory_fails() {
    let dir = TempDir::new().unwrap();
    let result = write_temp_file(dir.path(), "secret");

    assert!(matches!(result, Err(Error::FileWrite { .. })));
    assert!(dir.path().is_dir());
}
