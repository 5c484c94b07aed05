//! kubectl argument lists for `create secret`

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::adapters::temp_file::write_temp_file;
use crate::config::DockerCredentials;
use crate::{Error, Result};

/// Separator between flags in the generic arguments input
const FLAG_DELIMITER: &str = "--";

/// Flag whose value kubectl would otherwise receive inline
const LITERAL_PREFIX: &str = "from-literal=";

/// Placeholder for an absent email; kubectl rejects an empty one
const EMAIL_PLACEHOLDER: &str = " ";

/// Build the arguments for `kubectl create secret docker-registry`
pub fn build_docker_args(credentials: &DockerCredentials, name: &str) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "create".into(),
        "secret".into(),
        "docker-registry".into(),
        name.into(),
        "--docker-username".into(),
        credentials.username.clone(),
        "--docker-password".into(),
        credentials.password.clone(),
    ];

    if let Some(server) = credentials.server.as_deref().filter(|s| !s.is_empty()) {
        args.push("--docker-server".into());
        args.push(server.into());
    }

    let email = credentials
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(EMAIL_PLACEHOLDER);
    args.push("--docker-email".into());
    args.push(email.into());

    args
}

/// Build the arguments for `kubectl create secret generic`
///
/// Every `--from-literal=key=value` in `raw` is written to
/// `<temp_dir>/<key>` and passed as `--from-file=<path>` instead.
pub fn build_generic_args(raw: &str, name: &str, temp_dir: &Path) -> Result<Vec<String>> {
    let translated = translate_literals(raw, temp_dir)?;

    let mut args: Vec<String> = vec![
        "create".into(),
        "secret".into(),
        "generic".into(),
        name.into(),
    ];
    args.extend(tokenize(&translated));
    Ok(args)
}

/// Rewrite the generic arguments input, moving literal values into files
///
/// Segments keep their original order. Empty segments (consecutive `--`)
/// are dropped. Text before the first `--` must be blank.
pub fn translate_literals(raw: &str, temp_dir: &Path) -> Result<String> {
    let mut segments = raw.split(FLAG_DELIMITER);

    let prefix = segments.next().unwrap_or_default();
    if !prefix.trim().is_empty() {
        return Err(Error::MalformedArguments);
    }

    segments.try_fold(String::new(), |mut acc, segment| -> Result<String> {
        let segment = segment.trim_end();
        if segment.is_empty() {
            return Ok(acc);
        }

        match segment.strip_prefix(LITERAL_PREFIX) {
            Some(literal) => {
                let path = literal_to_file(literal, temp_dir)?;
                acc.push_str(" --from-file=");
                acc.push_str(&path.to_string_lossy());
            }
            None => {
                acc.push(' ');
                acc.push_str(FLAG_DELIMITER);
                acc.push_str(segment);
            }
        }
        Ok(acc)
    })
}

/// Split an argument string into tokens on whitespace
pub fn tokenize(args: &str) -> Vec<String> {
    args.split_whitespace().map(String::from).collect()
}

/// Write the value of a `key=value` literal and return the file path
fn literal_to_file(literal: &str, temp_dir: &Path) -> Result<PathBuf> {
    // Only the first '=' separates key from value
    let (key, value) = literal.split_once('=').ok_or(Error::MalformedLiteral)?;
    let key = key.trim();
    if !is_plain_file_name(key) {
        return Err(Error::MalformedLiteral);
    }

    debug!("Moving literal '{}' into a file", key);
    write_temp_file(&temp_dir.join(key), value)
}

/// A key must name a single file directly inside the temp directory
fn is_plain_file_name(key: &str) -> bool {
    let mut components = Path::new(key).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !key.contains(['/', '\\'])
}
