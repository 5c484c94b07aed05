//! Communication with the workflow runner: step outputs, log masking,
//! failure annotations and the action metadata

pub mod metadata;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::Environment;
use crate::{Error, Result};

/// Name of the output carrying the created secret's name
pub const SECRET_NAME_OUTPUT: &str = "secret-name";

/// Record a step output
///
/// Appends to the `GITHUB_OUTPUT` file when the runner provides one, and
/// falls back to the `set-output` workflow command otherwise.
pub fn set_output(env: &Environment, name: &str, value: &str) -> Result<()> {
    match &env.github_output {
        Some(path) => append_output(path, name, value).map_err(|source| Error::Output {
            name: name.to_string(),
            source,
        }),
        None => {
            println!("::set-output name={}::{}", name, escape_data(value));
            Ok(())
        }
    }
}

fn append_output(path: &Path, name: &str, value: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    debug!("Set output {} in {}", name, path.display());
    Ok(())
}

/// Ask the runner to redact `value` from the log
pub fn add_mask(value: &str) {
    if !value.trim().is_empty() {
        println!("::add-mask::{}", escape_data(value));
    }
}

/// Annotate the step as failed
pub fn report_failure(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Escape a workflow command payload
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
