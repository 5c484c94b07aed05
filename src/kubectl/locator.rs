//! Locating the kubectl executable on the runner

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Environment;
use crate::{Error, Result};

/// Name of the cluster-management executable
pub const KUBECTL: &str = "kubectl";

/// File name of a tool on this platform
pub fn executable_name(tool: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", tool)
    } else {
        tool.to_string()
    }
}

/// Find `tool` on `PATH`, then in the runner tool cache
pub fn locate(tool: &str, env: &Environment) -> Result<PathBuf> {
    if let Some(path) = env.path.as_deref().and_then(|p| find_on_path(tool, p)) {
        debug!("Found {} on PATH at {}", tool, path.display());
        return Ok(path);
    }

    if let Some(path) = env
        .tool_cache
        .as_deref()
        .and_then(|cache| find_in_tool_cache(tool, cache))
    {
        debug!("Found {} in tool cache at {}", tool, path.display());
        return Ok(path);
    }

    Err(Error::ToolNotFound(capitalize(tool)))
}

/// First `PATH` entry containing the executable
pub fn find_on_path(tool: &str, path_var: &OsStr) -> Option<PathBuf> {
    let file_name = executable_name(tool);
    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Newest complete version of `tool` in a tool cache laid out as
/// `<cache>/<tool>/<version>/<arch>/`
pub fn find_in_tool_cache(tool: &str, cache: &Path) -> Option<PathBuf> {
    let arch = tool_cache_arch();
    let tool_dir = cache.join(tool);

    let mut versions: Vec<String> = fs::read_dir(&tool_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|version| {
            tool_dir
                .join(version)
                .join(format!("{}.complete", arch))
                .is_file()
        })
        .collect();
    versions.sort_by(|a, b| compare_versions(a, b));

    let newest = versions.pop()?;
    let path = tool_dir
        .join(newest)
        .join(arch)
        .join(executable_name(tool));
    path.is_file().then_some(path)
}

/// Architecture directory name used by the runner tool cache
pub fn tool_cache_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "x64",
        "x86" => "x32",
        "aarch64" => "arm64",
        other => other,
    }
}

/// Compare dotted versions numerically, falling back to text order
fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Option<Vec<u64>> {
        v.trim_start_matches('v')
            .split('.')
            .map(|part| part.parse().ok())
            .collect()
    };
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

fn capitalize(tool: &str) -> String {
    let mut chars = tool.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
