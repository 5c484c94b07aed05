//! Snapshot of the runner environment the step depends on

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::warn;

use crate::{Error, Result};

/// Environment variable pointing kubectl at the active cluster
pub const KUBECONFIG: &str = "KUBECONFIG";

/// Environment values read once at start-up
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// `KUBECONFIG`
    pub kubeconfig: Option<String>,
    /// `RUNNER_TEMP`, the base for literal-to-file translation
    pub runner_temp: Option<PathBuf>,
    /// `RUNNER_TOOL_CACHE`
    pub tool_cache: Option<PathBuf>,
    /// `PATH`
    pub path: Option<OsString>,
    /// `GITHUB_OUTPUT`
    pub github_output: Option<PathBuf>,
}

impl Environment {
    /// Capture the relevant variables from the current process
    pub fn from_process() -> Self {
        Self {
            kubeconfig: non_empty(std::env::var(KUBECONFIG).ok()),
            runner_temp: non_empty_path("RUNNER_TEMP"),
            tool_cache: non_empty_path("RUNNER_TOOL_CACHE"),
            path: std::env::var_os("PATH"),
            github_output: non_empty_path("GITHUB_OUTPUT"),
        }
    }

    /// Fail fast unless a cluster context has been configured
    pub fn check_cluster_context(&self) -> Result<()> {
        match self.kubeconfig.as_deref() {
            Some(value) if !value.trim().is_empty() => Ok(()),
            _ => Err(Error::ClusterContextNotSet),
        }
    }

    /// Directory literal values are written into
    pub fn temp_dir(&self) -> PathBuf {
        match &self.runner_temp {
            Some(dir) => dir.clone(),
            None => {
                let fallback = std::env::temp_dir();
                warn!(
                    "RUNNER_TEMP is not set, writing literal files to {}",
                    fallback.display()
                );
                fallback
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
