//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use k8s_create_secret::config::Environment;
use k8s_create_secret::kubectl::locator::executable_name;
use k8s_create_secret::kubectl::{ExecOptions, ProcessRunner};
use k8s_create_secret::Result;

/// A recorded kubectl invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub options: ExecOptions,
}

/// Runner that records invocations instead of spawning processes
#[derive(Clone, Debug, Default)]
pub struct FakeRunner {
    pub calls: Arc<Mutex<Vec<Invocation>>>,
    /// Exit code returned for `delete` invocations
    pub delete_code: i32,
    /// Exit code returned for every other invocation
    pub create_code: i32,
}

impl FakeRunner {
    pub fn with_codes(delete_code: i32, create_code: i32) -> Self {
        Self {
            delete_code,
            create_code,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(&self, program: &Path, args: &[String], options: ExecOptions) -> Result<i32> {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            options,
        });
        if args.first().map(String::as_str) == Some("delete") {
            Ok(self.delete_code)
        } else {
            Ok(self.create_code)
        }
    }
}

/// Place an empty kubectl file in `dir` and return its path
pub fn fake_kubectl(dir: &Path) -> PathBuf {
    let path = dir.join(executable_name("kubectl"));
    fs::write(&path, "").unwrap();
    path
}

/// Environment with a cluster context, kubectl in `bin_dir` and temp files
/// going to `temp_dir`
pub fn environment(bin_dir: &Path, temp_dir: &Path) -> Environment {
    Environment {
        kubeconfig: Some("/home/runner/.kube/config".to_string()),
        runner_temp: Some(temp_dir.to_path_buf()),
        tool_cache: None,
        path: Some(OsString::from(bin_dir.as_os_str())),
        github_output: Some(temp_dir.join("github_output")),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
