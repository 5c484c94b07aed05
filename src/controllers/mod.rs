//! Step entry point and the context threaded through it

pub mod secret_controller;

use std::path::PathBuf;

use crate::kubectl::SystemRunner;

/// Shared context for one step run
#[derive(Clone, Debug)]
pub struct Context<R = SystemRunner> {
    /// Resolved kubectl executable
    pub kubectl: PathBuf,
    /// Directory literal values are written into
    pub temp_dir: PathBuf,
    /// Runs kubectl
    pub runner: R,
}

impl<R> Context<R> {
    /// Create a new context
    pub fn new(kubectl: PathBuf, temp_dir: PathBuf, runner: R) -> Self {
        Self {
            kubectl,
            temp_dir,
            runner,
        }
    }
}
