//! kubectl discovery and process execution

pub mod locator;
pub mod runner;

pub use locator::{locate, KUBECTL};
pub use runner::{ExecOptions, ProcessRunner, SystemRunner};
