//! Create or replace a Kubernetes secret from a CI step
//!
//! Reads the step inputs, deletes any existing secret of the same name and
//! creates a `docker-registry` or `generic` secret through kubectl.

pub mod adapters;
pub mod config;
pub mod controllers;
pub mod error;
pub mod kubectl;
pub mod reconcilers;
pub mod workflow;

pub use error::{Error, Result};
