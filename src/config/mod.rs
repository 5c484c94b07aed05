//! Step configuration: workflow inputs, runner environment and the
//! validated secret request derived from them

pub mod environment;
pub mod inputs;
mod request;

pub use environment::Environment;
pub use inputs::{ActionInputs, InputDef, INPUTS};
pub use request::*;
