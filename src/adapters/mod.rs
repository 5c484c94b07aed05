//! Adapters translating step configuration into kubectl invocations

pub mod secret_args;
pub mod temp_file;
