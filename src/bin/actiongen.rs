//! Action metadata generator
//!
//! Prints the `action.yml` describing the step's inputs and outputs.
//!
//! Usage: cargo run --bin actiongen [command] > action.yml

use k8s_create_secret::workflow::metadata::build_action_metadata;

/// Binary location relative to the action checkout
const DEFAULT_COMMAND: &str = "${{ github.action_path }}/bin/k8s-create-secret";

fn main() -> anyhow::Result<()> {
    let command = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string());
    print!("{}", build_action_metadata(&command)?);
    Ok(())
}
