//! Create or replace a Kubernetes secret from a CI step
//!
//! Main entry point. Sets up logging, reads the step inputs and runs the
//! step, turning any failure into an error annotation and exit code 1.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use k8s_create_secret::{
    config::{ActionInputs, Environment},
    controllers::secret_controller,
    kubectl::SystemRunner,
    workflow,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    init_tracing()?;

    let env = Environment::from_process();

    let result = match ActionInputs::load() {
        Ok(inputs) => secret_controller::run(&env, &inputs, SystemRunner).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(name) => {
            info!("Secret {} is ready", name);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            workflow::report_failure(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
            "debug"
        } else {
            "info"
        };
        EnvFilter::new(level)
    });

    let json = std::env::var("LOG_FORMAT").as_deref() == Ok("json");
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json());
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;
    Ok(())
}
