//! Runs the create-secret step end to end

use tracing::info;

use crate::config::{ActionInputs, Environment, SecretPayload, SecretRequest};
use crate::controllers::Context;
use crate::kubectl::{self, ProcessRunner};
use crate::reconcilers::secret;
use crate::workflow;
use crate::Result;

/// Run the step with the given environment, inputs and process runner
///
/// The cluster context is checked and kubectl resolved before the inputs
/// are read.
pub async fn run<R: ProcessRunner>(
    env: &Environment,
    inputs: &ActionInputs,
    runner: R,
) -> Result<String> {
    env.check_cluster_context()?;

    let kubectl_path = kubectl::locate(kubectl::KUBECTL, env)?;
    info!("Using kubectl at {}", kubectl_path.display());

    let request = SecretRequest::from_inputs(inputs)?;
    if let SecretPayload::DockerRegistry(credentials) = &request.payload {
        workflow::add_mask(&credentials.password);
    }

    let ctx = Context::new(kubectl_path, env.temp_dir(), runner);
    let name = secret::ensure_secret(&request, &ctx).await?;

    workflow::set_output(env, workflow::SECRET_NAME_OUTPUT, &name)?;
    Ok(name)
}
