//! Delete-then-create logic for a single secret

use tracing::{debug, info, instrument};

use crate::adapters::secret_args;
use crate::config::{SecretPayload, SecretRequest};
use crate::controllers::Context;
use crate::kubectl::{ExecOptions, ProcessRunner};
use crate::{Error, Result};

/// Create the requested secret, replacing any existing one of the same name
///
/// The delete is attempted before anything else, even when the request
/// names an unsupported kind. Returns the name of the created secret.
#[instrument(skip(request, ctx), fields(name = %request.name, kind = %request.secret_type()))]
pub async fn ensure_secret<R: ProcessRunner>(
    request: &SecretRequest,
    ctx: &Context<R>,
) -> Result<String> {
    delete_secret(request, ctx).await;

    let mut args = create_args(request, ctx)?;
    push_namespace(&mut args, request.namespace());

    let code = ctx
        .runner
        .run(&ctx.kubectl, &args, ExecOptions::default())
        .await?;
    if code != 0 {
        return Err(Error::CreationFailed {
            name: request.name.clone(),
            code,
        });
    }

    info!(
        "Created {} secret {}",
        request.secret_type(),
        qualified_name(request)
    );
    Ok(request.name.clone())
}

/// Remove a secret of the same name; any failure is ignored
pub async fn delete_secret<R: ProcessRunner>(request: &SecretRequest, ctx: &Context<R>) {
    let mut args = vec![
        "delete".to_string(),
        "secret".to_string(),
        request.name.clone(),
    ];
    push_namespace(&mut args, request.namespace());

    let options = ExecOptions {
        fail_on_stderr: false,
        ignore_return_code: true,
        silent: true,
    };
    match ctx.runner.run(&ctx.kubectl, &args, options).await {
        Ok(code) => debug!(
            "Deleting {} if already exist (exit code {})",
            qualified_name(request),
            code
        ),
        Err(e) => debug!("Deleting {} failed: {}", qualified_name(request), e),
    }
}

/// kubectl arguments creating the secret, before namespace scoping
pub fn create_args<R>(request: &SecretRequest, ctx: &Context<R>) -> Result<Vec<String>> {
    match &request.payload {
        SecretPayload::DockerRegistry(credentials) => {
            Ok(secret_args::build_docker_args(credentials, &request.name))
        }
        SecretPayload::Generic(arguments) => {
            secret_args::build_generic_args(arguments, &request.name, &ctx.temp_dir)
        }
        SecretPayload::Unsupported(secret_type) => {
            Err(Error::UnsupportedKind(secret_type.clone()))
        }
    }
}

fn push_namespace(args: &mut Vec<String>, namespace: Option<&str>) {
    if let Some(ns) = namespace {
        args.push("-n".to_string());
        args.push(ns.to_string());
    }
}

fn qualified_name(request: &SecretRequest) -> String {
    match request.namespace() {
        Some(ns) => format!("{}/{}", ns, request.name),
        None => request.name.clone(),
    }
}
