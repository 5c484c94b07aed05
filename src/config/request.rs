//! Validated secret request built from the step inputs

use std::fmt;
use std::str::FromStr;

use crate::config::inputs::{self, ActionInputs};
use crate::{Error, Result};

/// Kind of secret kubectl is asked to create
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretKind {
    DockerRegistry,
    Generic,
}

impl SecretKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretKind::DockerRegistry => "docker-registry",
            SecretKind::Generic => "generic",
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "docker-registry" => Ok(SecretKind::DockerRegistry),
            "generic" => Ok(SecretKind::Generic),
            other => Err(Error::UnsupportedKind(other.to_string())),
        }
    }
}

/// Credentials for a `docker-registry` secret
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DockerCredentials {
    pub username: String,
    pub password: String,
    /// Registry server, omitted from the command line when empty
    pub server: Option<String>,
    /// Contact email, replaced by a single space when empty
    pub email: Option<String>,
}

/// Kind-specific part of a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretPayload {
    DockerRegistry(DockerCredentials),
    /// Raw `--key[=value]` argument string
    Generic(String),
    /// `secret-type` value naming no known kind
    Unsupported(String),
}

/// A secret to create or replace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretRequest {
    pub name: String,
    pub namespace: Option<String>,
    pub payload: SecretPayload,
}

impl SecretRequest {
    /// Validate the inputs and build a request from them
    ///
    /// An unknown `secret-type` is kept as [`SecretPayload::Unsupported`];
    /// the reconciler rejects it once the old secret has been deleted.
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self> {
        let secret_type = inputs.required(inputs::SECRET_TYPE)?;
        let name = inputs.required(inputs::SECRET_NAME)?.to_string();

        let payload = match secret_type.parse::<SecretKind>() {
            Err(_) => SecretPayload::Unsupported(secret_type.to_string()),
            Ok(SecretKind::DockerRegistry) => SecretPayload::DockerRegistry(DockerCredentials {
                username: inputs.container_registry_username.clone().unwrap_or_default(),
                password: inputs.container_registry_password.clone().unwrap_or_default(),
                server: inputs.container_registry_url.clone(),
                email: inputs.container_registry_email.clone(),
            }),
            Ok(SecretKind::Generic) => {
                SecretPayload::Generic(inputs.arguments.clone().unwrap_or_default())
            }
        };

        Ok(Self {
            name,
            namespace: inputs.namespace.clone(),
            payload,
        })
    }

    /// Kind of the secret, `None` for an unsupported `secret-type`
    pub fn kind(&self) -> Option<SecretKind> {
        match self.payload {
            SecretPayload::DockerRegistry(_) => Some(SecretKind::DockerRegistry),
            SecretPayload::Generic(_) => Some(SecretKind::Generic),
            SecretPayload::Unsupported(_) => None,
        }
    }

    /// `secret-type` as given in the inputs
    pub fn secret_type(&self) -> &str {
        match &self.payload {
            SecretPayload::Unsupported(raw) => raw,
            _ => self.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// Namespace to scope kubectl to, if one was given
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}
