//! Step inputs as supplied by the workflow

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming an optional YAML inputs file
pub const INPUTS_FILE: &str = "INPUTS_FILE";

/// Definition of a single step input
#[derive(Clone, Copy, Debug)]
pub struct InputDef {
    /// Input name as written in the workflow file
    pub name: &'static str,
    /// Human readable description
    pub description: &'static str,
    /// Whether the workflow must supply the input
    pub required: bool,
    /// Default value advertised in the action metadata
    pub default: Option<&'static str>,
}

pub const SECRET_TYPE: &str = "secret-type";
pub const SECRET_NAME: &str = "secret-name";
pub const NAMESPACE: &str = "namespace";
pub const REGISTRY_USERNAME: &str = "container-registry-username";
pub const REGISTRY_PASSWORD: &str = "container-registry-password";
pub const REGISTRY_URL: &str = "container-registry-url";
pub const REGISTRY_EMAIL: &str = "container-registry-email";
pub const ARGUMENTS: &str = "arguments";

/// Every input the step understands
pub const INPUTS: &[InputDef] = &[
    InputDef {
        name: SECRET_TYPE,
        description: "Type of Kubernetes secret. For example, docker-registry or generic",
        required: true,
        default: Some("docker-registry"),
    },
    InputDef {
        name: SECRET_NAME,
        description: "Name of the secret. You can use this secret name in the Kubernetes YAML configuration file",
        required: true,
        default: None,
    },
    InputDef {
        name: NAMESPACE,
        description: "Choose the target Kubernetes namespace. If the namespace is not provided, the commands will run in the default namespace",
        required: false,
        default: None,
    },
    InputDef {
        name: REGISTRY_USERNAME,
        description: "Container Registry user name",
        required: false,
        default: None,
    },
    InputDef {
        name: REGISTRY_PASSWORD,
        description: "Container Registry password",
        required: false,
        default: None,
    },
    InputDef {
        name: REGISTRY_URL,
        description: "Container Registry URL",
        required: false,
        default: None,
    },
    InputDef {
        name: REGISTRY_EMAIL,
        description: "Email address for the docker-registry secret",
        required: false,
        default: None,
    },
    InputDef {
        name: ARGUMENTS,
        description: "Specify keys and literal values to insert in generic type secret. For example, --from-literal=key1=value1 --from-literal=key2=\"top secret\"",
        required: false,
        default: None,
    },
];

/// Raw string inputs of the step
///
/// Blank values are normalised to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActionInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_registry_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_registry_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_registry_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_registry_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl ActionInputs {
    /// Read inputs from `INPUT_*` variables of the current process
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read inputs through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| normalize(lookup(&env_key(name)));
        Self {
            secret_type: get(SECRET_TYPE),
            secret_name: get(SECRET_NAME),
            namespace: get(NAMESPACE),
            container_registry_username: get(REGISTRY_USERNAME),
            container_registry_password: get(REGISTRY_PASSWORD),
            container_registry_url: get(REGISTRY_URL),
            container_registry_email: get(REGISTRY_EMAIL),
            arguments: get(ARGUMENTS),
        }
    }

    /// Read inputs from the environment, falling back to the file named by
    /// `INPUTS_FILE` for anything the environment leaves unset
    pub fn load() -> Result<Self> {
        let inputs = Self::from_env();
        match std::env::var_os(INPUTS_FILE).filter(|p| !p.is_empty()) {
            Some(path) => Ok(inputs.merge(Self::from_file(Path::new(&path))?)),
            None => Ok(inputs),
        }
    }

    /// Parse an inputs file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to read inputs file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse an inputs file keyed by input name
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let inputs: Self = serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse inputs file: {}", e)))?;
        Ok(inputs.normalized())
    }

    /// Fill every input missing from `self` with the value from `defaults`
    pub fn merge(self, defaults: Self) -> Self {
        Self {
            secret_type: self.secret_type.or(defaults.secret_type),
            secret_name: self.secret_name.or(defaults.secret_name),
            namespace: self.namespace.or(defaults.namespace),
            container_registry_username: self
                .container_registry_username
                .or(defaults.container_registry_username),
            container_registry_password: self
                .container_registry_password
                .or(defaults.container_registry_password),
            container_registry_url: self
                .container_registry_url
                .or(defaults.container_registry_url),
            container_registry_email: self
                .container_registry_email
                .or(defaults.container_registry_email),
            arguments: self.arguments.or(defaults.arguments),
        }
    }

    /// Value of an input by its workflow name
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            SECRET_TYPE => &self.secret_type,
            SECRET_NAME => &self.secret_name,
            NAMESPACE => &self.namespace,
            REGISTRY_USERNAME => &self.container_registry_username,
            REGISTRY_PASSWORD => &self.container_registry_password,
            REGISTRY_URL => &self.container_registry_url,
            REGISTRY_EMAIL => &self.container_registry_email,
            ARGUMENTS => &self.arguments,
            _ => return None,
        };
        value.as_deref()
    }

    /// Value of a required input
    pub fn required(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| Error::MissingInput(name.to_string()))
    }

    fn normalized(self) -> Self {
        Self {
            secret_type: normalize(self.secret_type),
            secret_name: normalize(self.secret_name),
            namespace: normalize(self.namespace),
            container_registry_username: normalize(self.container_registry_username),
            container_registry_password: normalize(self.container_registry_password),
            container_registry_url: normalize(self.container_registry_url),
            container_registry_email: normalize(self.container_registry_email),
            arguments: normalize(self.arguments),
        }
    }
}

/// Environment variable carrying an input, e.g. `INPUT_SECRET-NAME`
pub fn env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
