//! Error types for the secret creation step

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for the secret creation step
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the secret creation step
#[derive(Debug, Error)]
pub enum Error {
    /// No cluster context has been configured for kubectl
    #[error("Cluster context not set. Use k8s-set-context/aks-set-context action to set cluster context")]
    ClusterContextNotSet,

    /// The cluster-management executable could not be found
    #[error("{0} is not installed")]
    ToolNotFound(String),

    /// `secret-type` is neither `docker-registry` nor `generic`
    #[error("Invalid secret-type input '{0}'. It should be either docker-registry or generic")]
    UnsupportedKind(String),

    /// A required input was absent or blank
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// A `from-literal` segment without a usable key/value pair
    #[error("Invalid from-literal input. It should contain a key and value")]
    MalformedLiteral,

    /// Text before the first `--` in the generic arguments
    #[error("Invalid arguments input. It should start with a flag such as --from-literal")]
    MalformedArguments,

    /// kubectl exited with a non-zero code while creating the secret
    #[error("Secret create failed: kubectl exited with code {code} for secret '{name}'")]
    CreationFailed { name: String, code: i32 },

    /// A literal value could not be persisted to its temp file
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The executable could not be spawned
    #[error("Failed to run {}: {source}", program.display())]
    Process {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The step output could not be recorded
    #[error("Failed to set output '{name}': {source}")]
    Output {
        name: String,
        #[source]
        source: io::Error,
    },
}
