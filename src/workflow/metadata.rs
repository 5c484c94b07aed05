//! `action.yml` generation from the input table

use serde_yaml::{Mapping, Value};

use crate::config::inputs::env_key;
use crate::config::INPUTS;
use crate::workflow::SECRET_NAME_OUTPUT;
use crate::{Error, Result};

const ACTION_NAME: &str = "Create secret in Kubernetes cluster";
const ACTION_DESCRIPTION: &str =
    "Create a generic secret or docker-registry secret in a Kubernetes cluster";

/// Build the action metadata YAML for a composite step running `command`
pub fn build_action_metadata(command: &str) -> Result<String> {
    let mut action = Mapping::new();
    action.insert(key("name"), Value::String(ACTION_NAME.to_string()));
    action.insert(
        key("description"),
        Value::String(ACTION_DESCRIPTION.to_string()),
    );

    let mut inputs = Mapping::new();
    for def in INPUTS {
        let mut input = Mapping::new();
        input.insert(
            key("description"),
            Value::String(def.description.to_string()),
        );
        input.insert(key("required"), Value::Bool(def.required));
        if let Some(default) = def.default {
            input.insert(key("default"), Value::String(default.to_string()));
        }
        inputs.insert(key(def.name), Value::Mapping(input));
    }
    action.insert(key("inputs"), Value::Mapping(inputs));

    let mut secret_name = Mapping::new();
    secret_name.insert(key("description"), Value::String("Secret name".to_string()));
    let mut outputs = Mapping::new();
    outputs.insert(key(SECRET_NAME_OUTPUT), Value::Mapping(secret_name));
    action.insert(key("outputs"), Value::Mapping(outputs));

    // Composite steps do not receive INPUT_* variables on their own
    let mut step_env = Mapping::new();
    for def in INPUTS {
        step_env.insert(
            key(&env_key(def.name)),
            Value::String(format!("${{{{ inputs.{} }}}}", def.name)),
        );
    }
    let mut step = Mapping::new();
    step.insert(key("shell"), Value::String("bash".to_string()));
    step.insert(key("run"), Value::String(command.to_string()));
    step.insert(key("env"), Value::Mapping(step_env));

    let mut runs = Mapping::new();
    runs.insert(key("using"), Value::String("composite".to_string()));
    runs.insert(key("steps"), Value::Sequence(vec![Value::Mapping(step)]));
    action.insert(key("runs"), Value::Mapping(runs));

    serde_yaml::to_string(&Value::Mapping(action))
        .map_err(|e| Error::ConfigError(format!("Failed to serialize action metadata: {}", e)))
}

fn key(name: &str) -> Value {
    Value::String(name.to_string())
}
