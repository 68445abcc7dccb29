//! Operation definition types.

use serde::{Deserialize, Serialize};

use super::InputMap;

/// Names starting with this prefix are never exposed as endpoints.
pub const PRIVATE_PREFIX: &str = "_";

/// A declared input key of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Key in the input mapping.
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Value filled in when the key is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ParameterSpec {
    /// An optional parameter with a default value.
    pub fn optional(name: impl Into<String>, default: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            default: Some(default.into()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Definition of an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationDefinition {
    /// Operation name; the last segment of the endpoint path.
    pub name: String,

    /// Description of what the operation does.
    pub description: String,

    /// Declared input keys.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl OperationDefinition {
    /// Create a new operation definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Declare an input parameter.
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Whether the operation is private and must not be bound.
    pub fn is_private(&self) -> bool {
        self.name.starts_with(PRIVATE_PREFIX)
    }

    /// Fill defaults for absent declared keys. Undeclared keys are passed
    /// through untouched.
    pub fn apply_defaults(&self, mut input: InputMap) -> InputMap {
        for param in &self.parameters {
            if input.contains_key(&param.name) {
                continue;
            }
            if let Some(default) = &param.default {
                input.insert(param.name.clone(), default.clone());
            }
        }
        input
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
