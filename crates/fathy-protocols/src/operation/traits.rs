//! Operation trait definition.

use super::{InputMap, OperationDefinition};
use crate::error::OperationError;

/// Core trait for operations.
///
/// Operations are synchronous: they run to completion on the calling thread
/// and return a JSON document.
pub trait Operation: Send + Sync {
    /// Returns the operation definition.
    fn definition(&self) -> &OperationDefinition;

    /// Invoke the operation with a prepared input mapping.
    fn invoke(&self, input: &InputMap) -> Result<serde_json::Value, OperationError>;

    /// Operation name.
    fn name(&self) -> &str {
        &self.definition().name
    }
}

type Handler = dyn Fn(&InputMap) -> Result<serde_json::Value, OperationError> + Send + Sync;

/// Operation backed by a closure or function.
pub struct FnOperation {
    definition: OperationDefinition,
    handler: Box<Handler>,
}

impl FnOperation {
    pub fn new<F>(definition: OperationDefinition, handler: F) -> Self
    where
        F: Fn(&InputMap) -> Result<serde_json::Value, OperationError> + Send + Sync + 'static,
    {
        Self {
            definition,
            handler: Box::new(handler),
        }
    }
}

impl Operation for FnOperation {
    fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    fn invoke(&self, input: &InputMap) -> Result<serde_json::Value, OperationError> {
        (self.handler)(input)
    }
}

impl std::fmt::Debug for FnOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOperation")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}
