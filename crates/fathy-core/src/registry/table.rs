//! Endpoint table.
//!
//! Built once at startup, then shared read-only with every request handler.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::Value;

use fathy_protocols::{InputMap, Operation, OperationError};

use crate::error::RegistryError;

/// Owner name reported for reserved paths.
const RESERVED_OWNER: &str = "reserved route";

/// One endpoint path bound to one operation.
pub struct Binding {
    /// Derived endpoint path.
    pub path: String,

    /// Dotted identifier of the owning module.
    pub module: String,

    /// The bound operation.
    pub operation: Arc<dyn Operation>,
}

impl Binding {
    pub fn new(
        path: impl Into<String>,
        module: impl Into<String>,
        operation: Arc<dyn Operation>,
    ) -> Self {
        Self {
            path: path.into(),
            module: module.into(),
            operation,
        }
    }

    /// Operation name.
    pub fn name(&self) -> &str {
        self.operation.name()
    }

    /// Fill declared defaults and invoke the operation.
    ///
    /// The operation runs on the blocking pool so a slow operation never
    /// stalls the async workers. A panic inside the operation is reported as
    /// [`OperationError::Panicked`].
    pub async fn invoke(&self, input: InputMap) -> Result<Value, OperationError> {
        let input = self.operation.definition().apply_defaults(input);
        let operation = self.operation.clone();

        tokio::task::spawn_blocking(move || operation.invoke(&input))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    OperationError::Panicked(panic_message(e.into_panic().as_ref()))
                } else {
                    OperationError::ExecutionFailed(e.to_string())
                }
            })?
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("path", &self.path)
            .field("module", &self.module)
            .field("operation", &self.operation.name())
            .finish()
    }
}

/// Extract the message carried by a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Immutable table of bindings, in registration order.
#[derive(Debug, Default)]
pub struct EndpointTable {
    bindings: Vec<Arc<Binding>>,
    index: HashMap<String, usize>,
}

impl EndpointTable {
    /// Look up the binding for a path.
    pub fn get(&self, path: &str) -> Option<Arc<Binding>> {
        self.index.get(path).map(|&i| self.bindings[i].clone())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// All bound paths, in registration order.
    pub fn paths(&self) -> Vec<String> {
        self.bindings.iter().map(|b| b.path.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Binding>> {
        self.bindings.iter()
    }
}

/// Collects bindings and rejects path collisions.
#[derive(Debug, Default)]
pub struct EndpointTableBuilder {
    table: EndpointTable,
    reserved: HashSet<String>,
}

impl EndpointTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths owned by fixed routes; binding any of them is a collision.
    pub fn with_reserved<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a binding.
    pub fn insert(&mut self, binding: Binding) -> Result<(), RegistryError> {
        if !binding.path.starts_with('/') || binding.path.contains("//") {
            return Err(RegistryError::InvalidPath(binding.path));
        }

        if self.reserved.contains(&binding.path) {
            return Err(RegistryError::PathCollision {
                path: binding.path,
                existing: RESERVED_OWNER.to_string(),
                incoming: binding.module,
            });
        }

        if let Some(&i) = self.table.index.get(&binding.path) {
            return Err(RegistryError::PathCollision {
                path: binding.path,
                existing: self.table.bindings[i].module.clone(),
                incoming: binding.module,
            });
        }

        self.table
            .index
            .insert(binding.path.clone(), self.table.bindings.len());
        self.table.bindings.push(Arc::new(binding));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Freeze the table.
    pub fn build(self) -> EndpointTable {
        self.table
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
