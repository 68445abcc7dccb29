//! API module trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ModuleContext, ModuleManifest};
use crate::error::ModuleError;
use crate::operation::Operation;

/// A named group of operations.
///
/// `load` runs once at startup. A module that fails to load is skipped and
/// does not affect other modules.
#[async_trait]
pub trait ApiModule: Send + Sync {
    /// Returns the module manifest.
    fn manifest(&self) -> &ModuleManifest;

    /// Produce the module's operations, in declaration order.
    async fn load(&self, ctx: ModuleContext) -> Result<Vec<Arc<dyn Operation>>, ModuleError>;
}
