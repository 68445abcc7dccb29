//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use fathy_core::EndpointTable;

use crate::proxy::SpeechClient;

/// Default cap on uploaded audio size.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Default cap on JSON bodies posted to operation routes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state shared across handlers.
pub struct AppState {
    /// Bindings produced by the module scan. Never mutated after startup.
    pub endpoints: Arc<EndpointTable>,
    pub speech: SpeechClient,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(
        endpoints: Arc<EndpointTable>,
        speech: SpeechClient,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            endpoints,
            speech,
            static_dir: static_dir.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }
}
