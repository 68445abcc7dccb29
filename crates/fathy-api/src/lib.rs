//! # Fathy API
//!
//! HTTP surface of the Fathy robot control server.
//!
//! - **Operation routes**: one `GET`/`POST` route per binding of the
//!   endpoint table, `/api/<module-path>/<operation>`
//! - **System routes**: endpoint listing and server status
//! - **Speech proxy**: multipart audio upload forwarded to the external
//!   speech-to-speech service
//! - **Static files**: the touch interface and its assets
//!
//! ## Request flow
//!
//! ```text
//! request ──► router ──► dispatch ──► Binding::invoke ──► blocking pool
//!                │
//!                └──► speech proxy ──► s2s service
//! ```

pub mod error;
pub mod http;
pub mod proxy;
pub mod server;
pub mod state;

pub use error::{ApiError, ProxyError};
pub use http::routes::create_router;
pub use http::system::{
    RESERVED_PATHS, SYSTEM_LIST_PATH, SYSTEM_NAME, SYSTEM_STATUS_PATH, TALK_TO_FATHY_PATH,
};
pub use proxy::{secure_filename, SpeechClient, SpeechRequest, SpeechResponse};
pub use server::ApiServer;
pub use state::AppState;
