//! # Fathy Protocols
//!
//! Core protocol definitions (traits) for the Fathy robot control server.
//! Contains only interface definitions and small value types.
//!
//! ## Core Traits
//!
//! - [`ApiModule`] - A named group of operations, loaded once at startup
//! - [`Operation`] - A single synchronous operation reachable over HTTP
//!
//! ## Input Model
//!
//! Requests arrive either as query parameters or as a JSON body. Both are
//! captured by [`RequestInput`] and normalized into one [`InputMap`].

pub mod error;
pub mod module;
pub mod operation;

pub use error::{ModuleError, OperationError};
pub use module::{ApiModule, ModuleContext, ModuleManifest};
pub use operation::{
    FnOperation, InputMap, Operation, OperationDefinition, ParameterSpec, RequestInput,
};
