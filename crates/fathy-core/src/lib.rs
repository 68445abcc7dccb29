//! # Fathy Core
//!
//! Module registry for the Fathy robot control server.
//!
//! ## Components
//!
//! - [`ModuleScanner`] - Loads every catalogued module once and binds its
//!   exposed operations
//! - [`EndpointTable`] - Immutable path → operation table shared with the
//!   HTTP layer
//! - [`Binding`] - One endpoint path bound to one operation

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{
    endpoint_path, Binding, EndpointTable, EndpointTableBuilder, ModuleFilter, ModuleScanner,
    ScanReport, SkippedModule, API_PREFIX,
};
