//! Error types for the Fathy protocol layer.

mod module;
mod operation;

pub use module::*;
pub use operation::*;
