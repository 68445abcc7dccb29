//! Operation protocol definitions.
//!
//! Operations are the unit of work exposed by API modules.

mod definition;
mod input;
mod traits;

pub use definition::*;
pub use input::*;
pub use traits::*;
