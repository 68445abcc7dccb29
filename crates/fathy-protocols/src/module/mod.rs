//! API module protocol definitions.
//!
//! A module is a named group of operations. Modules are compiled into the
//! binary and listed in a catalogue; the registry loads each one once.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
