//! Utility modules for Fathy, under the `utilities/` namespace.

mod status_check;

pub use status_check::StatusCheckModule;

use fathy_protocols::ApiModule;

/// All utility modules, in catalogue order.
pub fn modules() -> Vec<Box<dyn ApiModule>> {
    vec![Box::new(StatusCheckModule::new())]
}
