//! Module catalogue compiled into the server.

use fathy_protocols::ApiModule;

/// Every API module, in the order their endpoints are registered.
pub(crate) fn modules() -> Vec<Box<dyn ApiModule>> {
    let mut modules = fathy_robot_functions::modules();
    modules.extend(fathy_utilities::modules());
    modules
}
